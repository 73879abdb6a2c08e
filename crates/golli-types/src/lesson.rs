use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId, Timestamp};

/// A lesson, content-addressed by the hash of `content`.
///
/// Two lessons with identical content share an id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub author_id: u32,
    /// Language tag, e.g. `"en"` or `"sv"`.
    pub language: String,
    pub timestamp: Timestamp,
}

impl Entity for Lesson {
    const KIND: &'static str = "lesson";

    fn id(&self) -> EntityId {
        self.id
    }
}
