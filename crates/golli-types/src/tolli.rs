use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId, Timestamp};

/// A short text note owned by a user.
///
/// The id covers the raw request body and the creation timestamp, so two
/// byte-identical submissions made at different instants get distinct ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tolli {
    pub id: EntityId,
    pub user_id: EntityId,
    pub word: String,
    pub state: u8,
    pub timestamp: Timestamp,
}

impl Entity for Tolli {
    const KIND: &'static str = "tolli";

    fn id(&self) -> EntityId {
        self.id
    }
}
