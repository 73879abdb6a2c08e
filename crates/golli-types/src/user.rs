use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId, Timestamp};

/// A registered user.
///
/// `id` is the identity hash of `email` and `pass_hash` is the identity hash
/// of the raw password; the password itself is never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub pass_hash: u64,
    pub email: String,
    /// Ids of content this user authored.
    pub authored: Vec<EntityId>,
    pub signup_date: Timestamp,
}

impl Entity for User {
    const KIND: &'static str = "user";

    fn id(&self) -> EntityId {
        self.id
    }
}
