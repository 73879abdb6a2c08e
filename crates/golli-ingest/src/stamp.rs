use chrono::SecondsFormat;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use golli_crypto::IdentityHasher;
use golli_types::{Entity, EntityId, Lesson, Timestamp, Tolli, User};

use crate::error::{IngestError, IngestResult};

/// Everything stage 3 can draw identity from.
pub struct IngestSource<'a> {
    /// The request body exactly as received.
    pub raw: &'a [u8],
    /// The untyped view produced by stage 1.
    pub fields: &'a Map<String, Value>,
    /// Creation time to stamp.
    pub now: Timestamp,
}

impl IngestSource<'_> {
    /// A string-valued identity source field.
    pub fn identity_str(&self, field: &'static str) -> IngestResult<&str> {
        self.fields
            .get(field)
            .and_then(Value::as_str)
            .ok_or(IngestError::MissingIdentitySource(field))
    }
}

/// Stamping rule for an entity kind.
///
/// `Draft` is the caller-supplied shape decoded in stage 3; `stamp` turns it
/// into a stored entity by assigning identity and creation time.
pub trait Ingest: Entity + Sized {
    type Draft: DeserializeOwned;

    fn stamp(draft: Self::Draft, source: &IngestSource<'_>) -> IngestResult<Self>;
}

/// Inbound shape of `POST /users/`. The password is read from the untyped
/// view only and never lands in a typed value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub authored: Vec<EntityId>,
}

impl Ingest for User {
    type Draft = NewUser;

    fn stamp(draft: NewUser, source: &IngestSource<'_>) -> IngestResult<Self> {
        let id = IdentityHasher::hash_str(source.identity_str("email")?);
        let pass_hash = IdentityHasher::hash_str(source.identity_str("password")?);
        Ok(User {
            id,
            username: draft.username,
            pass_hash,
            email: draft.email,
            authored: draft.authored,
            signup_date: source.now,
        })
    }
}

/// Inbound shape of `POST /lessons/`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewLesson {
    pub title: String,
    pub content: String,
    pub author_id: u32,
    pub language: String,
}

impl Ingest for Lesson {
    type Draft = NewLesson;

    fn stamp(draft: NewLesson, source: &IngestSource<'_>) -> IngestResult<Self> {
        let id = IdentityHasher::hash_str(source.identity_str("content")?);
        Ok(Lesson {
            id,
            title: draft.title,
            content: draft.content,
            author_id: draft.author_id,
            language: draft.language,
            timestamp: source.now,
        })
    }
}

/// Inbound shape of `POST /tolli/`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewTolli {
    pub user_id: EntityId,
    pub word: String,
    pub state: u8,
}

impl Ingest for Tolli {
    type Draft = NewTolli;

    fn stamp(draft: NewTolli, source: &IngestSource<'_>) -> IngestResult<Self> {
        // Nanosecond precision so resubmissions within the same second differ.
        let stamp = source.now.to_rfc3339_opts(SecondsFormat::Nanos, true);
        let id = IdentityHasher::hash_parts(&[source.raw, stamp.as_bytes()]);
        Ok(Tolli {
            id,
            user_id: draft.user_id,
            word: draft.word,
            state: draft.state,
            timestamp: source.now,
        })
    }
}
