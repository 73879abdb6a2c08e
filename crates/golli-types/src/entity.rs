use chrono::{DateTime, Utc};

/// Content-derived identifier shared by every entity kind.
pub type EntityId = u64;

/// Creation timestamps are always UTC.
pub type Timestamp = DateTime<Utc>;

/// Identity-extraction policy for a stored entity kind.
///
/// Implementations must return the identity assigned at ingestion time.
/// Entities are immutable once stored, so `id` is stable for the lifetime of
/// the value.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Short lowercase name of the kind (e.g. `"user"`), used in logs and
    /// error messages.
    const KIND: &'static str;

    /// The entity's identity.
    fn id(&self) -> EntityId;
}
