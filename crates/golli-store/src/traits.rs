use golli_types::{Entity, EntityId};

use crate::error::StoreResult;

/// Storage capability set for one entity kind.
///
/// Implementations must satisfy these invariants:
/// - An entity passed to `add` is visible to every later `get` on the same
///   instance.
/// - Insertion order is preserved; `get` returns the first match.
/// - Concurrent calls are safe (`Send + Sync`).
pub trait EntityRepository<T: Entity>: Send + Sync {
    /// Append an entity.
    fn add(&self, entity: T) -> StoreResult<()>;

    /// Look up the first entity whose identity equals `id`.
    ///
    /// Returns `Ok(None)` if no such entity was ever added.
    fn get(&self, id: EntityId) -> StoreResult<Option<T>>;

    /// Ordered snapshot of every stored entity.
    fn all(&self) -> StoreResult<Vec<T>>;

    /// Number of stored entities.
    fn len(&self) -> StoreResult<usize>;

    /// Returns `true` if nothing has been added.
    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Check whether an entity with this identity exists.
    fn contains(&self, id: EntityId) -> StoreResult<bool> {
        Ok(self.get(id)?.is_some())
    }
}
