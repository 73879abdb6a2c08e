use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use golli_types::{Entity, EntityId};

use crate::error::{StoreError, StoreResult};
use crate::traits::EntityRepository;

/// In-memory, `Vec`-backed repository for one entity kind.
///
/// Entities are held in insertion order behind a `RwLock`: `add` takes the
/// write lock and `get` the read lock, so writers never race each other and
/// readers never observe a half-appended sequence. Entities are cloned out on
/// read.
pub struct InMemoryRepository<T> {
    entities: RwLock<Vec<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(Vec::new()),
        }
    }

    fn read_guard(&self) -> StoreResult<RwLockReadGuard<'_, Vec<T>>> {
        self.entities
            .read()
            .map_err(|_| StoreError::Poisoned { kind: T::KIND })
    }

    fn write_guard(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<T>>> {
        self.entities
            .write()
            .map_err(|_| StoreError::Poisoned { kind: T::KIND })
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityRepository<T> for InMemoryRepository<T> {
    fn add(&self, entity: T) -> StoreResult<()> {
        let id = entity.id();
        let mut entities = self.write_guard()?;
        // Content-addressed ids can repeat. The earlier entity keeps winning
        // lookups; the new one is still appended.
        if entities.iter().any(|e| e.id() == id) {
            tracing::debug!(kind = T::KIND, id, "id already present, appending shadowed entity");
        }
        entities.push(entity);
        Ok(())
    }

    fn get(&self, id: EntityId) -> StoreResult<Option<T>> {
        let entities = self.read_guard()?;
        Ok(entities.iter().find(|e| e.id() == id).cloned())
    }

    fn all(&self) -> StoreResult<Vec<T>> {
        Ok(self.read_guard()?.clone())
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.read_guard()?.len())
    }
}

impl<T: Entity> std::fmt::Debug for InMemoryRepository<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.entities.read().map(|e| e.len()).ok();
        f.debug_struct("InMemoryRepository")
            .field("kind", &T::KIND)
            .field("entity_count", &count)
            .finish()
    }
}
