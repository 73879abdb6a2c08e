//! Entity repositories for golli.
//!
//! A repository holds an ordered sequence of entities of one kind and
//! exposes `add` and `get`. There is one generic container,
//! [`InMemoryRepository`], parameterized over the entity kind; the identity
//! used by `get` comes from the kind's [`golli_types::Entity`] impl.
//!
//! # Design Rules
//!
//! 1. Entities are immutable once added. There is no update or delete.
//! 2. A repository instance is shared (via `Arc`) by everything that reads or
//!    writes it. It is never copied per request.
//! 3. `add` and `get` on one repository are serialized by a reader/writer
//!    lock.
//! 4. An unknown id is a normal `None`, not an error.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryRepository;
pub use traits::EntityRepository;
