//! Entity types for golli.
//!
//! Every other golli crate depends on `golli-types`. The three stored
//! resources are plain records carrying a content-derived identity, an
//! ownership field, and a creation timestamp:
//!
//! - [`User`] -- identified by the hash of its email
//! - [`Lesson`] -- identified by the hash of its content
//! - [`Tolli`] -- a short note, identified by the hash of the raw request
//!   body and its creation timestamp
//!
//! The [`Entity`] trait is the identity-extraction policy the generic
//! repository in `golli-store` is parameterized over.

pub mod entity;
pub mod lesson;
pub mod tolli;
pub mod user;

pub use entity::{Entity, EntityId, Timestamp};
pub use lesson::Lesson;
pub use tolli::Tolli;
pub use user::User;
