//! Request ingestion for golli.
//!
//! Every write request passes through the same three stages before an entity
//! reaches a repository:
//!
//! 1. **Parse-as-map** -- the buffered body is decoded into an untyped JSON
//!    object, keeping the distinction between an absent field and a `null`.
//! 2. **Null rejection** -- any explicit `null` fails the request, naming the
//!    key. Without this stage the typed decode would quietly turn `null` into
//!    a default value.
//! 3. **Typed decode and stamping** -- the same buffer is decoded into the
//!    kind's draft shape, then identity and creation time are assigned.
//!
//! The body is read once by the caller and both decode passes run over that
//! one buffer. Stamping rules per kind live in [`stamp`] as [`Ingest`] impls.

pub mod error;
pub mod pipeline;
pub mod stamp;

pub use error::{IngestError, IngestResult};
pub use pipeline::{ingest, ingest_at, parse_fields, reject_nulls, BodyFields};
pub use stamp::{Ingest, IngestSource, NewLesson, NewTolli, NewUser};
