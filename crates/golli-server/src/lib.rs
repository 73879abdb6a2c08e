//! HTTP server for golli.
//!
//! Exposes users, lessons and tolli notes over JSON. Write routes run the
//! ingestion pipeline from `golli-ingest` and append to the shared
//! repositories in [`AppState`]; `GET /users/{id}` reads back.
//!
//! Validation failures answer 400, unknown ids 404, and anything else 500,
//! always with a plain-text message.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::GolliServer;
pub use state::AppState;
