use thiserror::Error;

/// Reasons an inbound write request is rejected.
///
/// Every variant is a caller mistake; none is retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("null value for key {0}")]
    InvalidField(String),

    #[error("couldn't decode request body into {kind}: {reason}")]
    SchemaMismatch { kind: &'static str, reason: String },

    #[error("missing identity source: field {0} must be present and a string")]
    MissingIdentitySource(&'static str),
}

pub type IngestResult<T> = Result<T, IngestError>;
