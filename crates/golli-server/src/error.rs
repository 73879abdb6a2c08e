use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use golli_types::EntityId;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Ingest(#[from] golli_ingest::IngestError),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: EntityId },

    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store error: {0}")]
    Store(#[from] golli_store::StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// HTTP status for this error. Caller mistakes map to 4xx, everything
    /// else to 500.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Ingest(_) | Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Serialization(_)
            | Self::Store(_)
            | Self::Config(_)
            | Self::Io(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        (status, self.to_string()).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use golli_ingest::IngestError;

    #[test]
    fn validation_errors_are_client_errors() {
        let cases = [
            IngestError::MalformedBody("eof".into()),
            IngestError::InvalidField("email".into()),
            IngestError::SchemaMismatch { kind: "user", reason: "bad".into() },
            IngestError::MissingIdentitySource("email"),
        ];
        for err in cases {
            assert_eq!(ServerError::from(err).status(), StatusCode::BAD_REQUEST);
        }
        assert_eq!(ServerError::InvalidId("x".into()).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_is_404() {
        let err = ServerError::NotFound { kind: "user", id: 3 };
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "user not found: 3");
    }

    #[test]
    fn store_failure_is_500() {
        let err = ServerError::from(golli_store::StoreError::Poisoned { kind: "user" });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn ingest_message_is_passed_through() {
        let err = ServerError::from(IngestError::InvalidField("email".into()));
        assert_eq!(err.to_string(), "null value for key email");
    }
}
