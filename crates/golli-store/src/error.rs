/// Errors from repository operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A writer panicked while holding the repository lock.
    #[error("{kind} repository lock poisoned")]
    Poisoned { kind: &'static str },
}

/// Result alias for repository operations.
pub type StoreResult<T> = Result<T, StoreError>;
