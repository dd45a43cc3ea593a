use thiserror::Error;

/// Errors surfaced by document store backends.
///
/// Backend-specific failures are wrapped into these variants at the store
/// boundary and never leak through it raw. The split matters to callers:
/// [`StoreError::Unavailable`] is transient, the rest are not.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached or timed out.
    #[error("document store unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected the query or write itself.
    #[error("document store rejected the request: {0}")]
    QueryRejected(String),

    /// A stored document could not be decoded.
    #[error("document decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for document store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
