//! Handler error types.

use document_store::StoreError;
use domain::MappingError;
use thiserror::Error;

use crate::dispatcher::DispatchError;

/// Errors a request can fail with at the dispatcher boundary.
///
/// A legitimate "not found" is never an error; query responses carry an
/// absent entity instead. These variants cover infrastructure failure,
/// data corruption, and misconfiguration only.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The store could not be reached. Transient; the caller may retry.
    #[error("document store unavailable: {0}")]
    StoreUnavailable(StoreError),

    /// The store rejected the query or returned undecodable data. Not
    /// retried.
    #[error("document store query failed: {0}")]
    StoreQueryFailed(StoreError),

    /// A stored account document violated the data contract.
    #[error("malformed account document: {0}")]
    MalformedDocument(#[from] MappingError),

    /// The request could not be routed to a handler.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl HandlerError {
    /// Classifies a store failure.
    ///
    /// Only handlers reclassify lower-level errors; connectivity problems
    /// are transient while rejected queries and undecodable documents are
    /// not.
    pub fn from_store(source: StoreError) -> Self {
        match source {
            StoreError::Unavailable(_) => HandlerError::StoreUnavailable(source),
            StoreError::QueryRejected(_) | StoreError::Decode(_) => {
                HandlerError::StoreQueryFailed(source)
            }
        }
    }
}
