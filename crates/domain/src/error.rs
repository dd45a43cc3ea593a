//! Mapping error types.

use thiserror::Error;

/// Failures turning a stored document into a domain entity.
///
/// Documents this system writes always carry the required fields, so any of
/// these indicates data corruption in the store. They are surfaced loudly
/// and never repaired or defaulted away.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// A required field is absent from the document.
    #[error("malformed document: missing required field `{field}`")]
    MissingField { field: &'static str },

    /// The document id is not a valid account id.
    #[error("malformed document: `{value}` is not a valid account id")]
    InvalidId { value: String },
}
