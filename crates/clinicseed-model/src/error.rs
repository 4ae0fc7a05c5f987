use thiserror::Error;

/// A field failed its validator chain.
///
/// Every constraint class (format, membership, structural, reference,
/// uniqueness) reports through this one kind, carrying the offending field
/// and a human-readable message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("validation failed for '{field}': {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Convenience alias for validator results.
pub type Result<T> = std::result::Result<T, ValidationError>;
