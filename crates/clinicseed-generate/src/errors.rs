use thiserror::Error;

use clinicseed_model::ValidationError;

/// Errors emitted by the seeding engine.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("unknown collection: {0}")]
    UnknownCollection(String),
    #[error("collection '{0}' has no documents to reference")]
    Exhausted(String),
    #[error("reference data error: {0}")]
    Reference(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
