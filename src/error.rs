//! Error types for the churn prediction service

use thiserror::Error;

/// Result type alias for churn service operations
pub type Result<T> = std::result::Result<T, ChurnError>;

/// Errors raised by artifact loading and pipeline evaluation
#[derive(Error, Debug)]
pub enum ChurnError {
    #[error("Data error: {0}")]
    DataError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid shape: expected {expected}, got {actual}")]
    ShapeError { expected: String, actual: String },

    #[error("Feature not found: {0}")]
    FeatureNotFound(String),
}
