//! Error types for column store operations

use fieldbook_common::{ErrorSeverity, Severity};
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by [`Column`](crate::Column) operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Compare-and-insert found an existing record under the key
    #[error("record already exists: {key}")]
    Conflict { key: String },

    /// Point lookup or conditional update found no record under the key
    #[error("record not found: {key}")]
    NotFound { key: String },

    /// Key violates the character rules for file-backed columns
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization failed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Severity for StoreError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // Filesystem failures can leave a column half-written
            StoreError::Io(_) => ErrorSeverity::Critical,

            StoreError::Conflict { .. } => ErrorSeverity::Error,
            StoreError::NotFound { .. } => ErrorSeverity::Error,
            StoreError::InvalidKey(_) => ErrorSeverity::Error,
            StoreError::Yaml(_) => ErrorSeverity::Error,
        }
    }
}
