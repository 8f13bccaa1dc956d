//! Error types for data template operations

use fieldbook_common::{ErrorSeverity, Severity};
use fieldbook_fields::FieldsError;
use fieldbook_store::StoreError;
use thiserror::Error;

/// Result type alias for data template operations
pub type Result<T> = std::result::Result<T, TemplatesError>;

/// Errors that can occur during data template operations
#[derive(Debug, Error)]
pub enum TemplatesError {
    /// A create or update referenced a field name with no definition
    #[error("unknown custom field '{name}' referenced by {input}")]
    UnknownCustomField {
        /// Which input carried the reference (`custom_fields`,
        /// `custom_fields_add`, or `custom_fields_remove`)
        input: &'static str,
        name: String,
    },

    /// Update addressed a template that does not exist
    #[error("data template not found: {key}")]
    TemplateNotFound { key: String },

    /// Template key violates the store key rules
    #[error("invalid template key: {0}")]
    InvalidKey(String),

    /// Field lookup failed for a reason other than absence
    #[error(transparent)]
    Fields(FieldsError),

    /// Untranslated store failure, including point-lookup misses
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Severity for TemplatesError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            TemplatesError::UnknownCustomField { .. } => ErrorSeverity::Error,
            TemplatesError::TemplateNotFound { .. } => ErrorSeverity::Error,
            TemplatesError::InvalidKey(_) => ErrorSeverity::Error,

            // Delegate to wrapped error's severity
            TemplatesError::Fields(err) => err.severity(),
            TemplatesError::Store(err) => err.severity(),
        }
    }
}
