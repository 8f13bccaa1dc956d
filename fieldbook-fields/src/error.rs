//! Error types for custom field operations

use fieldbook_common::{ErrorSeverity, Severity};
use fieldbook_store::StoreError;
use thiserror::Error;

/// Result type alias for custom field operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Error code shared by the domain error conditions.
const DOMAIN_ERROR_CODE: u16 = 100;

/// Errors that can occur during custom field operations
#[derive(Debug, Error)]
pub enum FieldsError {
    /// Create found an existing field with the same name
    #[error("custom field already exists: {name}")]
    AlreadyExists { name: String },

    /// Update addressed a field that does not exist
    #[error("custom field does not exist: {name}")]
    NotFound { name: String },

    /// Field name violates the store key rules
    #[error("invalid field name: {0}")]
    InvalidName(String),

    /// Untranslated store failure, including point-lookup misses
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl FieldsError {
    /// Numeric code carried by the domain error conditions.
    ///
    /// Both conflict and absence report code 100.
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::AlreadyExists { .. } | Self::NotFound { .. } => Some(DOMAIN_ERROR_CODE),
            _ => None,
        }
    }

    /// The offending field name, when the error refers to one.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::AlreadyExists { name } | Self::NotFound { name } => Some(name),
            _ => None,
        }
    }
}

impl Severity for FieldsError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            FieldsError::AlreadyExists { .. } => ErrorSeverity::Error,
            FieldsError::NotFound { .. } => ErrorSeverity::Error,
            FieldsError::InvalidName(_) => ErrorSeverity::Error,

            // Delegate to wrapped error's severity
            FieldsError::Store(err) => err.severity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_carry_code_and_name() {
        let err = FieldsError::AlreadyExists {
            name: "color".into(),
        };
        assert_eq!(err.code(), Some(100));
        assert_eq!(err.field_name(), Some("color"));
        assert_eq!(err.to_string(), "custom field already exists: color");

        let err = FieldsError::NotFound {
            name: "size".into(),
        };
        assert_eq!(err.code(), Some(100));
        assert_eq!(err.field_name(), Some("size"));
    }

    #[test]
    fn store_errors_have_no_code() {
        let err = FieldsError::Store(StoreError::NotFound {
            key: "color".into(),
        });
        assert_eq!(err.code(), None);
        assert_eq!(err.field_name(), None);
    }

    #[test]
    fn store_severity_is_delegated() {
        let err = FieldsError::Store(StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk gone",
        )));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
