//! Existence-check capability for custom fields
//!
//! Cross-referencing consumers only need to know whether a field name
//! resolves; they depend on this trait rather than on the concrete
//! [`CustomFieldService`](crate::CustomFieldService).

use async_trait::async_trait;

use crate::error::Result;
use crate::types::FieldName;

/// Resolve a field name or fail with the lookup error.
#[async_trait]
pub trait FieldLookup: Send + Sync {
    /// Succeed iff a field with `name` exists in the registry.
    ///
    /// Absence surfaces as the same error a direct point lookup would
    /// return; callers decide how to frame it.
    async fn exists_or_fail(&self, name: &FieldName) -> Result<()>;
}
