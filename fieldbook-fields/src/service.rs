//! Service layer for custom field CRUD
//!
//! Thin wrapper over a [`Column`] of [`CustomField`] records: conditional
//! store writes plus translation of store conflicts into domain errors.
//! Every operation takes the target name explicitly and the service holds no
//! per-call state, so one instance is safe to share across tasks.

use std::path::PathBuf;

use async_trait::async_trait;
use fieldbook_store::{Column, StoreError};
use tracing::debug;

use crate::error::{FieldsError, Result};
use crate::lookup::FieldLookup;
use crate::types::{CustomField, FieldAttributes, FieldName};

/// Subdirectory of the store root holding custom field records.
const COLUMN_DIR: &str = "custom_fields";

/// CRUD operations over custom field definitions.
pub struct CustomFieldService {
    column: Column<CustomField>,
}

impl CustomFieldService {
    /// Create a service persisting under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let column = Column::new(root.into().join(COLUMN_DIR));
        debug!(dir = %column.dir().display(), "custom field service ready");
        Self { column }
    }

    /// Create a service over the default store root.
    pub fn new_default() -> Self {
        Self::new(fieldbook_common::paths::store_root())
    }

    /// Create a new custom field.
    ///
    /// Compare-and-insert: fails with [`FieldsError::AlreadyExists`] when a
    /// field named `name` is already present, leaving the existing record
    /// untouched. Returns the record read back from the store.
    pub async fn create_field(
        &self,
        name: &FieldName,
        attributes: FieldAttributes,
    ) -> Result<CustomField> {
        let record = CustomField::new(name.clone(), attributes);
        self.column
            .insert_if_absent(&record)
            .await
            .map_err(|e| match e {
                StoreError::Conflict { .. } => FieldsError::AlreadyExists {
                    name: name.to_string(),
                },
                other => FieldsError::Store(other),
            })?;

        Ok(self.column.get(name.as_str()).await?)
    }

    /// Update an existing custom field.
    ///
    /// Check-exists-then-update: merges `attributes` over the stored ones,
    /// leaving unspecified attributes unchanged. Fails with
    /// [`FieldsError::NotFound`] when no field named `name` exists; nothing
    /// is created in that case. Returns the record read back from the store.
    pub async fn update_field(
        &self,
        name: &FieldName,
        attributes: FieldAttributes,
    ) -> Result<CustomField> {
        self.column
            .update_if_present(name.as_str(), |record| record.merge_attributes(attributes))
            .await
            .map_err(|e| match e {
                StoreError::NotFound { .. } => FieldsError::NotFound {
                    name: name.to_string(),
                },
                other => FieldsError::Store(other),
            })?;

        Ok(self.column.get(name.as_str()).await?)
    }

    /// Set `archived = true` on a field.
    ///
    /// No existence precondition: archiving a missing name is a no-op and
    /// archiving twice leaves the record as it was. Other attributes are
    /// untouched.
    pub async fn archive_field(&self, name: &FieldName) -> Result<()> {
        self.column
            .update(name.as_str(), |record| record.archived = true)
            .await?;
        Ok(())
    }

    /// Point lookup by name.
    ///
    /// A miss surfaces as the untranslated store error.
    pub async fn get_field(&self, name: &FieldName) -> Result<CustomField> {
        Ok(self.column.get(name.as_str()).await?)
    }

    /// Bulk lookup. Names with no record are silently omitted.
    pub async fn fetch_fields(&self, names: &[FieldName]) -> Result<Vec<CustomField>> {
        let keys: Vec<&str> = names.iter().map(FieldName::as_str).collect();
        Ok(self.column.multi_get(&keys).await?)
    }

    /// All custom fields, unfiltered.
    pub async fn list_fields(&self) -> Result<Vec<CustomField>> {
        Ok(self.column.scan().await?)
    }
}

#[async_trait]
impl FieldLookup for CustomFieldService {
    async fn exists_or_fail(&self, name: &FieldName) -> Result<()> {
        self.get_field(name).await.map(|_| ())
    }
}
