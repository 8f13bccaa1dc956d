//! Service layer for data template CRUD
//!
//! Wraps a [`Column`] of [`DataTemplate`] records and cross-references every
//! custom field name through a [`FieldLookup`] before mutating writes. The
//! validation lookups and the subsequent write are separate store
//! operations; a field that disappears between them is not re-checked.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use fieldbook_fields::{FieldLookup, FieldName};
use fieldbook_store::{Column, StoreError};
use tracing::debug;

use crate::error::{Result, TemplatesError};
use crate::types::{DataTemplate, TemplateAttributes, TemplateKey, TemplatePatch};
use crate::validation::{check_fields, VIEW_ADD, VIEW_REMOVE, VIEW_REPLACE};

/// Subdirectory of the store root holding data template records.
const COLUMN_DIR: &str = "data_templates";

/// CRUD operations over data templates.
///
/// Every operation takes the target key explicitly; the service holds no
/// per-call state and is safe to share across tasks.
pub struct DataTemplateService {
    column: Column<DataTemplate>,
    fields: Arc<dyn FieldLookup>,
}

impl DataTemplateService {
    /// Create a service persisting under `root`, validating field references
    /// through `fields`.
    pub fn new(root: impl Into<PathBuf>, fields: Arc<dyn FieldLookup>) -> Self {
        let column = Column::new(root.into().join(COLUMN_DIR));
        debug!(dir = %column.dir().display(), "data template service ready");
        Self { column, fields }
    }

    /// Create a service over the default store root.
    pub fn new_default(fields: Arc<dyn FieldLookup>) -> Self {
        Self::new(fieldbook_common::paths::store_root(), fields)
    }

    /// Create a data template.
    ///
    /// Every name in `custom_fields` must resolve through the lookup, or the
    /// create aborts before anything is persisted. The key itself carries no
    /// existence guard: creating over an existing template overwrites it,
    /// last write wins. Returns the record read back via [`get`](Self::get).
    pub async fn create(
        &self,
        key: &TemplateKey,
        custom_fields: BTreeSet<FieldName>,
        attributes: TemplateAttributes,
    ) -> Result<DataTemplate> {
        check_fields(self.fields.as_ref(), VIEW_REPLACE, &custom_fields).await?;

        let record = DataTemplate::new(key.clone(), custom_fields, attributes);
        self.column.put(&record).await?;
        debug!(key = %key, "created data template");

        self.get(key).await
    }

    /// Update an existing data template.
    ///
    /// Names in each view present on the patch are validated first. The
    /// patch applies only if the template exists; absence yields
    /// [`TemplatesError::TemplateNotFound`] and nothing is created. Returns
    /// the record read back via [`get`](Self::get).
    pub async fn update(&self, key: &TemplateKey, patch: TemplatePatch) -> Result<DataTemplate> {
        if let Some(names) = &patch.custom_fields {
            check_fields(self.fields.as_ref(), VIEW_REPLACE, names).await?;
        }
        if let Some(names) = &patch.custom_fields_add {
            check_fields(self.fields.as_ref(), VIEW_ADD, names).await?;
        }
        if let Some(names) = &patch.custom_fields_remove {
            check_fields(self.fields.as_ref(), VIEW_REMOVE, names).await?;
        }

        self.column
            .update_if_present(key.as_str(), |record| patch.apply(record))
            .await
            .map_err(|e| match e {
                StoreError::NotFound { .. } => TemplatesError::TemplateNotFound {
                    key: key.to_string(),
                },
                other => TemplatesError::Store(other),
            })?;
        debug!(key = %key, "updated data template");

        self.get(key).await
    }

    /// Point lookup by key.
    ///
    /// A miss surfaces as the untranslated store error.
    pub async fn get(&self, key: &TemplateKey) -> Result<DataTemplate> {
        Ok(self.column.get(key.as_str()).await?)
    }

    /// Fetch then delete.
    ///
    /// A missing template fails through the lookup rather than silently
    /// succeeding.
    pub async fn delete(&self, key: &TemplateKey) -> Result<()> {
        let record = self.get(key).await?;
        self.column.remove(record.data_template_key.as_str()).await?;
        debug!(key = %key, "deleted data template");
        Ok(())
    }

    /// Membership test: true iff exactly one stored template matches `key`.
    pub async fn exists(&self, key: &TemplateKey) -> Result<bool> {
        let matches = self
            .column
            .scan()
            .await?
            .into_iter()
            .filter(|t| t.data_template_key == *key)
            .count();
        Ok(matches == 1)
    }

    /// All data templates, unfiltered.
    pub async fn list(&self) -> Result<Vec<DataTemplate>> {
        Ok(self.column.scan().await?)
    }
}
