//! Core types for the data template registry
//!
//! A data template is a named set of custom field references plus freeform
//! attributes. Field references are kept as a set: duplicates collapse and
//! order carries no meaning.

use std::collections::BTreeSet;
use std::fmt;

use fieldbook_fields::FieldName;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TemplatesError};

/// Freeform attribute map carried by a data template.
pub type TemplateAttributes = IndexMap<String, serde_yaml::Value>;

/// Validated key of a data template — unique within the registry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateKey(String);

impl TemplateKey {
    /// Validate and wrap a template key. Same character rules as store keys.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        fieldbook_store::validate_key(&key)
            .map_err(|e| TemplatesError::InvalidKey(format!("{key:?}: {e}")))?;
        Ok(Self(key))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TemplateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A named collection of custom field references describing a reusable
/// schema shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTemplate {
    /// Unique key of the template
    pub data_template_key: TemplateKey,

    /// Names of the custom fields this template references
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub custom_fields: BTreeSet<FieldName>,

    /// Freeform attributes supplied at creation/update time
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: TemplateAttributes,
}

impl DataTemplate {
    pub fn new(
        data_template_key: TemplateKey,
        custom_fields: BTreeSet<FieldName>,
        attributes: TemplateAttributes,
    ) -> Self {
        Self {
            data_template_key,
            custom_fields,
            attributes,
        }
    }
}

impl fieldbook_store::Record for DataTemplate {
    fn key(&self) -> &str {
        self.data_template_key.as_str()
    }
}

/// A partial update for a data template.
///
/// The three custom-field views apply in order — replace, then add, then
/// remove — followed by an attribute merge. Views left as `None` leave the
/// field set alone.
#[derive(Debug, Clone, Default)]
pub struct TemplatePatch {
    /// Replace the whole field set
    pub custom_fields: Option<BTreeSet<FieldName>>,

    /// Add these names to the field set
    pub custom_fields_add: Option<BTreeSet<FieldName>>,

    /// Remove these names from the field set
    pub custom_fields_remove: Option<BTreeSet<FieldName>>,

    /// Attributes merged over the stored ones
    pub attributes: TemplateAttributes,
}

impl TemplatePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the template's field set with `names`.
    pub fn replace_fields(mut self, names: impl IntoIterator<Item = FieldName>) -> Self {
        self.custom_fields = Some(names.into_iter().collect());
        self
    }

    /// Add `names` to the template's field set.
    pub fn add_fields(mut self, names: impl IntoIterator<Item = FieldName>) -> Self {
        self.custom_fields_add = Some(names.into_iter().collect());
        self
    }

    /// Remove `names` from the template's field set.
    pub fn remove_fields(mut self, names: impl IntoIterator<Item = FieldName>) -> Self {
        self.custom_fields_remove = Some(names.into_iter().collect());
        self
    }

    /// Merge an attribute into the patch.
    pub fn attribute(mut self, name: impl Into<String>, value: serde_yaml::Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Apply the patch to a stored template.
    pub(crate) fn apply(self, template: &mut DataTemplate) {
        if let Some(replace) = self.custom_fields {
            template.custom_fields = replace;
        }
        if let Some(add) = self.custom_fields_add {
            template.custom_fields.extend(add);
        }
        if let Some(remove) = self.custom_fields_remove {
            for name in &remove {
                template.custom_fields.remove(name);
            }
        }
        for (name, value) in self.attributes {
            template.attributes.insert(name, value);
        }
    }
}
