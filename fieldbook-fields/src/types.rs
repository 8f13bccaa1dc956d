//! Core types for the custom field registry
//!
//! All types serialize to/from YAML via serde. A custom field is a freeform
//! attribute bag keyed by a validated name; the `archived` flag is a
//! soft-delete marker, never a removal.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{FieldsError, Result};

/// Freeform attribute map carried by a custom field.
///
/// Insertion order is preserved so records round-trip stably through YAML.
pub type FieldAttributes = IndexMap<String, serde_yaml::Value>;

/// Validated name of a custom field — the unique key within the registry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(String);

impl FieldName {
    /// Validate and wrap a field name.
    ///
    /// Names double as store keys and follow the same rules: non-empty, no
    /// path separators, no NUL, no leading dot.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        fieldbook_store::validate_key(&name)
            .map_err(|e| FieldsError::InvalidName(format!("{name:?}: {e}")))?;
        Ok(Self(name))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A custom field definition.
///
/// `archived` defaults to false and is flipped only by
/// [`CustomFieldService::archive_field`](crate::CustomFieldService::archive_field);
/// attribute updates cannot touch it. Archived fields stay in the store and
/// keep resolving for lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    /// Unique name of the field
    pub field_name: FieldName,

    /// Soft-delete marker
    #[serde(default)]
    pub archived: bool,

    /// Freeform attributes supplied at creation/update time
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: FieldAttributes,
}

impl CustomField {
    /// A fresh, unarchived field with the given attributes.
    pub fn new(field_name: FieldName, attributes: FieldAttributes) -> Self {
        Self {
            field_name,
            archived: false,
            attributes,
        }
    }

    /// Merge `attributes` over the existing map. Entries not named in
    /// `attributes` survive unchanged.
    pub(crate) fn merge_attributes(&mut self, attributes: FieldAttributes) {
        for (name, value) in attributes {
            self.attributes.insert(name, value);
        }
    }
}

impl fieldbook_store::Record for CustomField {
    fn key(&self) -> &str {
        self.field_name.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> FieldAttributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), serde_yaml::Value::String(v.to_string())))
            .collect()
    }

    #[test]
    fn field_name_validation() {
        assert!(FieldName::new("color").is_ok());
        assert!(FieldName::new("shirt-size").is_ok());

        for bad in ["", ".hidden", "a/b", "a\\b"] {
            let err = FieldName::new(bad).unwrap_err();
            assert!(matches!(err, FieldsError::InvalidName(_)), "name: {bad:?}");
        }
    }

    #[test]
    fn custom_field_yaml_round_trip() {
        let field = CustomField::new(
            FieldName::new("color").unwrap(),
            attrs(&[("label", "Colour"), ("kind", "select")]),
        );

        let yaml = serde_yaml::to_string(&field).unwrap();
        let parsed: CustomField = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(field, parsed);
    }

    #[test]
    fn archived_defaults_to_false() {
        let yaml = "field_name: color\n";
        let parsed: CustomField = serde_yaml::from_str(yaml).unwrap();
        assert!(!parsed.archived);
        assert!(parsed.attributes.is_empty());
    }

    #[test]
    fn merge_preserves_unspecified_attributes() {
        let mut field = CustomField::new(
            FieldName::new("color").unwrap(),
            attrs(&[("label", "Colour"), ("kind", "select")]),
        );

        field.merge_attributes(attrs(&[("label", "Color"), ("group", "looks")]));

        assert_eq!(
            field.attributes.get("label"),
            Some(&serde_yaml::Value::String("Color".into()))
        );
        assert_eq!(
            field.attributes.get("kind"),
            Some(&serde_yaml::Value::String("select".into()))
        );
        assert_eq!(
            field.attributes.get("group"),
            Some(&serde_yaml::Value::String("looks".into()))
        );
    }
}
