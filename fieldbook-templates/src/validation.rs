//! Cross-reference validation of custom field names

use fieldbook_fields::{FieldLookup, FieldName, FieldsError};
use fieldbook_store::StoreError;

use crate::error::{Result, TemplatesError};

/// Input views whose field references get validated.
pub(crate) const VIEW_REPLACE: &str = "custom_fields";
pub(crate) const VIEW_ADD: &str = "custom_fields_add";
pub(crate) const VIEW_REMOVE: &str = "custom_fields_remove";

/// Check every name in `names` against the lookup.
///
/// A name that does not resolve maps to
/// [`TemplatesError::UnknownCustomField`] carrying the view it arrived in;
/// lookup failures other than absence pass through unchanged.
pub(crate) async fn check_fields<'a, I>(
    lookup: &dyn FieldLookup,
    input: &'static str,
    names: I,
) -> Result<()>
where
    I: IntoIterator<Item = &'a FieldName>,
{
    for name in names {
        lookup.exists_or_fail(name).await.map_err(|e| match e {
            FieldsError::Store(StoreError::NotFound { .. }) => TemplatesError::UnknownCustomField {
                input,
                name: name.to_string(),
            },
            other => TemplatesError::Fields(other),
        })?;
    }
    Ok(())
}
