//! Custom field registry
//!
//! `fieldbook-fields` manages named custom field definitions: freeform
//! attribute bags keyed by a unique field name, with soft-delete via an
//! `archived` flag. Records live in a [`fieldbook_store::Column`] under the
//! store root.
//!
//! Consumers that only need to check whether a field name resolves should
//! depend on the [`FieldLookup`] capability instead of the concrete
//! [`CustomFieldService`].

pub mod error;
pub mod lookup;
pub mod service;
pub mod types;

pub use error::{FieldsError, Result};
pub use lookup::FieldLookup;
pub use service::CustomFieldService;
pub use types::{CustomField, FieldAttributes, FieldName};
