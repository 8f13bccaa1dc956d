//! Data template registry
//!
//! `fieldbook-templates` manages named data templates: reusable schema
//! shapes that reference custom field definitions by name. Before any
//! mutating write, every referenced field name is checked against a
//! [`fieldbook_fields::FieldLookup`]; a dangling reference aborts the write
//! with a validation error naming the offending input.
//!
//! The check and the write are separate store operations; a field removed
//! between them is not re-checked.

pub mod error;
pub mod service;
pub mod types;

mod validation;

pub use error::{Result, TemplatesError};
pub use service::DataTemplateService;
pub use types::{DataTemplate, TemplateAttributes, TemplateKey, TemplatePatch};
