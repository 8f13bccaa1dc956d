//! Shared infrastructure for the Fieldbook workspace
//!
//! Provides the error severity taxonomy implemented by every Fieldbook error
//! type, and resolution of the on-disk store root used by the registry
//! crates.

pub mod error;
pub mod paths;

pub use error::{ErrorSeverity, Severity};
