//! Resolution of the Fieldbook store root
//!
//! Registry services persist their records under a single root directory.
//! The root is taken from the `FIELDBOOK_ROOT` environment variable when
//! set, otherwise `.fieldbook` under the current working directory.

use std::env;
use std::path::PathBuf;

use tracing::debug;

/// Environment variable overriding the store root.
pub const ROOT_ENV_VAR: &str = "FIELDBOOK_ROOT";

/// Directory name used when no override is set.
pub const DEFAULT_ROOT_DIR: &str = ".fieldbook";

/// Resolve the root directory for Fieldbook data.
///
/// The directory is not created here; services create what they need on
/// first write.
pub fn store_root() -> PathBuf {
    let root = match env::var_os(ROOT_ENV_VAR) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_ROOT_DIR),
    };
    debug!(root = %root.display(), "resolved store root");
    root
}
