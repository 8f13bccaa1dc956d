//! Generic file-backed column store with conditional writes
//!
//! A [`Column`] owns one directory and persists one YAML document per
//! record, keyed by the record's string key. Beyond plain reads and writes
//! it provides the two conditional primitives registry services rely on:
//! compare-and-insert ([`Column::insert_if_absent`]) and
//! check-exists-then-update ([`Column::update_if_present`]). Conditional
//! operations serialize through a per-column mutex so the existence check
//! and the write cannot interleave across concurrent tasks.

pub mod column;
pub mod error;

pub use column::{validate_key, Column, Record};
pub use error::{Result, StoreError};
