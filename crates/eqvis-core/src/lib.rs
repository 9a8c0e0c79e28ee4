//! eqvis core — shared error type and validation utilities.
//!
//! This crate has no internal eqvis dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: Text, URL, and path utilities

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::paths::expand_tilde;
pub use util::text::{
    require_link_text, require_paragraph, require_single_line, require_text, require_url,
};
