//! Utility modules for validation and path handling.
//!
//! # Modules
//!
//! - [`paths`]: Tilde expansion
//! - [`text`]: Construction-time checks for text and URL fields

pub mod paths;
pub mod text;
