//! Error types for eqvis.

use std::path::{Path, PathBuf};

/// Result type alias for eqvis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, loading, or checking a document index.
///
/// Rendering itself never fails; every variant here is raised either while
/// constructing the index or while reading and writing files around it.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A construction-time precondition was violated.
    #[error("Validation error: {}", display_validation(field.as_deref(), message))]
    Validation {
        /// Field that failed validation, if known
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Manifest or markdown could not be parsed
    #[error("Parse error: {message}")]
    Parse {
        /// What failed to parse
        message: String,
    },

    /// I/O error, optionally tied to a path
    #[error("I/O error{}: {source}", display_path(path.as_deref()))]
    Io {
        /// Path being accessed when the error occurred
        path: Option<PathBuf>,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

fn display_validation(field: Option<&str>, message: &str) -> String {
    match field {
        Some(field) => format!("{field}: {message}"),
        None => message.to_string(),
    }
}

fn display_path(path: Option<&Path>) -> String {
    match path {
        Some(path) => format!(" at {}", path.display()),
        None => String::new(),
    }
}

impl Error {
    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path that caused it.
    pub fn io_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Self {
        Error::Io {
            path: Some(path.as_ref().to_path_buf()),
            source,
        }
    }

    /// Returns the offending field for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }

    /// Whether this error was raised by a construction-time check.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { path: None, source }
    }
}
