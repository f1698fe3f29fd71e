//! Error types for environment variable access
//!
//! Both kinds of configuration failure are returned to the caller as values.
//! Whether a missing variable should end the process is decided by the
//! hosting application, not by this crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::value::VarKind;

/// Error returned by the typed accessors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnvError {
    /// Variable is absent (or empty, for lists) and no default was supplied
    #[error("Environment variable <{key}> is required and not set")]
    MissingRequired { key: String },

    /// Variable is present but cannot be parsed as the requested type
    #[error("Environment variable <{key}> must be {expected}, value={value}")]
    InvalidFormat {
        key: String,
        value: String,
        expected: VarKind,
    },

    /// A `.env` file could not be read or parsed
    #[error("Failed to load env file {}: {message}", path.display())]
    Dotenv { path: PathBuf, message: String },
}

impl EnvError {
    /// Create a missing required variable error
    pub fn missing_required(key: impl Into<String>) -> Self {
        Self::MissingRequired { key: key.into() }
    }

    /// Create an invalid format error for a raw value that failed to parse.
    pub fn invalid_format(
        key: impl Into<String>,
        value: impl Into<String>,
        expected: VarKind,
    ) -> Self {
        Self::InvalidFormat {
            key: key.into(),
            value: value.into(),
            expected,
        }
    }

    /// Create an env file error
    pub fn dotenv(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Dotenv {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn is_missing_required(&self) -> bool {
        matches!(self, Self::MissingRequired { .. })
    }

    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }

    /// The environment variable this error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::MissingRequired { key } | Self::InvalidFormat { key, .. } => Some(key),
            Self::Dotenv { .. } => None,
        }
    }
}
