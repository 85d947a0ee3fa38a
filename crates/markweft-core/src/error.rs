//! Error types for Markweft operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used
//! across all Markweft crates. Uses `thiserror` for derive macros.

use std::path::Path;
use thiserror::Error;

/// Errors that can occur in Markweft operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error with the path that triggered it.
    #[error("I/O error at {path}: {source}")]
    IoPath {
        /// Path being read or written.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Malformed content (front-matter grammar, YAML/TOML decoding).
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Something that should exist, doesn't.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of thing that is missing (e.g., "node", "file").
        kind: String,
        /// Identifier of the missing thing.
        id: String,
    },

    /// Invalid data or format.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl Error {
    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Create an invalid data error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Wrap an I/O error with the path it occurred at.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoPath {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

/// Result type alias using Markweft's Error type.
pub type Result<T> = std::result::Result<T, Error>;
