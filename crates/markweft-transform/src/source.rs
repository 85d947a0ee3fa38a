//! Source-unit descriptor types.
//!
//! A [`SourceUnit`] is the immutable input handed over by the host: the
//! node's identity, its media type, what kind of host node it is, and the
//! absolute path when it is a plain file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Media types recognized as markdown content.
///
/// Anything else short-circuits the transform with no output.
pub const MARKDOWN_MEDIA_TYPES: &[&str] = &["text/markdown", "text/x-markdown"];

/// Kind of host node a source unit came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// A plain file on disk.
    File,
    /// Any other host node kind.
    Other(String),
}

/// The raw, unparsed input document with its identity and media type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceUnit {
    /// Host node identity.
    pub id: String,
    /// Media-type tag (e.g. `text/markdown`).
    pub media_type: String,
    /// Kind of host node.
    pub kind: SourceKind,
    /// Absolute path, populated for plain-file units.
    pub path: Option<PathBuf>,
}

impl SourceUnit {
    /// Creates a plain-file source unit.
    pub fn file(
        id: impl Into<String>,
        media_type: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            id: id.into(),
            media_type: media_type.into(),
            kind: SourceKind::File,
            path: Some(path.into()),
        }
    }

    /// Creates a non-file source unit of the given host kind.
    pub fn node(
        id: impl Into<String>,
        media_type: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            media_type: media_type.into(),
            kind: SourceKind::Other(kind.into()),
            path: None,
        }
    }

    /// Whether this unit's media type is one of the markdown types.
    pub fn is_markdown(&self) -> bool {
        MARKDOWN_MEDIA_TYPES.contains(&self.media_type.as_str())
    }

    /// Human-readable label for error reporting.
    ///
    /// Names the file when a path is known, the node identity otherwise.
    pub fn label(&self) -> String {
        match &self.path {
            Some(path) => format!("file {}", path.display()),
            None => format!("node {}", self.id),
        }
    }
}
