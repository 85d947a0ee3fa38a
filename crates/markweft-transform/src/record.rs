//! The emitted record and its content digest.
//!
//! A [`MarkdownRecord`] is created once, sealed with a digest over its
//! canonical serialization, and never mutated afterward. The host uses
//! the digest for change detection.

use markweft_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_yaml::Mapping;
use std::path::PathBuf;

/// The structured unit emitted downstream, child of one source unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkdownRecord {
    /// Deterministic identity derived from the source unit (and section
    /// key, for section records).
    pub id: String,
    /// Identity of the owning source unit.
    pub parent: String,
    /// Front-matter data with a default empty `title` merged in.
    pub frontmatter: Map<String, Value>,
    /// Excerpt per the configured excerpt settings.
    pub excerpt: String,
    /// Body text, verbatim.
    pub raw_body: String,
    /// Absolute path of the source, only for plain-file units.
    pub source_path: Option<PathBuf>,
    /// Digest over the canonical serialization of all other fields.
    /// Computed once at creation; never recomputed.
    pub content_digest: String,
}

impl MarkdownRecord {
    /// Compute and store the content digest.
    ///
    /// The digest is blake3 over the canonical JSON serialization of the
    /// record with `content_digest` empty, so it is a pure function of
    /// the other fields.
    pub(crate) fn seal(mut self) -> Result<Self> {
        debug_assert!(self.content_digest.is_empty());
        let canonical = serde_json::to_string(&self)
            .map_err(|e| Error::invalid_data(format!("record not serializable for digest: {e}")))?;
        self.content_digest = blake3::hash(canonical.as_bytes()).to_hex().to_string();
        Ok(self)
    }
}

/// Convert a front-matter mapping to the record's frontmatter field.
///
/// Inserts the default empty `title` first; an explicit title in the data
/// wins. Keys must be strings (nested non-string keys surface as errors
/// when their mapping is converted).
pub(crate) fn frontmatter_from_yaml(data: &Mapping) -> Result<Map<String, Value>> {
    let mut map = Map::new();
    map.insert("title".to_string(), Value::String(String::new()));

    for (key, value) in data {
        let key = key
            .as_str()
            .ok_or_else(|| Error::invalid_data("front-matter keys must be strings"))?;
        let value = serde_json::to_value(value).map_err(|e| {
            Error::invalid_data(format!("unsupported front-matter value for `{key}`: {e}"))
        })?;
        map.insert(key.to_string(), value);
    }

    Ok(map)
}
