//! Markdown source-unit transformation for content-graph builds.
//!
//! The host hands this crate a [`SourceUnit`] (identity, media type, kind,
//! optional path) plus its capability callbacks ([`BuildHost`]); the
//! [`Transformer`] parses front-matter and body, builds one
//! [`MarkdownRecord`] for the whole document plus one per named section,
//! registers each through the host's [`NodeSink`], and returns the primary
//! record.
//!
//! # Modules
//!
//! - [`source`]: Source-unit descriptor types
//! - [`record`]: The emitted record and its content digest
//! - [`host`]: Host capability traits
//! - [`transformer`]: Top-level orchestration and error boundary
//!
//! # Example
//!
//! See `tests/` for an end-to-end run against a recording host.

pub mod host;
pub mod record;
pub mod source;
pub mod transformer;

mod builder;
#[cfg(test)]
mod proptests;

// Re-export key types at crate root
pub use host::{BuildHost, NodeSink};
pub use record::MarkdownRecord;
pub use source::{SourceKind, SourceUnit, MARKDOWN_MEDIA_TYPES};
pub use transformer::{TransformError, Transformer};

// Parsing configuration is pass-through; re-export for host convenience.
pub use markweft_content::markdown::ParseOptions;
