//! Front-matter extraction, section splitting, and excerpt utilities.
//!
//! This crate provides the parsing half of the Markweft transformer. It
//! knows nothing about the build host — it turns raw markdown text into a
//! [`ParsedDocument`](markdown::ParsedDocument) and leaves record emission
//! to `markweft-transform`.
//!
//! # Modules
//!
//! - [`markdown`]: Markdown parsing
//!   - [`markdown::frontmatter`]: YAML/TOML front-matter extraction
//!   - [`markdown::sections`]: Named-section splitting and data decoding
//!   - [`markdown::dates`]: Canonical date normalization
//!   - [`markdown::excerpt`]: Excerpt extraction
//!
//! # Example
//!
//! ```rust
//! use markweft_content::markdown::{parse, ParseOptions};
//!
//! let content = "---\ntitle: Hello\n---\nBody text";
//! let doc = parse(content, &ParseOptions::default()).unwrap();
//!
//! assert_eq!(doc.content, "Body text");
//! let title = doc.data.get("title").and_then(|v| v.as_str());
//! assert_eq!(title, Some("Hello"));
//! ```

pub mod markdown;

// Re-export commonly used types
pub use markdown::{
    decode_section_data, parse, FrontmatterLanguage, ParseOptions, ParsedDocument, Section,
};
