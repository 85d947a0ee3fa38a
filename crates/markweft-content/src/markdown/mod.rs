//! Markdown parsing: front-matter, sections, dates, excerpts.
//!
//! These utilities return generic types (`serde_yaml::Mapping`, `String`)
//! rather than host-specific structs. The transform crate builds its
//! records from the generic types.

pub mod dates;
pub mod excerpt;
pub mod frontmatter;
pub mod sections;

// Re-export key types and functions
pub use dates::canonicalize_date;
pub use excerpt::extract_excerpt;
pub use frontmatter::{parse, FrontmatterLanguage, ParseOptions, ParsedDocument};
pub use sections::{decode_section_data, Section};
