//! YAML/TOML front-matter extraction from markdown documents.
//!
//! Front-matter is metadata at the start of a markdown document, delimited
//! by `---`:
//!
//! ```markdown
//! ---
//! title: My Document
//! date: 2024-03-01
//! tags:
//!   - rust
//!   - markdown
//! ---
//!
//! # Document Content
//!
//! The body of the document starts here.
//! ```
//!
//! A language tag on the opening delimiter selects the block format for a
//! single document (`---toml`); the configured default is YAML.
//!
//! # Usage
//!
//! ```rust
//! use markweft_content::markdown::{parse, ParseOptions};
//!
//! let content = "---\ntitle: Test\n---\n\nBody";
//! let doc = parse(content, &ParseOptions::default()).unwrap();
//!
//! assert_eq!(doc.data.get("title").and_then(|v| v.as_str()), Some("Test"));
//! assert_eq!(doc.content.trim(), "Body");
//! ```

use markweft_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use crate::markdown::{dates, excerpt, sections, Section};

/// Default front-matter delimiter.
pub const DEFAULT_DELIMITER: &str = "---";

// ============================================================================
// Options
// ============================================================================

/// Front-matter block language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrontmatterLanguage {
    /// YAML front-matter (the default).
    #[default]
    Yaml,
    /// TOML front-matter.
    Toml,
}

impl FrontmatterLanguage {
    /// Resolve a language tag from an opening delimiter line.
    ///
    /// Returns `None` for tags that do not name a supported language.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Parsing configuration, passed through from the host untouched.
///
/// # Example
///
/// ```rust
/// use markweft_content::markdown::ParseOptions;
///
/// let options = ParseOptions::default()
///     .with_sections(true)
///     .with_excerpt_separator("<!-- more -->");
/// assert!(options.sections);
/// ```
#[derive(Clone, Debug)]
pub struct ParseOptions {
    /// Front-matter delimiter line (default `---`).
    pub delimiter: String,
    /// Default block language when the opening delimiter carries no tag.
    pub language: FrontmatterLanguage,
    /// Extract the body's first paragraph as the excerpt when no
    /// separator is configured.
    pub excerpt: bool,
    /// Excerpt is the body text preceding the first line equal to this
    /// separator.
    pub excerpt_separator: Option<String>,
    /// Split the body into named sections (`--- key` markers).
    pub sections: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            language: FrontmatterLanguage::default(),
            excerpt: false,
            excerpt_separator: None,
            sections: false,
        }
    }
}

impl ParseOptions {
    /// Sets the delimiter line.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Sets the default front-matter language.
    pub fn with_language(mut self, language: FrontmatterLanguage) -> Self {
        self.language = language;
        self
    }

    /// Enables first-paragraph excerpt extraction.
    pub fn with_excerpt(mut self, excerpt: bool) -> Self {
        self.excerpt = excerpt;
        self
    }

    /// Sets the excerpt separator line.
    pub fn with_excerpt_separator(mut self, separator: impl Into<String>) -> Self {
        self.excerpt_separator = Some(separator.into());
        self
    }

    /// Enables named-section splitting.
    pub fn with_sections(mut self, sections: bool) -> Self {
        self.sections = sections;
        self
    }
}

// ============================================================================
// Parsed document
// ============================================================================

/// Result of parsing one markdown document.
#[derive(Clone, Debug, Default)]
pub struct ParsedDocument {
    /// Front-matter mapping; empty when the document has none. Top-level
    /// date values are normalized to canonical ISO-8601 strings.
    pub data: Mapping,
    /// Body after the front-matter block (and before the first section
    /// marker when sections are parsed).
    pub content: String,
    /// Excerpt per the configured excerpt settings; empty when disabled.
    pub excerpt: String,
    /// Named sections, in document order; empty unless section splitting
    /// is enabled and markers are present.
    pub sections: Vec<Section>,
}

impl ParsedDocument {
    /// Whether the document carried a front-matter block with any keys.
    pub fn has_frontmatter(&self) -> bool {
        !self.data.is_empty()
    }

    /// Whether the document split into named sections.
    pub fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }

    /// Deserialize the front-matter into a concrete type.
    ///
    /// Returns `None` when the document has no front-matter keys.
    ///
    /// # Example
    ///
    /// ```rust
    /// use markweft_content::markdown::{parse, ParseOptions};
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct MyMeta {
    ///     title: String,
    /// }
    ///
    /// let doc = parse("---\ntitle: Hello\n---\nBody", &ParseOptions::default()).unwrap();
    /// let meta: Option<MyMeta> = doc.deserialize().unwrap();
    /// assert_eq!(meta.unwrap().title, "Hello");
    /// ```
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        if self.data.is_empty() {
            return Ok(None);
        }
        let parsed: T = serde_yaml::from_value(Value::Mapping(self.data.clone()))
            .map_err(|e| Error::parse(format!("failed to deserialize front-matter: {e}")))?;
        Ok(Some(parsed))
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse a markdown document into front-matter, body, excerpt, and sections.
///
/// # Behavior
///
/// - No front-matter block: empty `data`, full text as `content`.
/// - Opened but unterminated block, undecodable block, or a block that is
///   not a mapping: `Err(Error::Parse)` — the caller owns the boundary.
/// - Top-level date values are normalized to canonical ISO-8601 strings;
///   everything else (including nested mappings/sequences) passes through
///   unchanged.
///
/// # Example
///
/// ```rust
/// use markweft_content::markdown::{parse, ParseOptions};
///
/// let doc = parse("# Just Markdown", &ParseOptions::default()).unwrap();
/// assert!(!doc.has_frontmatter());
/// assert_eq!(doc.content, "# Just Markdown");
///
/// let err = parse("---\ntitle: Incomplete\n\nNo closing", &ParseOptions::default());
/// assert!(err.is_err());
/// ```
pub fn parse(raw: &str, options: &ParseOptions) -> Result<ParsedDocument> {
    let (data, body) = extract_data(raw, options)?;

    let (content, doc_sections) = if options.sections {
        sections::split_sections(&body, &options.delimiter)
    } else {
        (body, Vec::new())
    };

    let excerpt = excerpt::extract_excerpt(&content, options);

    Ok(ParsedDocument {
        data,
        content,
        excerpt,
        sections: doc_sections,
    })
}

/// Extract and decode the front-matter block, returning `(data, body)`.
fn extract_data(raw: &str, options: &ParseOptions) -> Result<(Mapping, String)> {
    let delim = options.delimiter.as_str();

    if !raw.starts_with(delim) {
        return Ok((Mapping::new(), raw.to_string()));
    }

    // The remainder of the opening line is either empty or a language tag.
    let first_line_end = raw.find('\n');
    let open_rest = match first_line_end {
        Some(end) => raw[delim.len()..end].trim(),
        None => raw[delim.len()..].trim(),
    };

    let language = if open_rest.is_empty() {
        options.language
    } else {
        match FrontmatterLanguage::from_tag(open_rest) {
            Some(language) => language,
            // Not an opening delimiter after all (thematic break, section
            // marker at top of file, ...): the whole document is body.
            None => {
                log::debug!("delimiter tag {open_rest:?} names no front-matter language; treating document as body");
                return Ok((Mapping::new(), raw.to_string()));
            }
        }
    };

    let after_open = match first_line_end {
        Some(end) => &raw[end + 1..],
        None => "",
    };

    let (block, body) = find_closing(after_open, delim)
        .ok_or_else(|| Error::parse("unterminated front-matter delimiter"))?;

    let data = decode_block(block, language)?;
    Ok((dates::normalize_dates(data), body.to_string()))
}

/// Find the closing delimiter line, returning `(block, body)`.
fn find_closing<'a>(after_open: &'a str, delim: &str) -> Option<(&'a str, &'a str)> {
    let mut offset = 0;
    loop {
        let line_end = after_open[offset..].find('\n').map(|p| offset + p);
        let line = match line_end {
            Some(end) => &after_open[offset..end],
            None => &after_open[offset..],
        };

        if line.trim_end() == delim {
            let block = &after_open[..offset];
            let body = match line_end {
                Some(end) => &after_open[end + 1..],
                None => "",
            };
            return Some((block, body));
        }

        match line_end {
            Some(end) => offset = end + 1,
            None => return None,
        }
    }
}

/// Decode a front-matter block into a mapping.
fn decode_block(block: &str, language: FrontmatterLanguage) -> Result<Mapping> {
    match language {
        FrontmatterLanguage::Yaml => decode_yaml_mapping(block),
        FrontmatterLanguage::Toml => {
            let table: toml::Table = toml::from_str(block)
                .map_err(|e| Error::parse(format!("invalid TOML front-matter: {e}")))?;
            match serde_yaml::to_value(&table) {
                Ok(Value::Mapping(mapping)) => Ok(mapping),
                Ok(_) => Err(Error::parse("TOML front-matter must be a table")),
                Err(e) => Err(Error::parse(format!(
                    "failed to convert TOML front-matter: {e}"
                ))),
            }
        }
    }
}

/// Decode a YAML block into a mapping.
///
/// Shared with section data decoding: embedded section blocks follow the
/// same rules as top-level front-matter.
pub(crate) fn decode_yaml_mapping(block: &str) -> Result<Mapping> {
    if block.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(block) {
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(Value::Mapping(mapping)) => Ok(mapping),
        Ok(_) => Err(Error::parse("front-matter must be a mapping of keys to values")),
        Err(e) => Err(Error::parse(format!("invalid YAML front-matter: {e}"))),
    }
}

// ============================================================================
// Tests
// ============================================================================
