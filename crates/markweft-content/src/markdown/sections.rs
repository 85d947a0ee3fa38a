//! Named-section splitting.
//!
//! A document may split its body into named sections with marker lines:
//!
//! ```markdown
//! ---
//! title: Landing Page
//! ---
//! Preamble content.
//!
//! --- hero
//! headline: Welcome
//! ---
//! Hero copy goes here.
//!
//! --- footer
//! Footer copy, no embedded data.
//! ```
//!
//! A section begins at a line `<delimiter> <key>`. If the lines
//! immediately after the marker form a non-empty block with no blank
//! lines, terminated by a bare delimiter line, that block is the
//! section's raw embedded data; it decodes with the same rules as
//! top-level front-matter. A bare delimiter further into the section
//! (after a blank line) is ordinary content, so thematic breaks in prose
//! are never swallowed.

use markweft_core::Result;
use regex::Regex;
use serde_yaml::Mapping;

use crate::markdown::{dates, frontmatter};

/// One named section of a document body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Section {
    /// Section key from the marker line.
    pub key: String,
    /// Section body after the marker (and data block, when present).
    pub content: String,
    /// Raw embedded structured-data block, if the section carries one.
    pub data: Option<String>,
}

/// Split a body into preamble content and named sections.
///
/// Returns the text before the first marker and the sections in document
/// order. A body with no markers comes back unchanged with no sections.
pub fn split_sections(body: &str, delimiter: &str) -> (String, Vec<Section>) {
    let marker = Regex::new(&format!(r"^{}[ \t]+(\S+)[ \t]*$", regex::escape(delimiter)))
        .expect("Invalid section marker regex");

    let mut preamble: Vec<&str> = Vec::new();
    let mut pending: Vec<(String, Vec<&str>)> = Vec::new();

    for line in body.lines() {
        if let Some(caps) = marker.captures(line) {
            pending.push((caps[1].to_string(), Vec::new()));
        } else if let Some((_, lines)) = pending.last_mut() {
            lines.push(line);
        } else {
            preamble.push(line);
        }
    }

    let sections = pending
        .into_iter()
        .map(|(key, lines)| build_section(key, &lines, delimiter))
        .collect();

    (preamble.join("\n"), sections)
}

/// Assemble one section, carving out the embedded data block if present.
fn build_section(key: String, lines: &[&str], delimiter: &str) -> Section {
    let mut data_end = None;
    for (i, line) in lines.iter().enumerate() {
        if line.trim_end() == delimiter {
            data_end = Some(i);
            break;
        }
        if line.trim().is_empty() {
            break;
        }
    }

    let (data, mut rest) = match data_end {
        Some(end) => (Some(lines[..end].join("\n")), &lines[end + 1..]),
        None => (None, lines),
    };

    // Drop the customary blank line between marker/data block and content,
    // and the separator padding before the next marker.
    if rest.first().is_some_and(|l| l.trim().is_empty()) {
        rest = &rest[1..];
    }
    while rest.last().is_some_and(|l| l.trim().is_empty()) {
        rest = &rest[..rest.len() - 1];
    }

    Section {
        key,
        content: rest.join("\n"),
        data,
    }
}

/// Decode a section's raw embedded data block.
///
/// Uses the same YAML decoding rules as top-level front-matter, including
/// top-level date normalization. Sections without data decode to an empty
/// mapping.
pub fn decode_section_data(raw: &str) -> Result<Mapping> {
    let mapping = frontmatter::decode_yaml_mapping(raw)?;
    Ok(dates::normalize_dates(mapping))
}
