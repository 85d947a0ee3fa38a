//! Excerpt extraction.
//!
//! Two modes, selected by [`ParseOptions`]:
//!
//! - separator mode: the excerpt is the body text preceding the first line
//!   equal to the configured separator
//! - first-paragraph mode: the excerpt is the body's first paragraph as
//!   plain text, truncated

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use crate::markdown::ParseOptions;

/// Character budget for first-paragraph excerpts.
const DEFAULT_EXCERPT_CHARS: usize = 140;

/// Extract an excerpt from body content per the configured settings.
///
/// Returns an empty string when no excerpt is configured, or when the
/// configured separator never occurs.
///
/// # Example
///
/// ```rust
/// use markweft_content::markdown::{extract_excerpt, ParseOptions};
///
/// let options = ParseOptions::default().with_excerpt_separator("<!-- more -->");
/// let body = "Lead text.\n<!-- more -->\nThe rest.";
/// assert_eq!(extract_excerpt(body, &options), "Lead text.");
/// ```
pub fn extract_excerpt(content: &str, options: &ParseOptions) -> String {
    if let Some(separator) = &options.excerpt_separator {
        return before_separator(content, separator);
    }
    if options.excerpt {
        return first_paragraph(content, DEFAULT_EXCERPT_CHARS).unwrap_or_default();
    }
    String::new()
}

/// Body text preceding the first line equal to the separator.
fn before_separator(content: &str, separator: &str) -> String {
    let mut lead = Vec::new();
    for line in content.lines() {
        if line.trim() == separator.trim() {
            return lead.join("\n").trim().to_string();
        }
        lead.push(line);
    }
    String::new()
}

/// Extract the first paragraph as plain text.
///
/// Skips headings, strips inline formatting, and truncates to `max_chars`
/// with a `...` marker.
fn first_paragraph(content: &str, max_chars: usize) -> Option<String> {
    let parser = Parser::new(content);
    let mut in_paragraph = false;
    let mut text = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Paragraph) => {
                in_paragraph = true;
                text.clear();
            }
            Event::End(TagEnd::Paragraph) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    return Some(truncate(trimmed, max_chars));
                }
                in_paragraph = false;
            }
            Event::Text(t) | Event::Code(t) if in_paragraph => {
                text.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if in_paragraph => {
                text.push(' ');
            }
            _ => {}
        }
    }

    None
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}...", truncated.trim_end())
}
