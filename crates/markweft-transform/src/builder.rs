//! Node builder and section expander.
//!
//! The builder turns one parsed unit (the whole document, or one decoded
//! section) into exactly one sealed record, registers it, and links it to
//! its parent. The expander decodes each section's embedded data and runs
//! the builder once per section, in document order.

use markweft_content::markdown::{decode_section_data, Section};
use markweft_core::Result;
use serde_yaml::Mapping;

use crate::host::BuildHost;
use crate::record::{frontmatter_from_yaml, MarkdownRecord};
use crate::source::{SourceKind, SourceUnit};

/// Suffix appended to identity seeds, namespacing the record type.
const ID_SEED_SUFFIX: &str = " >>> Markdown";

/// One parsed unit, ready to become a record.
pub(crate) struct ParsedUnit {
    /// Section key; `None` for the whole-document unit.
    pub key: Option<String>,
    /// Front-matter mapping (dates already normalized).
    pub data: Mapping,
    /// Body text.
    pub content: String,
    /// Excerpt; empty for section units.
    pub excerpt: String,
}

/// Build, seal, register, and link one record.
///
/// The identity seed combines the source unit's identity with the section
/// key when present, so the whole-document record and every section
/// record of one source get distinct, collision-free identities.
pub(crate) fn build_record<H: BuildHost + ?Sized>(
    host: &H,
    unit: &SourceUnit,
    parsed: &ParsedUnit,
) -> Result<MarkdownRecord> {
    let seed_base = match &parsed.key {
        Some(key) => format!("{}{}", unit.id, key),
        None => unit.id.clone(),
    };
    let id = host.generate_id(&format!("{seed_base}{ID_SEED_SUFFIX}"));

    let record = MarkdownRecord {
        id,
        parent: unit.id.clone(),
        frontmatter: frontmatter_from_yaml(&parsed.data)?,
        excerpt: parsed.excerpt.clone(),
        raw_body: parsed.content.clone(),
        source_path: match unit.kind {
            SourceKind::File => unit.path.clone(),
            SourceKind::Other(_) => None,
        },
        content_digest: String::new(),
    }
    .seal()?;

    host.register(record.clone())?;
    host.link(unit, &record)?;

    Ok(record)
}

/// Expand a document's named sections into one record each.
///
/// Sections are processed in document order. A section without embedded
/// data gets an empty mapping; a data block that fails to decode aborts
/// the expansion and propagates to the transform boundary.
pub(crate) fn expand_sections<H: BuildHost + ?Sized>(
    host: &H,
    unit: &SourceUnit,
    sections: &[Section],
) -> Result<()> {
    for section in sections {
        let data = match &section.data {
            Some(raw) => decode_section_data(raw)?,
            None => Mapping::new(),
        };
        let parsed = ParsedUnit {
            key: Some(section.key.clone()),
            data,
            content: section.content.clone(),
            excerpt: String::new(),
        };
        build_record(host, unit, &parsed)?;
    }
    Ok(())
}
