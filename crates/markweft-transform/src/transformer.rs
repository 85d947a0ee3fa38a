//! Top-level orchestration and error boundary.
//!
//! One invocation is strictly sequential: media-type check, content load,
//! parse, build the primary record, expand sections. Parse-through-expand
//! runs inside a single error boundary; a failure there is reported once
//! through the host's fatal channel and the invocation returns empty.
//! Loader failures are not caught here — they propagate to the host's own
//! handling.

use markweft_content::markdown::{parse, ParseOptions};
use markweft_core::{Error, Result};
use thiserror::Error as ThisError;

use crate::builder::{self, ParsedUnit};
use crate::host::BuildHost;
use crate::record::MarkdownRecord;
use crate::source::SourceUnit;

/// A transform failure, carrying the identity of the failing unit.
///
/// Formatted once, at the boundary, as the message handed to the host's
/// fatal-error channel.
#[derive(Debug, ThisError)]
#[error("Error processing markdown {unit}: {source}")]
pub struct TransformError {
    unit: String,
    #[source]
    source: Error,
}

impl TransformError {
    fn new(unit: &SourceUnit, source: Error) -> Self {
        Self {
            unit: unit.label(),
            source,
        }
    }

    /// Label of the failing unit (file path or node identity).
    pub fn unit(&self) -> &str {
        &self.unit
    }
}

/// The markdown source-unit transformer.
///
/// Holds the pass-through parse options; one instance serves any number
/// of invocations, concurrently if the host wishes.
#[derive(Clone, Debug, Default)]
pub struct Transformer {
    options: ParseOptions,
}

impl Transformer {
    /// Creates a transformer with the given parse options.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// The configured parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Transform one source unit.
    ///
    /// Returns the primary (whole-document) record; section records are
    /// emitted as side effects through the host sink. Returns `Ok(None)`
    /// for non-markdown media types and for reported transform failures.
    /// Loader errors come back as `Err` untouched.
    pub async fn transform<H: BuildHost + ?Sized>(
        &self,
        host: &H,
        unit: &SourceUnit,
    ) -> Result<Option<MarkdownRecord>> {
        if !unit.is_markdown() {
            log::debug!(
                "skipping {}: media type {} is not markdown",
                unit.id,
                unit.media_type
            );
            return Ok(None);
        }

        let raw = host.load_content(unit).await?;

        match self.run(host, unit, &raw) {
            Ok(record) => Ok(Some(record)),
            Err(source) => {
                let err = TransformError::new(unit, source);
                host.report_transform_failure(&err.to_string());
                Ok(None)
            }
        }
    }

    /// Parse, build the primary record, expand sections.
    fn run<H: BuildHost + ?Sized>(
        &self,
        host: &H,
        unit: &SourceUnit,
        raw: &str,
    ) -> Result<MarkdownRecord> {
        let doc = parse(raw, &self.options)?;

        let primary = builder::build_record(
            host,
            unit,
            &ParsedUnit {
                key: None,
                data: doc.data,
                content: doc.content,
                excerpt: doc.excerpt,
            },
        )?;

        if !doc.sections.is_empty() {
            builder::expand_sections(host, unit, &doc.sections)?;
        }

        Ok(primary)
    }
}
