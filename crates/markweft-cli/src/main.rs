//! Markweft CLI
//!
//! Runs the markdown transformer over a content directory with a minimal
//! in-process host: records print to stdout as JSON lines, parent links
//! log at debug level, and fatal transform reports log at error level and
//! fail the run.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use markweft_core::{stable_id, Error};
use markweft_transform::{
    BuildHost, MarkdownRecord, NodeSink, ParseOptions, SourceUnit, Transformer,
};

/// Markweft - transform markdown content into build records
#[derive(Parser, Debug)]
#[command(name = "markweft")]
#[command(about = "Transform markdown content into build records", long_about = None)]
struct Args {
    /// Content directory to transform
    content_dir: PathBuf,

    /// Split bodies into named sections
    #[arg(long)]
    sections: bool,

    /// Extract the first paragraph as the excerpt
    #[arg(long)]
    excerpt: bool,

    /// Excerpt is the body text preceding this separator line
    #[arg(long)]
    excerpt_separator: Option<String>,
}

/// In-process build host backed by the local filesystem.
#[derive(Default)]
struct CliHost {
    failures: AtomicUsize,
}

impl CliHost {
    fn failures(&self) -> usize {
        self.failures.load(Ordering::SeqCst)
    }
}

impl NodeSink for CliHost {
    fn register(&self, record: MarkdownRecord) -> markweft_core::Result<()> {
        let json = serde_json::to_string(&record)
            .map_err(|e| Error::invalid_data(format!("record not serializable: {e}")))?;
        println!("{json}");
        Ok(())
    }

    fn link(&self, parent: &SourceUnit, child: &MarkdownRecord) -> markweft_core::Result<()> {
        tracing::debug!(parent = %parent.id, child = %child.id, "parent-child link");
        Ok(())
    }
}

#[async_trait]
impl BuildHost for CliHost {
    fn generate_id(&self, seed: &str) -> String {
        stable_id(seed)
    }

    async fn load_content(&self, unit: &SourceUnit) -> markweft_core::Result<String> {
        let path = unit
            .path
            .as_ref()
            .ok_or_else(|| Error::not_found("path", &unit.id))?;
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io_with_path(e, path))
    }

    fn report_transform_failure(&self, message: &str) {
        tracing::error!("{message}");
        self.failures.fetch_add(1, Ordering::SeqCst);
    }
}

/// A plain-file source unit for a discovered markdown path.
fn unit_from_path(path: &Path) -> SourceUnit {
    SourceUnit::file(path.display().to_string(), "text/markdown", path)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut options = ParseOptions::default()
        .with_sections(args.sections)
        .with_excerpt(args.excerpt);
    if let Some(separator) = args.excerpt_separator {
        options = options.with_excerpt_separator(separator);
    }

    let transformer = Transformer::new(options);
    let host = CliHost::default();

    let files = markweft_core::find_markdown_files(&args.content_dir).await?;
    if files.is_empty() {
        tracing::warn!("no markdown files under {}", args.content_dir.display());
    }

    for path in &files {
        let unit = unit_from_path(path);
        transformer.transform(&host, &unit).await?;
    }

    let failures = host.failures();
    if failures > 0 {
        anyhow::bail!("{failures} of {} documents failed to transform", files.len());
    }
    Ok(())
}
