//! Async markdown file discovery.
//!
//! Walks a content directory and returns the markdown files beneath it,
//! sorted for deterministic processing order.

use async_walkdir::WalkDir;
use futures::StreamExt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File extensions recognized as markdown content.
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Check whether a path has a markdown extension (case-insensitive).
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use markweft_core::util::files::is_markdown_path;
///
/// assert!(is_markdown_path(Path::new("notes/post.md")));
/// assert!(is_markdown_path(Path::new("notes/POST.MARKDOWN")));
/// assert!(!is_markdown_path(Path::new("notes/data.json")));
/// ```
pub fn is_markdown_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            MARKDOWN_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Recursively discover markdown files under a base directory.
///
/// Returns regular files with a markdown extension, sorted by path so
/// callers process content in a stable order.
pub async fn find_markdown_files(base: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let base = base.as_ref();
    let mut entries = WalkDir::new(base);
    let mut files = Vec::new();

    while let Some(entry) = entries.next().await {
        let entry = entry.map_err(|e| Error::io_with_path(std::io::Error::other(e), base))?;
        let path = entry.path();
        if !is_markdown_path(&path) {
            continue;
        }
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| Error::io_with_path(e, &path))?;
        if file_type.is_file() {
            files.push(path);
        }
    }

    files.sort();
    log::debug!("discovered {} markdown files under {}", files.len(), base.display());
    Ok(files)
}
