//! Common test utilities for transformer integration tests.

use async_trait::async_trait;
use markweft_core::{Error, Result};
use markweft_transform::{BuildHost, MarkdownRecord, NodeSink, SourceUnit};
use std::collections::HashMap;
use std::sync::Mutex;

/// Recording build host.
///
/// Serves configured content, generates stable IDs, and records every
/// registration, link, and fatal report for assertions.
#[derive(Default)]
pub struct RecordingHost {
    content: Mutex<HashMap<String, String>>,
    records: Mutex<Vec<MarkdownRecord>>,
    links: Mutex<Vec<(String, String)>>,
    failures: Mutex<Vec<String>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a host serving `text` for the unit with the given ID.
    pub fn with_content(unit_id: impl Into<String>, text: impl Into<String>) -> Self {
        let host = Self::new();
        host.insert_content(unit_id, text);
        host
    }

    pub fn insert_content(&self, unit_id: impl Into<String>, text: impl Into<String>) {
        self.content
            .lock()
            .unwrap()
            .insert(unit_id.into(), text.into());
    }

    pub fn records(&self) -> Vec<MarkdownRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn links(&self) -> Vec<(String, String)> {
        self.links.lock().unwrap().clone()
    }

    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().unwrap().clone()
    }
}

impl NodeSink for RecordingHost {
    fn register(&self, record: MarkdownRecord) -> Result<()> {
        self.records.lock().unwrap().push(record);
        Ok(())
    }

    fn link(&self, parent: &SourceUnit, child: &MarkdownRecord) -> Result<()> {
        self.links
            .lock()
            .unwrap()
            .push((parent.id.clone(), child.id.clone()));
        Ok(())
    }
}

#[async_trait]
impl BuildHost for RecordingHost {
    fn generate_id(&self, seed: &str) -> String {
        markweft_core::stable_id(seed)
    }

    async fn load_content(&self, unit: &SourceUnit) -> Result<String> {
        self.content
            .lock()
            .unwrap()
            .get(&unit.id)
            .cloned()
            .ok_or_else(|| Error::not_found("content", &unit.id))
    }

    fn report_transform_failure(&self, message: &str) {
        self.failures.lock().unwrap().push(message.to_string());
    }
}

/// A markdown file unit with a fixed test path.
pub fn markdown_file_unit(id: &str) -> SourceUnit {
    SourceUnit::file(id, "text/markdown", format!("/content/{id}.md"))
}
