//! End-to-end transformer tests against the recording host.

use crate::common::{markdown_file_unit, RecordingHost};
use markweft_transform::{ParseOptions, SourceUnit, Transformer};
use std::collections::HashSet;

// ----------------------------------------------------------------------------
// Basic emission
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_basic_frontmatter_document() {
    let unit = markdown_file_unit("n1");
    let host = RecordingHost::with_content("n1", "---\ntitle: Hello\n---\nBody text");

    let record = Transformer::default()
        .transform(&host, &unit)
        .await
        .unwrap()
        .expect("primary record");

    assert_eq!(
        record.frontmatter.get("title").and_then(|v| v.as_str()),
        Some("Hello")
    );
    assert_eq!(record.raw_body, "Body text");
    assert_eq!(record.parent, "n1");
    assert!(!record.content_digest.is_empty());

    let records = host.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], record);
    assert_eq!(host.links(), vec![("n1".to_string(), record.id.clone())]);
    assert!(host.failures().is_empty());
}

#[tokio::test]
async fn test_no_frontmatter_defaults() {
    let unit = markdown_file_unit("n1");
    let host = RecordingHost::with_content("n1", "# Just a heading\n\nAnd text.");

    let record = Transformer::default()
        .transform(&host, &unit)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(record.frontmatter.len(), 1);
    assert_eq!(
        record.frontmatter.get("title").and_then(|v| v.as_str()),
        Some("")
    );
    assert_eq!(record.raw_body, "# Just a heading\n\nAnd text.");
}

#[tokio::test]
async fn test_date_values_become_iso_strings() {
    let unit = markdown_file_unit("n1");
    let host = RecordingHost::with_content("n1", "---\ndate: 2024-03-01\n---\nBody");

    let record = Transformer::default()
        .transform(&host, &unit)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        record.frontmatter.get("date").and_then(|v| v.as_str()),
        Some("2024-03-01T00:00:00.000Z")
    );
}

#[tokio::test]
async fn test_toml_frontmatter_via_tag() {
    let unit = markdown_file_unit("n1");
    let host = RecordingHost::with_content("n1", "---toml\ntitle = \"Hello\"\n---\nBody");

    let record = Transformer::default()
        .transform(&host, &unit)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        record.frontmatter.get("title").and_then(|v| v.as_str()),
        Some("Hello")
    );
}

// ----------------------------------------------------------------------------
// Media-type gating and source paths
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_non_markdown_media_type_is_silent() {
    let unit = SourceUnit::file("n1", "text/plain", "/content/n1.txt");
    let host = RecordingHost::with_content("n1", "some plain text");

    let result = Transformer::default().transform(&host, &unit).await.unwrap();

    assert!(result.is_none());
    assert!(host.records().is_empty());
    assert!(host.links().is_empty());
    assert!(host.failures().is_empty());
}

#[tokio::test]
async fn test_source_path_only_for_file_units() {
    let file_unit = markdown_file_unit("n1");
    let host = RecordingHost::with_content("n1", "File body");
    let record = Transformer::default()
        .transform(&host, &file_unit)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        record.source_path.as_ref().and_then(|p| p.to_str()),
        Some("/content/n1.md")
    );

    let node_unit = SourceUnit::node("n2", "text/markdown", "ContentBlock");
    let host = RecordingHost::with_content("n2", "Node body");
    let record = Transformer::default()
        .transform(&host, &node_unit)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.source_path, None);
}

// ----------------------------------------------------------------------------
// Sections
// ----------------------------------------------------------------------------

const SECTIONED: &str = "---\ntitle: Page\n---\nPreamble text.\n\n--- hero\nheadline: Welcome\n---\nHero copy.\n\n--- footer\nFooter copy.";

#[tokio::test]
async fn test_sections_emit_one_record_each_plus_primary() {
    let unit = markdown_file_unit("n1");
    let host = RecordingHost::with_content("n1", SECTIONED);
    let transformer = Transformer::new(ParseOptions::default().with_sections(true));

    let primary = transformer.transform(&host, &unit).await.unwrap().unwrap();

    let records = host.records();
    assert_eq!(records.len(), 3);

    // N sections produce N+1 distinct identities.
    let ids: HashSet<_> = records.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids.len(), 3);

    // The primary record is the whole-document one, registered first.
    assert_eq!(records[0], primary);
    assert_eq!(primary.raw_body.trim(), "Preamble text.");
    assert_eq!(
        primary.frontmatter.get("title").and_then(|v| v.as_str()),
        Some("Page")
    );

    // Section records carry decoded data, empty excerpts, and the same parent.
    let hero = &records[1];
    assert_eq!(
        hero.frontmatter.get("headline").and_then(|v| v.as_str()),
        Some("Welcome")
    );
    assert_eq!(hero.frontmatter.get("title").and_then(|v| v.as_str()), Some(""));
    assert_eq!(hero.raw_body, "Hero copy.");
    assert_eq!(hero.excerpt, "");
    assert_eq!(hero.parent, "n1");

    let footer = &records[2];
    assert_eq!(footer.raw_body, "Footer copy.");
    assert_eq!(footer.frontmatter.len(), 1);

    // One parent link per record.
    assert_eq!(host.links().len(), 3);
    assert!(host.links().iter().all(|(parent, _)| parent == "n1"));
}

#[tokio::test]
async fn test_section_ids_are_deterministic() {
    let unit = markdown_file_unit("n1");
    let transformer = Transformer::new(ParseOptions::default().with_sections(true));

    let host_a = RecordingHost::with_content("n1", SECTIONED);
    transformer.transform(&host_a, &unit).await.unwrap();
    let host_b = RecordingHost::with_content("n1", SECTIONED);
    transformer.transform(&host_b, &unit).await.unwrap();

    let ids_a: Vec<_> = host_a.records().iter().map(|r| r.id.clone()).collect();
    let ids_b: Vec<_> = host_b.records().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids_a, ids_b);
}

#[tokio::test]
async fn test_bad_section_data_reports_after_primary() {
    let content = "---\ntitle: Page\n---\nIntro.\n\n--- hero\n{{bad: yaml: here}}\n---\nCopy.";
    let unit = markdown_file_unit("n1");
    let host = RecordingHost::with_content("n1", content);
    let transformer = Transformer::new(ParseOptions::default().with_sections(true));

    let result = transformer.transform(&host, &unit).await.unwrap();

    // The invocation fails as a whole, but the primary registration — a
    // host-side effect — has already happened.
    assert!(result.is_none());
    assert_eq!(host.records().len(), 1);
    assert_eq!(host.failures().len(), 1);
}

// ----------------------------------------------------------------------------
// Digests
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_digest_idempotent_across_invocations() {
    let unit = markdown_file_unit("n1");
    let text = "---\ntitle: Stable\n---\nSame body.";

    let host_a = RecordingHost::with_content("n1", text);
    let a = Transformer::default()
        .transform(&host_a, &unit)
        .await
        .unwrap()
        .unwrap();

    let host_b = RecordingHost::with_content("n1", text);
    let b = Transformer::default()
        .transform(&host_b, &unit)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(a.content_digest, b.content_digest);
}

#[tokio::test]
async fn test_digest_differs_for_different_content() {
    let unit = markdown_file_unit("n1");

    let host_a = RecordingHost::with_content("n1", "Body one.");
    let a = Transformer::default()
        .transform(&host_a, &unit)
        .await
        .unwrap()
        .unwrap();

    let host_b = RecordingHost::with_content("n1", "Body two.");
    let b = Transformer::default()
        .transform(&host_b, &unit)
        .await
        .unwrap()
        .unwrap();

    assert_ne!(a.content_digest, b.content_digest);
}

// ----------------------------------------------------------------------------
// Error boundary
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_malformed_frontmatter_reports_fatal() {
    let unit = markdown_file_unit("n1");
    let host = RecordingHost::with_content("n1", "---\ntitle: Broken\n\nNo closing delimiter");

    let result = Transformer::default().transform(&host, &unit).await.unwrap();

    assert!(result.is_none());
    assert!(host.records().is_empty());

    let failures = host.failures();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].contains("file /content/n1.md"));
    assert!(failures[0].contains("unterminated"));
}

#[tokio::test]
async fn test_loader_failure_propagates_unreported() {
    let unit = markdown_file_unit("missing");
    let host = RecordingHost::new();

    let result = Transformer::default().transform(&host, &unit).await;

    assert!(result.is_err());
    assert!(host.failures().is_empty());
    assert!(host.records().is_empty());
}
