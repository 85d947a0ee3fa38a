//! Property-based tests for record digests.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::record::MarkdownRecord;
    use proptest::prelude::*;
    use serde_json::Map;

    fn record(parent: &str, body: &str, excerpt: &str) -> MarkdownRecord {
        MarkdownRecord {
            id: "fixed-id".to_string(),
            parent: parent.to_string(),
            frontmatter: Map::new(),
            excerpt: excerpt.to_string(),
            raw_body: body.to_string(),
            source_path: None,
            content_digest: String::new(),
        }
    }

    proptest! {
        #[test]
        fn test_digest_is_pure_function_of_fields(body in "\\PC*", excerpt in "\\PC*") {
            let a = record("p", &body, &excerpt).seal().unwrap();
            let b = record("p", &body, &excerpt).seal().unwrap();
            prop_assert_eq!(a.content_digest, b.content_digest);
        }

        #[test]
        fn test_digest_tracks_body(body in "\\PC+") {
            let a = record("p", &body, "").seal().unwrap();
            let b = record("p", &format!("{body}!"), "").seal().unwrap();
            prop_assert_ne!(a.content_digest, b.content_digest);
        }

        #[test]
        fn test_digest_shape(body in "\\PC*") {
            let sealed = record("p", &body, "").seal().unwrap();
            prop_assert_eq!(sealed.content_digest.len(), 64);
            prop_assert!(sealed.content_digest.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}
