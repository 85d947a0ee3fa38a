//! Deterministic stable-ID derivation.
//!
//! Provides a content-addressed ID generator for hosts that do not bring
//! their own. The same seed string always produces the same ID, and
//! distinct seeds produce distinct IDs up to blake3 collision odds.

/// Derive a stable, deterministic ID from a seed string.
///
/// Hashes the seed with blake3 and returns the first 128 bits as lowercase
/// hex. Suitable wherever a host-side identity generator contract asks for
/// "deterministic given a seed string".
///
/// # Examples
///
/// ```
/// use markweft_core::util::ids::stable_id;
///
/// let a = stable_id("content/post.md >>> Markdown");
/// let b = stable_id("content/post.md >>> Markdown");
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 32);
///
/// let c = stable_id("content/other.md >>> Markdown");
/// assert_ne!(a, c);
/// ```
pub fn stable_id(seed: &str) -> String {
    let hash = blake3::hash(seed.as_bytes());
    hash.to_hex().as_str()[..32].to_string()
}
