//! Host capability traits.
//!
//! The build host owns node storage, identity generation, content
//! loading, and fatal-error reporting. The transformer only sees these
//! capabilities as traits, so the core logic stays free of the host's
//! object model.

use async_trait::async_trait;
use markweft_core::Result;

use crate::record::MarkdownRecord;
use crate::source::SourceUnit;

/// Registration capabilities: emit records and declare ownership links.
///
/// Implementations must be safe for concurrent use; the host may run many
/// independent transforms at once.
pub trait NodeSink {
    /// Register one emitted record with the host.
    fn register(&self, record: MarkdownRecord) -> Result<()>;

    /// Declare a parent→child link from a source unit to a record built
    /// from it.
    fn link(&self, parent: &SourceUnit, child: &MarkdownRecord) -> Result<()>;
}

/// Full capability surface a build host provides to the transformer.
#[async_trait]
pub trait BuildHost: NodeSink + Send + Sync {
    /// Derive a node identity from a seed string.
    ///
    /// Must be deterministic: the same seed always yields the same ID.
    fn generate_id(&self, seed: &str) -> String;

    /// Load a source unit's raw text content.
    ///
    /// The only suspension point in a transform; cancellation and
    /// timeouts are the host's concern.
    async fn load_content(&self, unit: &SourceUnit) -> Result<String>;

    /// Report a fatal transform failure.
    ///
    /// The host is expected to abort the build; the transformer returns
    /// an empty result afterward and emits nothing further.
    fn report_transform_failure(&self, message: &str);
}
