//! Encyclopedia port
//!
//! Summary lookup for a disease title. Lookups are infallible at the type
//! level: every failure is reported as an [`EncyclopediaOutcome`] variant.

use async_trait::async_trait;
use early_detect_domain::EncyclopediaOutcome;

/// Default number of sentences requested for a summary
pub const DEFAULT_SUMMARY_SENTENCES: usize = 4;

#[async_trait]
pub trait Encyclopedia: Send + Sync {
    /// Display name of the source, e.g. "Wikipedia"
    fn name(&self) -> &str;

    /// Look up `title` and return at most `sentences` sentences of summary.
    async fn summarize(&self, title: &str, sentences: usize) -> EncyclopediaOutcome;
}
