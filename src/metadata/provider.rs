//! Trait definition for metadata providers.

use async_trait::async_trait;
use davshelf_core::{MetadataResult, Result};

/// Async trait that metadata backends implement.
///
/// Providers are shared across requests behind an `Arc`.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Short, lowercase identifier for this provider (e.g. `"tmdb"`).
    fn name(&self) -> &'static str;

    /// Returns `true` when the provider has credentials and can serve
    /// requests.
    fn is_available(&self) -> bool;

    /// Search for `query` and return the provider's first result.
    ///
    /// `Ok(None)` means the search succeeded but matched nothing.
    async fn search(&self, query: &str) -> Result<Option<MetadataResult>>;
}
