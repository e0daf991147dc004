//! Metadata lookup for listed files.
//!
//! - [`provider`] -- the [`MetadataProvider`] trait.
//! - [`providers`] -- concrete backends ([`TmdbProvider`]).
//!
//! [`lookup`] is what callers use: it never fails, turning every provider
//! error into "no metadata".

pub mod provider;
pub mod providers;

pub use provider::MetadataProvider;
pub use providers::TmdbProvider;

use davshelf_core::MetadataResult;
use tracing::warn;

/// Query `provider` for `query`, treating every failure as no match.
///
/// An unavailable provider or an empty query returns `None` without issuing
/// a request.
pub async fn lookup(provider: &dyn MetadataProvider, query: &str) -> Option<MetadataResult> {
    if query.is_empty() || !provider.is_available() {
        return None;
    }

    match provider.search(query).await {
        Ok(result) => result,
        Err(e) => {
            warn!(
                provider = provider.name(),
                code = e.code(),
                error = %e,
                query = %query,
                "Metadata lookup failed"
            );
            None
        }
    }
}
