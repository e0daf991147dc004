//! TMDB (The Movie Database) metadata provider.
//!
//! Implements [`MetadataProvider`] with the v3 multi search, which covers
//! movies and TV shows in one request. Only the first result is used; there
//! is no ranking of candidates.

use std::time::Duration;

use async_trait::async_trait;
use davshelf_core::config::TmdbConfig;
use davshelf_core::{Error, MetadataResult, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::metadata::provider::MetadataProvider;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";
const POSTER_SIZE: &str = "w500";

// ---------------------------------------------------------------------------
// TMDB API response types (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TmdbSearchResponse {
    #[serde(default)]
    results: Vec<TmdbMultiResult>,
}

#[derive(Debug, Deserialize)]
struct TmdbMultiResult {
    /// Movie title.
    title: Option<String>,
    /// TV show (or person) name.
    name: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
    media_type: Option<String>,
}

// ---------------------------------------------------------------------------
// Provider implementation
// ---------------------------------------------------------------------------

/// TMDB metadata provider.
///
/// # Examples
///
/// ```no_run
/// use davshelf::metadata::providers::TmdbProvider;
/// use davshelf_core::config::TmdbConfig;
///
/// let provider = TmdbProvider::new(TmdbConfig::default());
/// ```
pub struct TmdbProvider {
    client: Client,
    config: TmdbConfig,
}

impl TmdbProvider {
    pub fn new(config: TmdbConfig) -> Self {
        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build HTTP client with timeout: {}", e);
            Client::new()
        });

        Self { client, config }
    }

    async fn search_multi(&self, api_key: &str, query: &str) -> Result<TmdbSearchResponse> {
        let url = format!("{}/search/multi", self.config.base_url.trim_end_matches('/'));
        debug!(query = %query, "TMDB multi search");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", api_key),
                ("query", query),
                ("language", self.config.language.as_str()),
                ("page", "1"),
                ("include_adult", "false"),
            ])
            .send()
            .await
            .map_err(|e| Error::Transport(format!("TMDB request failed: {}", e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::upstream("tmdb", status.as_u16()));
        }

        response
            .json::<TmdbSearchResponse>()
            .await
            .map_err(|e| Error::MalformedResponse(format!("TMDB search response: {}", e.without_url())))
    }
}

/// Build the poster URL from a TMDB image path fragment such as `/abc.jpg`.
pub fn poster_url(poster_path: &str) -> String {
    format!("{TMDB_IMAGE_BASE}/{POSTER_SIZE}{poster_path}")
}

fn to_metadata(result: TmdbMultiResult, query: &str) -> MetadataResult {
    let title = [result.title, result.name]
        .into_iter()
        .flatten()
        .find(|t| !t.is_empty())
        .unwrap_or_else(|| query.to_string());

    MetadataResult {
        title,
        overview: result.overview.unwrap_or_default(),
        poster_url: result
            .poster_path
            .filter(|p| !p.is_empty())
            .map(|p| poster_url(&p)),
        media_type: result.media_type,
    }
}

#[async_trait]
impl MetadataProvider for TmdbProvider {
    fn name(&self) -> &'static str {
        "tmdb"
    }

    fn is_available(&self) -> bool {
        self.config.api_key().is_some()
    }

    async fn search(&self, query: &str) -> Result<Option<MetadataResult>> {
        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| Error::MissingConfig("tmdb.api_key".into()))?;

        let body = self.search_multi(api_key, query).await?;
        Ok(body
            .results
            .into_iter()
            .next()
            .map(|first| to_metadata(first, query)))
    }
}
