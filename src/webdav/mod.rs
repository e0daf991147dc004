//! Remote directory listing over WebDAV.
//!
//! [`WebdavLister`] issues a depth-1 PROPFIND against the configured
//! endpoint. Any failure (missing configuration, transport error, error
//! status, unparseable body) is answered with the bundled fixture set, so the
//! page always has something to show. The live request itself is exposed as
//! [`WebdavLister::fetch_listing`], which returns the typed error instead.

mod propfind;

pub use propfind::{parse_multistatus, PROPFIND_ALLPROP};

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use davshelf_core::config::WebdavConfig;
use davshelf_core::{Error, FileEntry, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use tracing::{debug, warn};

/// Source of the flat file listing.
#[async_trait]
pub trait DirectoryLister: Send + Sync {
    /// Never fails: errors are replaced by fallback data.
    async fn list_files(&self) -> Vec<FileEntry>;
}

pub struct WebdavLister {
    client: Client,
    config: WebdavConfig,
}

impl WebdavLister {
    pub fn new(config: WebdavConfig) -> Self {
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

    /// Run the PROPFIND and parse the multistatus body.
    pub async fn fetch_listing(&self) -> Result<Vec<FileEntry>> {
        let url = self
            .config
            .endpoint()
            .ok_or_else(|| Error::MissingConfig("webdav.url".into()))?;
        let (username, password) = self
            .config
            .credentials()
            .ok_or_else(|| Error::MissingConfig("webdav.username / webdav.password".into()))?;

        let method = Method::from_bytes(b"PROPFIND")
            .map_err(|e| Error::Internal(format!("invalid method: {e}")))?;

        let response = self
            .client
            .request(method, url)
            .header("Depth", "1")
            .header(CONTENT_TYPE, "application/xml")
            .basic_auth(username, Some(password))
            .body(PROPFIND_ALLPROP)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("PROPFIND {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::upstream("webdav", status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("failed to read PROPFIND body: {e}")))?;

        parse_multistatus(&body)
    }

    fn fallback(&self) -> Vec<FileEntry> {
        load_fixture(&self.config.fixture_path)
    }
}

#[async_trait]
impl DirectoryLister for WebdavLister {
    async fn list_files(&self) -> Vec<FileEntry> {
        if !self.config.is_live() {
            debug!("WebDAV endpoint or credentials not configured; serving fixture data");
            return self.fallback();
        }

        match self.fetch_listing().await {
            Ok(entries) => {
                debug!(count = entries.len(), "WebDAV listing fetched");
                entries
            }
            Err(e) => {
                warn!(code = e.code(), error = %e, "WebDAV listing failed; serving fixture data");
                self.fallback()
            }
        }
    }
}

/// Read the fixture set. A missing or unreadable fixture yields an empty
/// listing.
pub fn load_fixture(path: &Path) -> Vec<FileEntry> {
    match read_fixture(path) {
        Ok(entries) => {
            debug!(count = entries.len(), "Loaded fixture entries from {}", path.display());
            entries
        }
        Err(Error::Io { source }) if source.kind() == std::io::ErrorKind::NotFound => {
            warn!("No fixture file at {}; listing is empty", path.display());
            Vec::new()
        }
        Err(e) => {
            warn!(code = e.code(), "Failed to load fixture file {}: {e}", path.display());
            Vec::new()
        }
    }
}

fn read_fixture(path: &Path) -> Result<Vec<FileEntry>> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| Error::MalformedResponse(format!("fixture {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn fixture_preserves_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "b.mkv", "path": "/b.mkv"}}, {{"name": "a.mkv", "path": "/a.mkv"}}]"#
        )
        .unwrap();
        let entries = load_fixture(file.path());
        assert_eq!(
            entries,
            vec![FileEntry::new("b.mkv", "/b.mkv"), FileEntry::new("a.mkv", "/a.mkv")]
        );
    }

    #[test]
    fn missing_fixture_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_fixture(&dir.path().join("absent.json")).is_empty());
    }

    #[test]
    fn malformed_fixture_is_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(load_fixture(file.path()).is_empty());
    }

    #[tokio::test]
    async fn fetch_without_config_is_missing_config() {
        let lister = WebdavLister::new(WebdavConfig::default());
        let err = lister.fetch_listing().await.unwrap_err();
        assert_eq!(err.code(), "missing_config");
    }
}
