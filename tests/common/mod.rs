//! Shared helpers for integration tests.
//!
//! Provides stub collaborators for [`AppContext`], a [`TestHarness`] that
//! serves the router on a random port, a multistatus body builder, and
//! fixture files on disk.

#![allow(dead_code)]

use std::io::Write;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use davshelf::metadata::MetadataProvider;
use davshelf::server::{create_router, AppContext};
use davshelf::webdav::DirectoryLister;
use davshelf_core::{Config, FileEntry, MetadataResult, Result};

/// Lister returning a fixed set of entries.
pub struct StaticLister(pub Vec<FileEntry>);

#[async_trait]
impl DirectoryLister for StaticLister {
    async fn list_files(&self) -> Vec<FileEntry> {
        self.0.clone()
    }
}

/// Provider answering from a table keyed by query; records every query.
pub struct TableProvider {
    pub available: bool,
    pub table: Vec<(&'static str, MetadataResult)>,
    pub queries: Mutex<Vec<String>>,
    pub calls: AtomicUsize,
}

impl TableProvider {
    pub fn new(table: Vec<(&'static str, MetadataResult)>) -> Self {
        Self {
            available: true,
            table,
            queries: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new(Vec::new())
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataProvider for TableProvider {
    fn name(&self) -> &'static str {
        "table"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    async fn search(&self, query: &str) -> Result<Option<MetadataResult>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        Ok(self
            .table
            .iter()
            .find(|(q, _)| *q == query)
            .map(|(_, r)| r.clone()))
    }
}

/// Application context over stub collaborators.
pub struct TestHarness {
    pub ctx: AppContext,
    pub provider: Arc<TableProvider>,
}

impl TestHarness {
    pub fn new(
        config: Config,
        entries: &[(&str, &str)],
        table: Vec<(&'static str, MetadataResult)>,
    ) -> Self {
        let provider = Arc::new(TableProvider::new(table));
        let ctx = AppContext::with_parts(config, lister(entries), provider.clone());
        Self { ctx, provider }
    }

    /// Start an Axum server on a random port.
    pub async fn with_server(
        config: Config,
        entries: &[(&str, &str)],
        table: Vec<(&'static str, MetadataResult)>,
    ) -> (Self, SocketAddr) {
        let harness = Self::new(config, entries, table);
        let app = create_router(harness.ctx.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        (harness, addr)
    }
}

pub fn metadata(title: &str, overview: &str, poster_url: Option<&str>) -> MetadataResult {
    MetadataResult {
        title: title.to_string(),
        overview: overview.to_string(),
        poster_url: poster_url.map(String::from),
        media_type: Some("movie".to_string()),
    }
}

pub fn lister(entries: &[(&str, &str)]) -> Arc<StaticLister> {
    Arc::new(StaticLister(
        entries
            .iter()
            .map(|(name, path)| FileEntry::new(*name, *path))
            .collect(),
    ))
}

/// One `<d:response>` per `(href, is_collection)`.
pub fn multistatus(responses: &[(&str, bool)]) -> String {
    let mut body = String::from(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<d:multistatus xmlns:d=\"DAV:\">\n",
    );
    for (href, is_collection) in responses {
        let resourcetype = if *is_collection {
            "<d:resourcetype><d:collection/></d:resourcetype>"
        } else {
            "<d:resourcetype/>"
        };
        body.push_str(&format!(
            "  <d:response>\n    <d:href>{href}</d:href>\n    <d:propstat>\n      <d:prop>{resourcetype}</d:prop>\n      <d:status>HTTP/1.1 200 OK</d:status>\n    </d:propstat>\n  </d:response>\n"
        ));
    }
    body.push_str("</d:multistatus>\n");
    body
}

/// Write `entries` as a JSON fixture file.
pub fn fixture_file(entries: &[(&str, &str)]) -> tempfile::NamedTempFile {
    let records: Vec<FileEntry> = entries
        .iter()
        .map(|(name, path)| FileEntry::new(*name, *path))
        .collect();
    let mut file = tempfile::NamedTempFile::new().expect("failed to create fixture file");
    file.write_all(serde_json::to_string(&records).unwrap().as_bytes())
        .expect("failed to write fixture file");
    file
}
