//! Per-request orchestration: listing, title guessing, metadata, links.

use std::sync::Arc;

use davshelf_core::config::WebdavConfig;
use davshelf_core::{DisplayItem, FileEntry, Player};
use davshelf_parser::guess_title;
use tracing::debug;

use crate::links::play_link;
use crate::metadata::{self, MetadataProvider};
use crate::webdav::DirectoryLister;

/// Builds the display rows for one page.
#[derive(Clone)]
pub struct Catalog {
    webdav: WebdavConfig,
    lister: Arc<dyn DirectoryLister>,
    provider: Arc<dyn MetadataProvider>,
}

impl Catalog {
    pub fn new(
        webdav: WebdavConfig,
        lister: Arc<dyn DirectoryLister>,
        provider: Arc<dyn MetadataProvider>,
    ) -> Self {
        Self {
            webdav,
            lister,
            provider,
        }
    }

    /// List the share once and enrich every entry, one at a time, in listing
    /// order.
    pub async fn items(&self, player: &Player) -> Vec<DisplayItem> {
        let entries = self.lister.list_files().await;
        debug!(count = entries.len(), player = player.id, "Building catalog");

        let mut items = Vec::with_capacity(entries.len());
        for entry in &entries {
            items.push(self.enrich(entry, player).await);
        }
        items
    }

    async fn enrich(&self, entry: &FileEntry, player: &Player) -> DisplayItem {
        let guessed = guess_title(&entry.name);
        let metadata = metadata::lookup(self.provider.as_ref(), &guessed).await;

        let (title, description, poster_url) = match metadata {
            Some(found) => (found.title, found.overview, found.poster_url),
            None => (guessed, String::new(), None),
        };

        DisplayItem {
            filename: entry.name.clone(),
            title,
            description,
            poster_url,
            play_link: play_link(&self.webdav, entry, player),
        }
    }
}
