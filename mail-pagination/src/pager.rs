//! Mailbox pager: fetch a page, record it locally, compute the surrounding
//! keys, and follow them.
//!
//! The pager owns a [`PageIntervalStore`] and a [`PageSource`]. Each load
//! goes through the same steps:
//!
//! ```text
//!   PageKey --fetch--> items --upsert interval--> adjacent keys --> LoadedPage
//! ```

use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::adjacent::get_adjacent_page_keys;
use crate::error::Result;
use crate::interval::PageIntervalStore;
use crate::refresh::get_refresh_key;
use crate::rest::MailHttpClient;
use crate::types::{MailboxItem, OrderDirection, PageItemType, PageKey};

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// Where pages come from.
pub trait PageSource {
    /// Fetch the items selected by `key`, sorted in `key.order_direction`
    /// and at most `key.size` long.
    fn fetch(
        &self,
        item_type: PageItemType,
        key: &PageKey,
    ) -> impl Future<Output = Result<Vec<MailboxItem>>> + Send;
}

impl PageSource for MailHttpClient {
    async fn fetch(&self, item_type: PageItemType, key: &PageKey) -> Result<Vec<MailboxItem>> {
        self.get_items(item_type, key).await
    }
}

/// Page source over a fixed list of items, applying key filters the way the
/// local database does.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    items: Vec<MailboxItem>,
}

impl InMemorySource {
    pub fn new(items: Vec<MailboxItem>) -> Self {
        Self { items }
    }

    /// Synchronous form of [`PageSource::fetch`].
    pub fn select(&self, item_type: PageItemType, key: &PageKey) -> Vec<MailboxItem> {
        let mut selected: Vec<MailboxItem> = self
            .items
            .iter()
            .filter(|item| item.item_type == item_type && key.filter.contains(*item))
            .cloned()
            .collect();

        selected.sort_by(|a, b| (a.time, a.order, &a.id).cmp(&(b.time, b.order, &b.id)));
        if key.order_direction == OrderDirection::Descending {
            selected.reverse();
        }
        selected.truncate(key.size);
        selected
    }
}

impl PageSource for InMemorySource {
    async fn fetch(&self, item_type: PageItemType, key: &PageKey) -> Result<Vec<MailboxItem>> {
        Ok(self.select(item_type, key))
    }
}

// ---------------------------------------------------------------------------
// Pager
// ---------------------------------------------------------------------------

/// One loaded page and the keys around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPage {
    /// Key the page was fetched with.
    pub key: PageKey,
    pub items: Vec<MailboxItem>,
    pub prev: PageKey,
    pub next: PageKey,
    /// Fewer items than requested: the list ends in the fetch direction.
    pub end_reached: bool,
}

pub struct MailboxPager<S> {
    source: S,
    item_type: PageItemType,
    page_size: usize,
    intervals: PageIntervalStore,
}

impl<S: PageSource> MailboxPager<S> {
    /// Create a pager.
    ///
    /// # Arguments
    ///
    /// * `source` - Where pages are fetched from.
    /// * `item_type` - Whether the list shows messages or conversations.
    /// * `page_size` - Size of every page after the first.
    pub fn new(source: S, item_type: PageItemType, page_size: usize) -> Self {
        debug_assert!(page_size > 0, "page size must be positive");
        Self {
            source,
            item_type,
            page_size,
            intervals: PageIntervalStore::new(),
        }
    }

    pub fn intervals(&self) -> &PageIntervalStore {
        &self.intervals
    }

    /// Fetch the page selected by `key` and compute its neighbours.
    pub async fn load(&mut self, key: &PageKey) -> Result<LoadedPage> {
        let items = self.source.fetch(self.item_type, key).await?;
        self.intervals
            .upsert_page_interval(self.item_type, key, &items);

        let adjacent = get_adjacent_page_keys(&items, key, self.page_size);
        let end_reached = items.len() < key.size;

        debug!(
            fetched = items.len(),
            requested = key.size,
            end_reached,
            "loaded page"
        );

        Ok(LoadedPage {
            key: key.clone(),
            items,
            prev: adjacent.prev,
            next: adjacent.next,
            end_reached,
        })
    }

    /// Key re-fetching everything currently loaded in `pages`.
    pub fn refresh_key(&self, pages: &[LoadedPage], initial: &PageKey) -> PageKey {
        let items: Vec<&MailboxItem> = pages.iter().flat_map(|p| p.items.iter()).collect();
        get_refresh_key(&items, initial)
    }

    /// Drop local intervals of the label and reload the loaded window.
    pub async fn refresh(&mut self, pages: &[LoadedPage], initial: &PageKey) -> Result<LoadedPage> {
        let key = self.refresh_key(pages, initial);
        self.intervals.invalidate_label(&key.filter.label_id);
        self.load(&key).await
    }

    /// Load pages starting at `initial`, following `next`, until the list
    /// ends or `cancel` fires.
    pub async fn walk(
        &mut self,
        initial: &PageKey,
        cancel: &CancellationToken,
    ) -> Result<Vec<LoadedPage>> {
        let mut key = initial.clone();
        let mut pages = Vec::new();

        loop {
            let page = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    info!(pages = pages.len(), "walk cancelled");
                    break;
                }
                page = self.load(&key) => page?,
            };

            let done = page.end_reached || page.items.is_empty();
            key = page.next.clone();
            pages.push(page);

            if done {
                info!(pages = pages.len(), "reached end of list");
                break;
            }
        }

        Ok(pages)
    }

    /// `key` narrowed to what is not synchronised locally yet.
    pub fn clipped_key(&self, key: &PageKey) -> Option<PageKey> {
        self.intervals.clipped_page_key(self.item_type, key)
    }

    pub fn is_local_page_valid(&self, key: &PageKey, items: &[MailboxItem]) -> bool {
        self.intervals
            .is_local_page_valid(self.item_type, key, items)
    }
}
