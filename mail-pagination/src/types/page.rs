use serde::{Deserialize, Serialize};

use super::enums::{OrderBy, OrderDirection, ReadStatus};
use super::item::{position, PageItem};

/// Page size used when a caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Largest page the list endpoints accept.
pub const MAX_PAGE_SIZE: usize = 150;

/// Label id of the inbox.
pub const INBOX_LABEL_ID: &str = "0";

/// Inclusive bound box over the ordering dimensions plus the mailbox
/// selection (label, keyword, read state).
///
/// An unbounded side holds `i64::MIN` / `i64::MAX` rather than `None`.
/// Real items must therefore never sit exactly on those values. `min_id` /
/// `max_id` only break ties at the exact boundary and are `None` while the
/// matching bound is a sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageFilter {
    pub label_id: String,
    pub keyword: String,
    pub read: ReadStatus,
    pub min_time: i64,
    pub max_time: i64,
    pub min_order: i64,
    pub max_order: i64,
    pub min_id: Option<String>,
    pub max_id: Option<String>,
}

impl Default for PageFilter {
    fn default() -> Self {
        Self {
            label_id: INBOX_LABEL_ID.to_string(),
            keyword: String::new(),
            read: ReadStatus::All,
            min_time: i64::MIN,
            max_time: i64::MAX,
            min_order: i64::MIN,
            max_order: i64::MAX,
            min_id: None,
            max_id: None,
        }
    }
}

impl PageFilter {
    /// Copy of this filter with every numeric bound reset to its sentinel.
    pub fn with_full_range(&self) -> Self {
        Self {
            min_time: i64::MIN,
            max_time: i64::MAX,
            min_order: i64::MIN,
            max_order: i64::MAX,
            min_id: None,
            max_id: None,
            ..self.clone()
        }
    }

    /// Lower `(time, order)` corner.
    pub fn lower(&self) -> (i64, i64) {
        (self.min_time, self.min_order)
    }

    /// Upper `(time, order)` corner.
    pub fn upper(&self) -> (i64, i64) {
        (self.max_time, self.max_order)
    }

    pub fn is_unbounded(&self) -> bool {
        self.lower() == (i64::MIN, i64::MIN) && self.upper() == (i64::MAX, i64::MAX)
    }

    /// Whether `item` falls inside the bounds and matches the mailbox
    /// selection. Bounds compare `(time, order)` lexicographically and are
    /// inclusive on both ends.
    pub fn contains<T: PageItem + ?Sized>(&self, item: &T) -> bool {
        let pos = position(item);
        if pos < self.lower() || pos > self.upper() {
            return false;
        }
        if !self.read.matches(item.read()) {
            return false;
        }
        if !self.label_id.is_empty() && !item.label_ids().iter().any(|l| *l == self.label_id) {
            return false;
        }
        if self.keyword.trim().is_empty() {
            return true;
        }
        item.keywords()
            .to_lowercase()
            .contains(&self.keyword.trim().to_lowercase())
    }
}

/// The request for one page of a mailbox list.
///
/// Keys are immutable values; every computation hands back fresh copies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageKey {
    pub order_by: OrderBy,
    pub order_direction: OrderDirection,
    pub size: usize,
    pub filter: PageFilter,
}

impl Default for PageKey {
    fn default() -> Self {
        Self {
            order_by: OrderBy::Time,
            order_direction: OrderDirection::Descending,
            size: DEFAULT_PAGE_SIZE,
            filter: PageFilter::default(),
        }
    }
}

impl PageKey {
    /// Copy of this key requesting `size` items.
    pub fn with_size(&self, size: usize) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }

    /// Copy of this key with `filter` replaced.
    pub fn with_filter(&self, filter: PageFilter) -> Self {
        Self {
            filter,
            ..self.clone()
        }
    }
}

/// Keys surrounding a fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacentPageKeys {
    pub prev: PageKey,
    pub current: PageKey,
    pub next: PageKey,
}
