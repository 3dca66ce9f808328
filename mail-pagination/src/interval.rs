//! Local page-interval bookkeeping.
//!
//! A page interval is an inclusive `(time, order)` span for which every
//! remote item of a mailbox selection is known to be stored locally. The
//! pager records one interval per fetched page and merges touching
//! intervals, so that later loads can:
//!
//! - trust the local copy of a page ([`PageIntervalStore::is_local_page_valid`]),
//! - narrow a remote request to the part that is not synchronised yet
//!   ([`PageIntervalStore::clipped_page_key`]).
//!
//! Intervals are partitioned by [`IntervalScope`]: a label, keyword or read
//! filter change starts from an empty set.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::item::position;
use crate::types::{OrderBy, OrderDirection, PageItem, PageItemType, PageKey, ReadStatus};

// ---------------------------------------------------------------------------
// PageInterval
// ---------------------------------------------------------------------------

/// Inclusive span of synchronised items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInterval {
    pub min_time: i64,
    pub max_time: i64,
    pub min_order: i64,
    pub max_order: i64,
    pub min_id: Option<String>,
    pub max_id: Option<String>,
}

impl PageInterval {
    /// The interval covered by the full bounds of `key`.
    pub fn from_key(key: &PageKey) -> Self {
        let filter = &key.filter;
        Self {
            min_time: filter.min_time,
            max_time: filter.max_time,
            min_order: filter.min_order,
            max_order: filter.max_order,
            min_id: filter.min_id.clone(),
            max_id: filter.max_id.clone(),
        }
    }

    /// The interval proven synchronised by fetching `items` with `key`.
    ///
    /// A short page means the list ended in the fetch direction, so the whole
    /// key span is covered. A full page only covers up to its last item.
    pub fn from_page<T: PageItem>(key: &PageKey, items: &[T]) -> Self {
        let full = Self::from_key(key);
        if items.len() < key.size {
            return full;
        }
        let Some(last) = items.last() else {
            return full;
        };

        match key.order_direction {
            OrderDirection::Ascending => Self {
                max_time: last.time(),
                max_order: last.order(),
                max_id: Some(last.id().to_string()),
                ..full
            },
            OrderDirection::Descending => Self {
                min_time: last.time(),
                min_order: last.order(),
                min_id: Some(last.id().to_string()),
                ..full
            },
        }
    }

    pub fn lower(&self) -> (i64, i64) {
        (self.min_time, self.min_order)
    }

    pub fn upper(&self) -> (i64, i64) {
        (self.max_time, self.max_order)
    }

    /// Whether `pos` lies within the interval, comparing `(time, order)`.
    pub fn contains(&self, pos: (i64, i64)) -> bool {
        self.lower() <= pos && pos <= self.upper()
    }

    /// Whether `time` lies within the interval, ignoring `order`.
    pub fn contains_time(&self, time: i64) -> bool {
        self.min_time <= time && time <= self.max_time
    }

    /// Whether the two intervals share at least one position.
    pub fn overlaps(&self, other: &PageInterval) -> bool {
        self.lower() <= other.upper() && other.lower() <= self.upper()
    }

    /// Whether the two intervals overlap or leave no position between them.
    ///
    /// Consecutive pages meet at the same `time` one `order` apart, since an
    /// adjacent key starts at `order ± 1` past the boundary item.
    pub fn touches(&self, other: &PageInterval) -> bool {
        fn meets(upper: &PageInterval, lower: &PageInterval) -> bool {
            upper.max_time == lower.min_time
                && upper.max_order.saturating_add(1) == lower.min_order
        }
        self.overlaps(other) || meets(self, other) || meets(other, self)
    }

    /// Smallest interval covering both. Boundary ids follow their bounds.
    pub fn merge(&self, other: &PageInterval) -> PageInterval {
        let low = if other.lower() < self.lower()
            || (other.lower() == self.lower() && self.min_id.is_none())
        {
            other
        } else {
            self
        };
        let high = if other.upper() > self.upper()
            || (other.upper() == self.upper() && self.max_id.is_none())
        {
            other
        } else {
            self
        };

        PageInterval {
            min_time: low.min_time,
            min_order: low.min_order,
            min_id: low.min_id.clone(),
            max_time: high.max_time,
            max_order: high.max_order,
            max_id: high.max_id.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// IntervalScope
// ---------------------------------------------------------------------------

/// Mailbox selection an interval belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalScope {
    pub item_type: PageItemType,
    pub order_by: OrderBy,
    pub label_id: String,
    pub keyword: String,
    pub read: ReadStatus,
}

impl IntervalScope {
    pub fn new(item_type: PageItemType, key: &PageKey) -> Self {
        Self {
            item_type,
            order_by: key.order_by,
            label_id: key.filter.label_id.clone(),
            keyword: key.filter.keyword.clone(),
            read: key.filter.read,
        }
    }
}

// ---------------------------------------------------------------------------
// PageIntervalStore
// ---------------------------------------------------------------------------

/// In-memory set of page intervals, per scope, kept merged and sorted by
/// lower bound.
#[derive(Debug, Clone, Default)]
pub struct PageIntervalStore {
    intervals: HashMap<IntervalScope, Vec<PageInterval>>,
}

impl PageIntervalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `items` were fetched with `key`, merging the new interval
    /// with every stored interval it overlaps or touches (see
    /// [`PageInterval::touches`]).
    ///
    /// Returns the merged interval as stored.
    pub fn upsert_page_interval<T: PageItem>(
        &mut self,
        item_type: PageItemType,
        key: &PageKey,
        items: &[T],
    ) -> PageInterval {
        let scope = IntervalScope::new(item_type, key);
        let mut merged = PageInterval::from_page(key, items);
        let stored = self.intervals.entry(scope).or_default();

        // Merging can grow the interval into neighbours it did not touch
        // before, so repeat until nothing else overlaps.
        loop {
            let before = stored.len();
            stored.retain(|existing| {
                if existing.touches(&merged) {
                    merged = merged.merge(existing);
                    false
                } else {
                    true
                }
            });
            if stored.len() == before {
                break;
            }
        }

        debug!(
            min_time = merged.min_time,
            max_time = merged.max_time,
            remaining = stored.len(),
            "upserted page interval"
        );

        stored.push(merged.clone());
        stored.sort_by_key(PageInterval::lower);
        merged
    }

    /// Narrow `key` to the part not covered by local intervals.
    ///
    /// Returns `None` when a single interval already covers the whole key,
    /// meaning nothing needs to be fetched. Containment of the key bounds is
    /// decided on `time` alone; bounds only ever move inward.
    pub fn clipped_page_key(&self, item_type: PageItemType, key: &PageKey) -> Option<PageKey> {
        let stored = self.stored(item_type, key);
        let filter = &key.filter;

        if stored
            .iter()
            .any(|i| i.contains_time(filter.min_time) && i.contains_time(filter.max_time))
        {
            debug!(
                min_time = filter.min_time,
                max_time = filter.max_time,
                "page key fully covered locally"
            );
            return None;
        }

        let mut clipped = filter.clone();

        if let Some(interval) = stored.iter().find(|i| i.contains_time(filter.min_time)) {
            if interval.upper() > clipped.lower() {
                clipped.min_time = interval.max_time;
                clipped.min_order = interval.max_order;
                clipped.min_id = interval.max_id.clone();
            }
        }

        if let Some(interval) = stored.iter().find(|i| i.contains_time(filter.max_time)) {
            if interval.lower() < clipped.upper() {
                clipped.max_time = interval.min_time;
                clipped.max_order = interval.min_order;
                clipped.max_id = interval.min_id.clone();
            }
        }

        if clipped != *filter {
            debug!(
                from_min = filter.min_time,
                from_max = filter.max_time,
                to_min = clipped.min_time,
                to_max = clipped.max_time,
                "clipped page key"
            );
        }

        Some(key.with_filter(clipped))
    }

    /// Whether the local copy of the page fetched with `key` can be trusted.
    ///
    /// With items, one interval must contain both the lowest and the highest
    /// item. Without items, one interval must contain the whole key span.
    pub fn is_local_page_valid<T: PageItem>(
        &self,
        item_type: PageItemType,
        key: &PageKey,
        items: &[T],
    ) -> bool {
        let stored = self.stored(item_type, key);
        if stored.is_empty() {
            return false;
        }

        let lowest = items.iter().map(|item| position(item)).min();
        let highest = items.iter().map(|item| position(item)).max();

        let (low, high) = match (lowest, highest) {
            (Some(low), Some(high)) => (low, high),
            _ => (key.filter.lower(), key.filter.upper()),
        };

        stored.iter().any(|i| i.contains(low) && i.contains(high))
    }

    /// Drop every interval recorded for `label_id`, forcing remote fetches.
    pub fn invalidate_label(&mut self, label_id: &str) {
        self.intervals.retain(|scope, _| scope.label_id != label_id);
    }

    /// Clone of the intervals stored for the scope of `key`.
    pub fn intervals(&self, item_type: PageItemType, key: &PageKey) -> Vec<PageInterval> {
        self.stored(item_type, key).to_vec()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.values().all(Vec::is_empty)
    }

    pub fn clear(&mut self) {
        self.intervals.clear();
    }

    fn stored(&self, item_type: PageItemType, key: &PageKey) -> &[PageInterval] {
        self.intervals
            .get(&IntervalScope::new(item_type, key))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
