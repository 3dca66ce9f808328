//! Previous/next key computation for a fetched page.
//!
//! Keys bracket the boundary items of the page: the previous key ends just
//! before the first fetched item and the next key starts just after the last
//! one. The `order ± 1` step together with the boundary id stops the same
//! item from being fetched twice when several items share a `time`.

use tracing::trace;

use crate::types::item::position;
use crate::types::{AdjacentPageKeys, OrderDirection, PageFilter, PageItem, PageKey};

/// Compute the keys of the pages before and after `items`.
///
/// `items` must be exactly what `current` fetched, already sorted in
/// `current.order_direction`. Only the first and last element are read.
/// With no items there is nothing to anchor on, so `prev` and `next` equal
/// `current`.
///
/// # Arguments
///
/// * `items` - The fetched page, in fetch order.
/// * `current` - The key that produced `items`.
/// * `page_size` - Size requested by all three returned keys.
pub fn get_adjacent_page_keys<T: PageItem>(
    items: &[T],
    current: &PageKey,
    page_size: usize,
) -> AdjacentPageKeys {
    debug_assert!(page_size > 0, "page size must be positive");

    let current = current.with_size(page_size);

    let (Some(first), Some(last)) = (items.first(), items.last()) else {
        trace!(page_size, "empty page, adjacent keys equal current");
        return AdjacentPageKeys {
            prev: current.clone(),
            next: current.clone(),
            current,
        };
    };

    debug_assert!(
        match current.order_direction {
            OrderDirection::Ascending => position(first) <= position(last),
            OrderDirection::Descending => position(first) >= position(last),
        },
        "items are not sorted in the key's direction"
    );

    let (prev_filter, next_filter) = match current.order_direction {
        OrderDirection::Ascending => (
            before(&current.filter, first),
            after(&current.filter, last),
        ),
        OrderDirection::Descending => (
            after(&current.filter, first),
            before(&current.filter, last),
        ),
    };

    trace!(
        first = first.id(),
        last = last.id(),
        direction = ?current.order_direction,
        "computed adjacent keys"
    );

    AdjacentPageKeys {
        prev: current.with_filter(prev_filter),
        next: current.with_filter(next_filter),
        current,
    }
}

/// Everything strictly older than `anchor`.
fn before<T: PageItem>(filter: &PageFilter, anchor: &T) -> PageFilter {
    PageFilter {
        min_time: i64::MIN,
        min_order: i64::MIN,
        min_id: None,
        max_time: anchor.time(),
        max_order: anchor.order().saturating_sub(1),
        max_id: Some(anchor.id().to_string()),
        ..filter.clone()
    }
}

/// Everything strictly newer than `anchor`.
fn after<T: PageItem>(filter: &PageFilter, anchor: &T) -> PageFilter {
    PageFilter {
        min_time: anchor.time(),
        min_order: anchor.order().saturating_add(1),
        min_id: Some(anchor.id().to_string()),
        max_time: i64::MAX,
        max_order: i64::MAX,
        max_id: None,
        ..filter.clone()
    }
}
