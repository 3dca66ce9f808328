//! Refresh key computation.

use tracing::trace;

use crate::types::item::position;
use crate::types::{PageFilter, PageItem, PageKey};

/// Compute a key that re-fetches the window spanned by `items`.
///
/// Bounds are inclusive of the boundary items so everything already shown is
/// fetched again. The lowest and highest items are searched across the whole
/// slice because the slice may be several pages glued together. With no
/// items the key falls back to the full range.
///
/// The returned size is `max(initial.size, items.len())`, large enough to
/// cover the whole observed span in one request.
pub fn get_refresh_key<T: PageItem>(items: &[T], initial: &PageKey) -> PageKey {
    let lowest = items.iter().min_by_key(|item| position(*item));
    let highest = items.iter().max_by_key(|item| position(*item));

    let (Some(lowest), Some(highest)) = (lowest, highest) else {
        trace!("no items, refresh key covers the full range");
        return initial.with_filter(initial.filter.with_full_range());
    };

    let filter = PageFilter {
        min_time: lowest.time(),
        min_order: lowest.order(),
        max_time: highest.time(),
        max_order: highest.order(),
        min_id: None,
        max_id: None,
        ..initial.filter.clone()
    };

    let size = initial.size.max(items.len());

    trace!(
        lowest = lowest.id(),
        highest = highest.id(),
        size,
        "computed refresh key"
    );

    PageKey {
        size,
        filter,
        ..initial.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MailboxItem, OrderDirection};

    fn item(id: &str, time: i64, order: i64) -> MailboxItem {
        MailboxItem {
            item_type: Default::default(),
            id: id.to_string(),
            conversation_id: None,
            time,
            order,
            size: 0,
            read: true,
            label_ids: vec![],
            keywords: String::new(),
            subject: String::new(),
        }
    }

    fn items(count: i64) -> Vec<MailboxItem> {
        (1..=count)
            .map(|i| item(&i.to_string(), i * 1000, i * 1000))
            .collect()
    }

    #[test]
    fn multi_page_span_widens_size() {
        let initial = PageKey {
            order_direction: OrderDirection::Ascending,
            size: 5,
            ..Default::default()
        };

        let key = get_refresh_key(&items(10), &initial);

        assert_eq!(key.filter.min_time, 1000);
        assert_eq!(key.filter.min_order, 1000);
        assert_eq!(key.filter.max_time, 10_000);
        assert_eq!(key.filter.max_order, 10_000);
        assert_eq!(key.size, 10);
    }

    #[test]
    fn full_single_page_keeps_size() {
        let initial = PageKey::default().with_size(5);
        let key = get_refresh_key(&items(5), &initial);
        assert_eq!(key.size, 5);
    }

    #[test]
    fn short_page_keeps_requested_size() {
        let key = get_refresh_key(&items(5), &PageKey::default());
        assert_eq!(key.size, 25);
        assert_eq!(key.filter.min_time, 1000);
        assert_eq!(key.filter.max_time, 5000);
    }

    #[test]
    fn single_item_collapses_bounds() {
        for direction in [OrderDirection::Ascending, OrderDirection::Descending] {
            let initial = PageKey {
                order_direction: direction,
                ..Default::default()
            };
            let key = get_refresh_key(&[item("1", 4200, 17)], &initial);
            assert_eq!(key.filter.min_time, 4200);
            assert_eq!(key.filter.max_time, 4200);
            assert_eq!(key.filter.min_order, 17);
            assert_eq!(key.filter.max_order, 17);
            assert_eq!(key.order_direction, direction);
        }
    }

    #[test]
    fn empty_items_reset_to_full_range() {
        let initial = PageKey {
            filter: PageFilter {
                label_id: "6".into(),
                min_time: 1000,
                max_time: 2000,
                min_order: 1000,
                max_order: 2000,
                min_id: Some("a".into()),
                max_id: Some("b".into()),
                ..Default::default()
            },
            ..Default::default()
        };

        let key = get_refresh_key::<MailboxItem>(&[], &initial);

        assert!(key.filter.is_unbounded());
        assert_eq!(key.filter.min_id, None);
        assert_eq!(key.filter.max_id, None);
        assert_eq!(key.filter.label_id, "6");
        assert_eq!(key.size, initial.size);
    }

    #[test]
    fn lowest_and_highest_ignore_fetch_order() {
        // Two descending pages appended in load order.
        let shuffled = vec![
            item("3", 3000, 3000),
            item("2", 2000, 2000),
            item("5", 5000, 5000),
            item("4", 4000, 4000),
            item("1", 1000, 1000),
        ];
        let key = get_refresh_key(&shuffled, &PageKey::default().with_size(2));
        assert_eq!(key.filter.min_time, 1000);
        assert_eq!(key.filter.max_time, 5000);
        assert_eq!(key.size, 5);
    }

    #[test]
    fn order_breaks_ties_at_equal_time() {
        let items = vec![item("a", 1000, 7), item("b", 1000, 3), item("c", 1000, 5)];
        let key = get_refresh_key(&items, &PageKey::default());
        assert_eq!(key.filter.min_order, 3);
        assert_eq!(key.filter.max_order, 7);
    }
}
