//! Synthetic microbenchmark: adjacent + refresh key computation
//! Replays a 25-item page 1M times

use std::time::Instant;

use mail_pagination::{
    get_adjacent_page_keys, get_refresh_key, MailboxItem, PageItemType, PageKey,
};

const ITERATIONS: u64 = 1_000_000;
const PAGE_SIZE: usize = 25;

fn sample_page() -> Vec<MailboxItem> {
    (0..PAGE_SIZE as i64)
        .rev()
        .map(|i| MailboxItem {
            item_type: PageItemType::Message,
            id: format!("msg-{i:04}"),
            conversation_id: None,
            time: 1_700_000_000 + (i / 3) * 60,
            order: 1_700_000_000 + i,
            size: 2048,
            read: i % 2 == 0,
            label_ids: vec!["0".into()],
            keywords: String::new(),
            subject: String::new(),
        })
        .collect()
}

fn main() {
    let items = sample_page();
    let key = PageKey::default();

    // Warm up
    for _ in 0..10_000 {
        let keys = get_adjacent_page_keys(&items, &key, PAGE_SIZE);
        std::hint::black_box(keys);
    }

    let t0 = Instant::now();

    let mut sum: i64 = 0;
    for _ in 0..ITERATIONS {
        let keys = get_adjacent_page_keys(&items, &key, PAGE_SIZE);
        let refresh = get_refresh_key(&items, &keys.current);
        sum = sum.wrapping_add(keys.next.filter.max_order ^ refresh.filter.min_time);
    }

    // Prevent DCE
    std::hint::black_box(sum);

    let elapsed = t0.elapsed();
    let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
    let per_iter_ns = elapsed.as_nanos() as f64 / ITERATIONS as f64;
    let throughput = ITERATIONS as f64 / elapsed.as_secs_f64();

    println!("Page key benchmark ({PAGE_SIZE} items per page)");
    println!("  Iterations: {}", format_with_commas(ITERATIONS));
    println!("  Total time: {:.1} ms", elapsed_ms);
    println!("  Per iteration: {:.0} ns", per_iter_ns);
    println!("  Throughput: {} ops/sec", format_with_commas(throughput as u64));
}

fn format_with_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
