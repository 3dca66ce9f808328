use std::io::{self, BufWriter, Write};
use std::path::Path;

use mail_pagination::{
    get_adjacent_page_keys, get_refresh_key, InMemorySource, MailHttpClient, MailboxItem,
    MailboxPager, MailboxQuery, OrderDirection, PageFilter, PageItemType, PageKey, PageSource,
    PaginationError, PagingConfig,
};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::cli::{AdjacentArgs, QueryArgs, RefreshArgs, WalkArgs};
use crate::error::AppError;
use crate::output;

fn check_page_size(page_size: usize) -> Result<(), AppError> {
    if page_size == 0 {
        let err = PaginationError::Validation("page size must be positive".to_string());
        return Err(err.into());
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

pub fn run_adjacent(args: &AdjacentArgs) -> Result<(), AppError> {
    let items: Vec<MailboxItem> = read_json(&args.items)?;
    let key: PageKey = read_json(&args.key)?;
    check_page_size(args.page_size)?;

    let keys = get_adjacent_page_keys(&items, &key, args.page_size);
    output::write_json(&keys, &mut io::stdout().lock())
}

pub fn run_refresh(args: &RefreshArgs) -> Result<(), AppError> {
    let items: Vec<MailboxItem> = read_json(&args.items)?;
    let key: PageKey = read_json(&args.key)?;

    let refresh = get_refresh_key(&items, &key);
    output::write_json(&refresh, &mut io::stdout().lock())
}

pub fn run_query(args: &QueryArgs, config: &PagingConfig) -> Result<(), AppError> {
    let key: PageKey = read_json(&args.key)?;
    let query = MailboxQuery::from_page_key(&key, config.max_page_size)?;

    let mut out = io::stdout().lock();
    for (name, value) in query.to_query_pairs() {
        writeln!(out, "{name}={value}")?;
    }
    Ok(())
}

/// Walk a fixture file, or the remote API when no fixture is given.
pub async fn run_walk(
    args: &WalkArgs,
    config: PagingConfig,
    cancel: CancellationToken,
) -> Result<(), AppError> {
    let item_type = if args.conversations {
        PageItemType::Conversation
    } else {
        PageItemType::Message
    };
    let page_size = args.page_size.unwrap_or(config.default_page_size);
    check_page_size(page_size)?;
    let initial = initial_key(args, page_size);

    match &args.items {
        Some(path) => {
            let items: Vec<MailboxItem> = read_json(path)?;
            info!(items = items.len(), path = %path.display(), "walking fixture");
            let pager = MailboxPager::new(InMemorySource::new(items), item_type, page_size);
            walk_and_print(pager, &initial, args.json, &cancel).await
        }
        None => {
            if config.access_token.is_none() {
                return Err(AppError::MissingEnv("MAIL_ACCESS_TOKEN"));
            }
            info!(base_url = %config.base_url, "walking remote mailbox");
            let client = MailHttpClient::new(&config)?;
            let pager = MailboxPager::new(client, item_type, page_size);
            walk_and_print(pager, &initial, args.json, &cancel).await
        }
    }
}

fn initial_key(args: &WalkArgs, page_size: usize) -> PageKey {
    PageKey {
        order_direction: if args.ascending {
            OrderDirection::Ascending
        } else {
            OrderDirection::Descending
        },
        size: page_size,
        filter: PageFilter {
            label_id: args.label.clone(),
            ..Default::default()
        },
        ..Default::default()
    }
}

async fn walk_and_print<S: PageSource>(
    mut pager: MailboxPager<S>,
    initial: &PageKey,
    json: bool,
    cancel: &CancellationToken,
) -> Result<(), AppError> {
    let pages = pager.walk(initial, cancel).await?;

    let mut out = BufWriter::new(io::stdout().lock());
    let mut buf = String::with_capacity(256);
    let mut count = 0usize;
    for item in pages.iter().flat_map(|p| p.items.iter()) {
        output::write_item(item, json, &mut buf, &mut out)?;
        count += 1;
    }
    out.flush()?;

    info!(pages = pages.len(), items = count, "walk finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_key_follows_flags() {
        let args = WalkArgs {
            items: None,
            page_size: Some(10),
            ascending: true,
            label: "5".into(),
            conversations: false,
            json: false,
        };
        let key = initial_key(&args, 10);
        assert_eq!(key.order_direction, OrderDirection::Ascending);
        assert_eq!(key.size, 10);
        assert_eq!(key.filter.label_id, "5");
        assert!(key.filter.is_unbounded());
    }

    #[tokio::test]
    async fn remote_walk_needs_token() {
        let args = WalkArgs {
            items: None,
            page_size: None,
            ascending: false,
            label: "0".into(),
            conversations: false,
            json: false,
        };
        let result = run_walk(&args, PagingConfig::default(), CancellationToken::new()).await;
        assert!(matches!(result, Err(AppError::MissingEnv("MAIL_ACCESS_TOKEN"))));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(matches!(
            check_page_size(0),
            Err(AppError::Pagination(PaginationError::Validation(_)))
        ));
        assert!(check_page_size(1).is_ok());
    }
}
