pub mod adjacent;
pub mod config;
pub mod error;
pub mod interval;
pub mod pager;
pub mod refresh;
pub mod rest;
pub mod types;

// ---- Top-level re-exports for ergonomic usage ----

// Config + errors
pub use config::PagingConfig;
pub use error::{PaginationError, Result};

// Key calculators
pub use adjacent::get_adjacent_page_keys;
pub use refresh::get_refresh_key;

// Local interval cache
pub use interval::{IntervalScope, PageInterval, PageIntervalStore};

// Pager + sources
pub use pager::{InMemorySource, LoadedPage, MailboxPager, PageSource};

// REST client
pub use rest::MailHttpClient;

// Model
pub use types::{
    AdjacentPageKeys, MailboxItem, MailboxQuery, OrderBy, OrderDirection, PageFilter, PageItem,
    PageItemType, PageKey, ReadStatus, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
