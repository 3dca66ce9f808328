use crate::types::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Default base URL of the mail API.
pub const DEFAULT_BASE_URL: &str = "https://mail.proton.me/api";

/// Configuration for the mail list client and pager.
#[derive(Debug, Clone)]
pub struct PagingConfig {
    /// Base URL of the mail API (e.g. `https://mail.proton.me/api`).
    pub base_url: String,
    /// Bearer token sent with every request; requests are anonymous if not set.
    pub access_token: Option<String>,
    /// Page size used for adjacent pages.
    pub default_page_size: usize,
    /// Largest page the list endpoints accept.
    pub max_page_size: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: None,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}
