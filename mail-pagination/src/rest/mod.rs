pub mod endpoints;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::config::PagingConfig;
use crate::error::{PaginationError, Result};

/// HTTP client wrapper for the mail list API.
#[derive(Debug, Clone)]
pub struct MailHttpClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
    max_page_size: usize,
}

impl MailHttpClient {
    /// Build a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `PaginationError::Url` if `config.base_url` is not a valid URL.
    pub fn new(config: &PagingConfig) -> Result<Self> {
        url::Url::parse(&config.base_url)?;
        Ok(Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
            max_page_size: config.max_page_size,
        })
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url).query(query);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }
        let resp = request.send().await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            warn!(status, path, "mail API request failed");
            return Err(PaginationError::Http {
                status,
                message: body,
            });
        }

        resp.json::<T>().await.map_err(PaginationError::Request)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Largest page size this client will request.
    pub fn max_page_size(&self) -> usize {
        self.max_page_size
    }
}
