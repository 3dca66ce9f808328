use serde::{Deserialize, Serialize};

use crate::error::{PaginationError, Result};

use super::page::PageKey;

/// Query parameters of the message and conversation list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MailboxQuery {
    pub page: u32,
    pub page_size: usize,
    pub limit: usize,
    #[serde(rename = "LabelID")]
    pub label_id: String,
    pub sort: String,
    pub desc: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    #[serde(rename = "BeginID", skip_serializing_if = "Option::is_none")]
    pub begin_id: Option<String>,
    #[serde(rename = "EndID", skip_serializing_if = "Option::is_none")]
    pub end_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread: Option<u8>,
}

impl MailboxQuery {
    /// Translate a page key into the remote list query.
    ///
    /// Sentinel bounds and a blank keyword are left out of the query.
    ///
    /// # Errors
    ///
    /// Returns `PaginationError::PageSizeExceeded` if `key.size` is above
    /// `max_page_size`, and `PaginationError::Validation` if it is zero.
    pub fn from_page_key(key: &PageKey, max_page_size: usize) -> Result<Self> {
        if key.size == 0 {
            return Err(PaginationError::Validation(
                "page size must be positive".to_string(),
            ));
        }
        if key.size > max_page_size {
            return Err(PaginationError::PageSizeExceeded {
                size: key.size,
                max: max_page_size,
            });
        }

        let filter = &key.filter;
        let keyword = filter.keyword.trim();

        Ok(Self {
            page: 0,
            page_size: key.size,
            limit: key.size,
            label_id: filter.label_id.clone(),
            sort: key.order_by.as_sort_param().to_string(),
            desc: key.order_direction.as_desc_param(),
            begin: (filter.min_time != i64::MIN).then_some(filter.min_time),
            end: (filter.max_time != i64::MAX).then_some(filter.max_time),
            begin_id: filter.min_id.clone(),
            end_id: filter.max_id.clone(),
            keyword: (!keyword.is_empty()).then(|| keyword.to_string()),
            unread: filter.read.as_unread_param(),
        })
    }

    /// Render as `(name, value)` pairs, in the order the API documents them.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("Page", self.page.to_string()),
            ("PageSize", self.page_size.to_string()),
            ("Limit", self.limit.to_string()),
            ("LabelID", self.label_id.clone()),
            ("Sort", self.sort.clone()),
            ("Desc", self.desc.to_string()),
        ];
        if let Some(begin) = self.begin {
            query.push(("Begin", begin.to_string()));
        }
        if let Some(end) = self.end {
            query.push(("End", end.to_string()));
        }
        if let Some(begin_id) = &self.begin_id {
            query.push(("BeginID", begin_id.clone()));
        }
        if let Some(end_id) = &self.end_id {
            query.push(("EndID", end_id.clone()));
        }
        if let Some(keyword) = &self.keyword {
            query.push(("Keyword", keyword.clone()));
        }
        if let Some(unread) = self.unread {
            query.push(("Unread", unread.to_string()));
        }
        query
    }
}
