use tracing::debug;

use crate::error::Result;
use crate::rest::MailHttpClient;
use crate::types::*;

impl MailHttpClient {
    // --- Messages ---

    /// GET /mail/v4/messages - One page of messages selected by `key`.
    pub async fn get_messages(&self, key: &PageKey) -> Result<Vec<MailboxItem>> {
        let query = MailboxQuery::from_page_key(key, self.max_page_size())?.to_query_pairs();
        let resp: MessagesResponse = self.get("/mail/v4/messages", &query).await?;
        debug!(
            fetched = resp.messages.len(),
            total = resp.total,
            "fetched messages"
        );
        Ok(resp.messages.into_iter().map(MailboxItem::from).collect())
    }

    // --- Conversations ---

    /// GET /mail/v4/conversations - One page of conversations selected by `key`.
    pub async fn get_conversations(&self, key: &PageKey) -> Result<Vec<MailboxItem>> {
        let query = MailboxQuery::from_page_key(key, self.max_page_size())?.to_query_pairs();
        let resp: ConversationsResponse = self.get("/mail/v4/conversations", &query).await?;
        debug!(
            fetched = resp.conversations.len(),
            total = resp.total,
            "fetched conversations"
        );
        Ok(resp
            .conversations
            .into_iter()
            .map(MailboxItem::from)
            .collect())
    }

    /// Fetch one page of `item_type` rows.
    pub async fn get_items(&self, item_type: PageItemType, key: &PageKey) -> Result<Vec<MailboxItem>> {
        match item_type {
            PageItemType::Message => self.get_messages(key).await,
            PageItemType::Conversation => self.get_conversations(key).await,
        }
    }
}
