use serde::{Deserialize, Serialize};

use super::enums::PageItemType;
use super::item::MailboxItem;

/// Label attached to a listed message or conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LabelRef {
    #[serde(rename = "ID")]
    pub id: String,
}

/// One row of `GET /mail/v4/messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageResource {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "ConversationID")]
    pub conversation_id: String,
    pub time: i64,
    pub order: i64,
    #[serde(default)]
    pub size: i64,
    /// `1` while the message has not been opened.
    #[serde(default)]
    pub unread: u8,
    #[serde(rename = "LabelIDs", default)]
    pub label_ids: Vec<String>,
    #[serde(default)]
    pub subject: String,
}

impl From<MessageResource> for MailboxItem {
    fn from(m: MessageResource) -> Self {
        MailboxItem {
            item_type: PageItemType::Message,
            id: m.id,
            conversation_id: Some(m.conversation_id),
            time: m.time,
            order: m.order,
            size: m.size,
            read: m.unread == 0,
            label_ids: m.label_ids,
            keywords: m.subject.clone(),
            subject: m.subject,
        }
    }
}

/// One row of `GET /mail/v4/conversations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConversationResource {
    #[serde(rename = "ID")]
    pub id: String,
    pub order: i64,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub size: i64,
    /// Number of unread messages in the conversation.
    #[serde(default)]
    pub num_unread: u32,
    /// Context time for the requested label.
    #[serde(default)]
    pub context_time: i64,
    #[serde(default)]
    pub labels: Vec<LabelRef>,
}

impl From<ConversationResource> for MailboxItem {
    fn from(c: ConversationResource) -> Self {
        MailboxItem {
            item_type: PageItemType::Conversation,
            conversation_id: Some(c.id.clone()),
            id: c.id,
            time: c.context_time,
            order: c.order,
            size: c.size,
            read: c.num_unread == 0,
            label_ids: c.labels.into_iter().map(|l| l.id).collect(),
            keywords: c.subject.clone(),
            subject: c.subject,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessagesResponse {
    pub code: u32,
    #[serde(default)]
    pub total: u64,
    pub messages: Vec<MessageResource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConversationsResponse {
    pub code: u32,
    #[serde(default)]
    pub total: u64,
    pub conversations: Vec<ConversationResource>,
    #[serde(default)]
    pub stale: u8,
}
