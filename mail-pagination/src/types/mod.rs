pub mod enums;
pub mod item;
pub mod page;
pub mod query;
pub mod response;

pub use enums::{OrderBy, OrderDirection, PageItemType, ReadStatus};
pub use item::{MailboxItem, PageItem};
pub use page::{
    AdjacentPageKeys, PageFilter, PageKey, DEFAULT_PAGE_SIZE, INBOX_LABEL_ID, MAX_PAGE_SIZE,
};
pub use query::MailboxQuery;
pub use response::{
    ConversationResource, ConversationsResponse, LabelRef, MessageResource, MessagesResponse,
};
