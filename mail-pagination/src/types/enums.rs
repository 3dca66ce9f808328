use serde::{Deserialize, Serialize};

/// Field a mailbox list is sorted by.
///
/// Only time ordering exists today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum OrderBy {
    #[default]
    Time,
}

impl OrderBy {
    /// Value of the `Sort` query parameter.
    pub fn as_sort_param(self) -> &'static str {
        match self {
            OrderBy::Time => "Time",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderDirection {
    Ascending,
    #[default]
    Descending,
}

impl OrderDirection {
    /// Value of the `Desc` query parameter.
    pub fn as_desc_param(self) -> u8 {
        match self {
            OrderDirection::Ascending => 0,
            OrderDirection::Descending => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadStatus {
    #[default]
    All,
    Read,
    Unread,
}

impl ReadStatus {
    /// Value of the `Unread` query parameter; `None` means no filtering.
    pub fn as_unread_param(self) -> Option<u8> {
        match self {
            ReadStatus::All => None,
            ReadStatus::Read => Some(0),
            ReadStatus::Unread => Some(1),
        }
    }

    /// Whether an item with the given read flag passes this filter.
    pub fn matches(self, read: bool) -> bool {
        match self {
            ReadStatus::All => true,
            ReadStatus::Read => read,
            ReadStatus::Unread => !read,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageItemType {
    #[default]
    Message,
    Conversation,
}
