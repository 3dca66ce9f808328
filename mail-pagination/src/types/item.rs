use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::PageItemType;

/// Anything that can appear in a paginated mailbox list.
///
/// Pagination reads only `id`, `time` and `order`. The remaining accessors
/// feed local filtering and default to "matches nothing special".
pub trait PageItem {
    /// Identifier, unique within the owning collection.
    fn id(&self) -> &str;

    /// Primary ordering value (unix seconds for mail).
    fn time(&self) -> i64;

    /// Secondary ordering value used to break ties between equal `time`s.
    fn order(&self) -> i64;

    fn read(&self) -> bool {
        false
    }

    fn label_ids(&self) -> &[String] {
        &[]
    }

    fn keywords(&self) -> &str {
        ""
    }
}

/// A message or conversation row of a mailbox list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailboxItem {
    #[serde(default)]
    pub item_type: PageItemType,
    pub id: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
    pub time: i64,
    pub order: i64,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub label_ids: Vec<String>,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub subject: String,
}

impl MailboxItem {
    /// `time` as a UTC timestamp, or `None` if it is out of range.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }
}

impl PageItem for MailboxItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn time(&self) -> i64 {
        self.time
    }

    fn order(&self) -> i64 {
        self.order
    }

    fn read(&self) -> bool {
        self.read
    }

    fn label_ids(&self) -> &[String] {
        &self.label_ids
    }

    fn keywords(&self) -> &str {
        &self.keywords
    }
}

impl<T: PageItem + ?Sized> PageItem for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn time(&self) -> i64 {
        (**self).time()
    }

    fn order(&self) -> i64 {
        (**self).order()
    }

    fn read(&self) -> bool {
        (**self).read()
    }

    fn label_ids(&self) -> &[String] {
        (**self).label_ids()
    }

    fn keywords(&self) -> &str {
        (**self).keywords()
    }
}

/// `(time, order)` sort position of an item.
pub(crate) fn position<T: PageItem + ?Sized>(item: &T) -> (i64, i64) {
    (item.time(), item.order())
}
