//! Notification entity - pokes delivered to a user's inbox

use chrono::{DateTime, Utc};

use crate::value_objects::{NotificationId, UserId};

/// Stored notification owned by `user_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    /// Owner and recipient
    pub user_id: UserId,
    pub sender_id: UserId,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    #[inline]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    /// Still in the inbox: owned by `user_id` and not yet read
    #[inline]
    pub fn is_unread_for(&self, user_id: UserId) -> bool {
        self.is_owned_by(user_id) && !self.is_read
    }
}

/// Notification about to be inserted (id and timestamp assigned by the store)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub user_id: UserId,
    pub sender_id: UserId,
    pub message: String,
}

impl NewNotification {
    /// Build a poke from `sender_name` to `receiver_id`.
    ///
    /// The message may be rendered as rich text by clients, so the name is escaped.
    pub fn poke(sender_id: UserId, sender_name: &str, receiver_id: UserId) -> Self {
        Self {
            user_id: receiver_id,
            sender_id,
            message: format!("{} poked you!", escape_html(sender_name)),
        }
    }
}

/// Escape the five HTML-significant characters
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
