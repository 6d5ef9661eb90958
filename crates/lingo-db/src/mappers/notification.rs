//! Notification entity <-> model mapper

use lingo_core::entities::Notification;
use lingo_core::value_objects::{NotificationId, UserId};

use crate::models::NotificationModel;

impl From<NotificationModel> for Notification {
    fn from(model: NotificationModel) -> Self {
        Notification {
            id: NotificationId::new(model.id),
            user_id: UserId::new(model.user_id),
            sender_id: UserId::new(model.sender_id),
            message: model.message,
            is_read: model.is_read,
            created_at: model.created_at,
        }
    }
}

/// Raw ids for binding as a `BIGINT[]` parameter
pub fn notification_ids_to_i64(ids: &[NotificationId]) -> Vec<i64> {
    ids.iter().copied().map(NotificationId::into_inner).collect()
}
