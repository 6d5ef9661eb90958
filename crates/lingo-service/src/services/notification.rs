//! Notification service
//!
//! Pokes between friends and the unread → read → deleted lifecycle. Every
//! transition is scoped to the owning user.

use lingo_core::entities::NewNotification;
use lingo_core::{DomainError, UserId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    DeleteReadResponse, MarkReadRequest, MarkReadResponse, NotificationResponse,
    UnreadCountResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Read history page size when the caller does not ask for one
pub const DEFAULT_READ_LIMIT: i64 = 50;
/// Largest read history page
pub const MAX_READ_LIMIT: i64 = 100;

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Poke a friend
    #[instrument(skip(self))]
    pub async fn send_poke(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
    ) -> ServiceResult<NotificationResponse> {
        if sender_id == receiver_id {
            return Err(ServiceError::validation("cannot poke yourself"));
        }

        if !self
            .ctx
            .friendship_repo()
            .are_friends(sender_id, receiver_id)
            .await?
        {
            return Err(DomainError::NotFriends(sender_id, receiver_id).into());
        }

        let sender = self
            .ctx
            .user_repo()
            .find_by_id(sender_id)
            .await?
            .ok_or(DomainError::UserNotFound(sender_id))?;

        let notification = self
            .ctx
            .notification_repo()
            .create(&NewNotification::poke(sender_id, sender.name(), receiver_id))
            .await?;

        info!(
            notification_id = %notification.id,
            sender_id = %sender_id,
            receiver_id = %receiver_id,
            "Poke sent"
        );

        Ok(NotificationResponse::from(notification))
    }

    /// Unread notifications, newest first; does not mark anything read
    #[instrument(skip(self))]
    pub async fn get_unread(&self, user_id: UserId) -> ServiceResult<Vec<NotificationResponse>> {
        let notifications = self.ctx.notification_repo().find_unread(user_id).await?;
        Ok(notifications.into_iter().map(NotificationResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn count_unread(&self, user_id: UserId) -> ServiceResult<UnreadCountResponse> {
        let count = self.ctx.notification_repo().count_unread(user_id).await?;
        Ok(UnreadCountResponse { count })
    }

    /// Mark the caller's unread notifications as read
    ///
    /// Unknown, foreign and already-read ids are skipped; the returned count is
    /// the number of rows actually transitioned.
    #[instrument(skip(self, request), fields(requested = request.ids.len()))]
    pub async fn mark_as_read(
        &self,
        user_id: UserId,
        request: MarkReadRequest,
    ) -> ServiceResult<MarkReadResponse> {
        request.validate()?;

        let ids = request.notification_ids();
        if ids.is_empty() {
            return Err(ServiceError::validation("no valid notification ids"));
        }

        let count = self.ctx.notification_repo().mark_read(user_id, &ids).await?;

        info!(user_id = %user_id, count, "Notifications marked as read");

        Ok(MarkReadResponse { count })
    }

    /// Read history, newest first
    #[instrument(skip(self))]
    pub async fn get_read(
        &self,
        user_id: UserId,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<NotificationResponse>> {
        let limit = limit.unwrap_or(DEFAULT_READ_LIMIT).clamp(1, MAX_READ_LIMIT);
        let notifications = self.ctx.notification_repo().find_read(user_id, limit).await?;
        Ok(notifications.into_iter().map(NotificationResponse::from).collect())
    }

    /// Purge the caller's read notifications; nothing to delete is not an error
    #[instrument(skip(self))]
    pub async fn delete_read(&self, user_id: UserId) -> ServiceResult<DeleteReadResponse> {
        let deleted = self.ctx.notification_repo().delete_read(user_id).await?;

        info!(user_id = %user_id, deleted, "Read notifications deleted");

        Ok(DeleteReadResponse::new(deleted))
    }
}
