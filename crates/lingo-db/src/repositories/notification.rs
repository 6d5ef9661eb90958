//! PostgreSQL implementation of NotificationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use lingo_core::entities::{NewNotification, Notification};
use lingo_core::traits::{NotificationRepository, RepoResult};
use lingo_core::value_objects::{NotificationId, UserId};

use crate::mappers::notification_ids_to_i64;
use crate::models::NotificationModel;

use super::error::map_db_error;

/// Upper bound on rows returned by a single read-history query
const MAX_READ_PAGE: i64 = 100;

/// PostgreSQL implementation of NotificationRepository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    /// Create a new PgNotificationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self, notification), fields(user_id = %notification.user_id, sender_id = %notification.sender_id))]
    async fn create(&self, notification: &NewNotification) -> RepoResult<Notification> {
        let model = sqlx::query_as::<_, NotificationModel>(
            r#"
            INSERT INTO notifications (user_id, sender_id, message, is_read, created_at)
            VALUES ($1, $2, $3, FALSE, NOW())
            RETURNING id, user_id, sender_id, message, is_read, created_at
            "#,
        )
        .bind(notification.user_id.into_inner())
        .bind(notification.sender_id.into_inner())
        .bind(&notification.message)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Notification::from(model))
    }

    #[instrument(skip(self))]
    async fn find_unread(&self, user_id: UserId) -> RepoResult<Vec<Notification>> {
        let results = sqlx::query_as::<_, NotificationModel>(
            r#"
            SELECT id, user_id, sender_id, message, is_read, created_at
            FROM notifications
            WHERE user_id = $1 AND is_read = FALSE
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Notification::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_unread(&self, user_id: UserId) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND is_read = FALSE
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn find_read(&self, user_id: UserId, limit: i64) -> RepoResult<Vec<Notification>> {
        let limit = limit.clamp(1, MAX_READ_PAGE);

        let results = sqlx::query_as::<_, NotificationModel>(
            r#"
            SELECT id, user_id, sender_id, message, is_read, created_at
            FROM notifications
            WHERE user_id = $1 AND is_read = TRUE
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Notification::from).collect())
    }

    #[instrument(skip(self, ids), fields(requested = ids.len()))]
    async fn mark_read(&self, user_id: UserId, ids: &[NotificationId]) -> RepoResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        // Ownership is part of the predicate: ids belonging to someone else
        // simply do not match.
        let result = sqlx::query(
            r#"
            UPDATE notifications
            SET is_read = TRUE
            WHERE user_id = $1 AND is_read = FALSE AND id = ANY($2)
            "#,
        )
        .bind(user_id.into_inner())
        .bind(notification_ids_to_i64(ids))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete_read(&self, user_id: UserId) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM notifications WHERE user_id = $1 AND is_read = TRUE
            "#,
        )
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
