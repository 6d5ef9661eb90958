//! PostgreSQL implementation of ActivityStatsRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use lingo_core::traits::{ActivityStatsRepository, RepoResult};
use lingo_core::value_objects::UserId;

use super::error::map_db_error;

/// Reads visit and learning-record tables maintained elsewhere in the application
#[derive(Clone)]
pub struct PgActivityStatsRepository {
    pool: PgPool,
}

impl PgActivityStatsRepository {
    /// Create a new PgActivityStatsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityStatsRepository for PgActivityStatsRepository {
    #[instrument(skip(self))]
    async fn latest_visit_count(&self, user_id: UserId) -> RepoResult<i64> {
        let count: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT visit_count
            FROM user_visits
            WHERE user_id = $1
            ORDER BY recorded_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count.unwrap_or(0))
    }

    #[instrument(skip(self))]
    async fn learning_record_count(&self, user_id: UserId) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM learning_records WHERE user_id = $1
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
