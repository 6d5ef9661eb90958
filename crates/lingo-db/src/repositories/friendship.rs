//! PostgreSQL implementation of FriendshipRepository
//!
//! An undirected friendship is stored as two directed rows. Both rows are
//! written and removed together; a deferred constraint trigger rejects any
//! commit that would leave one without its mirror.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgConnection, PgPool};
use tracing::{instrument, warn};

use lingo_core::entities::{FriendPair, Friendship};
use lingo_core::error::DomainError;
use lingo_core::traits::{FriendshipRepository, RepoResult};
use lingo_core::value_objects::UserId;

use crate::models::FriendshipModel;

use super::error::{friendship_not_found, map_check_violation, map_db_error, map_unique_violation};

/// Duplicate rows mean the pair already exists; the self check mirrors `FriendPair::new`
fn map_pair_insert_error(e: sqlx::Error) -> DomainError {
    if e.as_database_error().is_some_and(|db| db.is_check_violation()) {
        return map_check_violation(e, || DomainError::SelfFriendship);
    }
    map_unique_violation(e, || DomainError::AlreadyFriends)
}

/// PostgreSQL implementation of FriendshipRepository
#[derive(Clone)]
pub struct PgFriendshipRepository {
    pool: PgPool,
}

impl PgFriendshipRepository {
    /// Create a new PgFriendshipRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Transaction-scoped lock serializing every pair change that involves `user_id`
async fn lock_user(conn: &mut PgConnection, user_id: UserId) -> RepoResult<()> {
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(user_id.into_inner())
        .execute(conn)
        .await
        .map_err(map_db_error)?;
    Ok(())
}

async fn count_rows(conn: &mut PgConnection, user_id: UserId) -> RepoResult<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM friendships WHERE user_id = $1")
        .bind(user_id.into_inner())
        .fetch_one(conn)
        .await
        .map_err(map_db_error)
}

async fn count_pair_rows(conn: &mut PgConnection, pair: FriendPair) -> RepoResult<i64> {
    sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM friendships
        WHERE (user_id = $1 AND friend_id = $2)
           OR (user_id = $2 AND friend_id = $1)
        "#,
    )
    .bind(pair.low().into_inner())
    .bind(pair.high().into_inner())
    .fetch_one(conn)
    .await
    .map_err(map_db_error)
}

#[async_trait]
impl FriendshipRepository for PgFriendshipRepository {
    #[instrument(skip(self))]
    async fn count_friends(&self, user_id: UserId) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM friendships WHERE user_id = $1
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn are_friends(&self, a: UserId, b: UserId) -> RepoResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM friendships
                WHERE (user_id = $1 AND friend_id = $2)
                   OR (user_id = $2 AND friend_id = $1)
            )
            "#,
        )
        .bind(a.into_inner())
        .bind(b.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Friendship>> {
        let results = sqlx::query_as::<_, FriendshipModel>(
            r#"
            SELECT user_id, friend_id, created_at
            FROM friendships
            WHERE user_id = $1
            ORDER BY created_at ASC, friend_id ASC
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Friendship::from).collect())
    }

    #[instrument(skip(self), fields(low = %pair.low(), high = %pair.high()))]
    async fn create_pair(&self, pair: FriendPair, limit: u32) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lower id first so overlapping pairs always lock in the same order.
        lock_user(&mut *tx, pair.low()).await?;
        lock_user(&mut *tx, pair.high()).await?;

        if count_pair_rows(&mut *tx, pair).await? > 0 {
            return Err(DomainError::AlreadyFriends);
        }

        for user_id in [pair.low(), pair.high()] {
            if count_rows(&mut *tx, user_id).await? >= i64::from(limit) {
                return Err(DomainError::FriendLimitReached { user_id, limit });
            }
        }

        sqlx::query(
            r#"
            INSERT INTO friendships (user_id, friend_id, created_at)
            VALUES ($1, $2, $3), ($2, $1, $3)
            "#,
        )
        .bind(pair.low().into_inner())
        .bind(pair.high().into_inner())
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(map_pair_insert_error)?;

        let written = count_pair_rows(&mut *tx, pair).await?;
        if written != 2 {
            warn!(written, "Friend pair insert left an unexpected row count, rolling back");
            return Err(DomainError::InternalError(format!(
                "expected 2 friendship rows, found {written}"
            )));
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_pair(&self, user_id: UserId, friend_id: UserId) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM friendships
            WHERE (user_id = $1 AND friend_id = $2)
               OR (user_id = $2 AND friend_id = $1)
            "#,
        )
        .bind(user_id.into_inner())
        .bind(friend_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(friendship_not_found(user_id, friend_id));
        }

        Ok(result.rows_affected())
    }
}
