//! PostgreSQL implementation of UserRepository and IdentityResolver

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use lingo_core::entities::User;
use lingo_core::traits::{IdentityResolver, RepoResult, UserRepository};
use lingo_core::value_objects::UserId;

use crate::models::UserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository.
///
/// The users table is owned by the wider application; this repository only
/// reads from it.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, handle, display_name, profile_image, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }
}

#[async_trait]
impl IdentityResolver for PgUserRepository {
    #[instrument(skip(self))]
    async fn resolve(&self, handle: &str) -> RepoResult<Option<UserId>> {
        let id: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT id FROM users WHERE handle = $1
            "#,
        )
        .bind(handle)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(id.map(UserId::new))
    }
}
