//! PostgreSQL implementation of InvitationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use lingo_core::entities::Invitation;
use lingo_core::error::DomainError;
use lingo_core::traits::{InvitationRepository, RepoResult};

use crate::models::InvitationModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of InvitationRepository
#[derive(Clone)]
pub struct PgInvitationRepository {
    pool: PgPool,
}

impl PgInvitationRepository {
    /// Create a new PgInvitationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvitationRepository for PgInvitationRepository {
    #[instrument(skip(self, token))]
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<Invitation>> {
        let result = sqlx::query_as::<_, InvitationModel>(
            r#"
            SELECT token, inviter_id, created_at, expires_at
            FROM friend_invitations
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Invitation::from))
    }

    #[instrument(skip(self, invitation), fields(inviter_id = %invitation.inviter_id))]
    async fn create(&self, invitation: &Invitation) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO friend_invitations (token, inviter_id, created_at, expires_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&invitation.token)
        .bind(invitation.inviter_id.into_inner())
        .bind(invitation.created_at)
        .bind(invitation.expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::InternalError("invitation token collision".to_string())
            })
        })?;

        Ok(())
    }
}
