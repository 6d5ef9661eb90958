//! Invitation database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for friend_invitations table
#[derive(Debug, Clone, FromRow)]
pub struct InvitationModel {
    pub token: String,
    pub inviter_id: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}
