//! Friendship database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// One directed row of the friendships table
#[derive(Debug, Clone, FromRow)]
pub struct FriendshipModel {
    pub user_id: i64,
    pub friend_id: i64,
    pub created_at: DateTime<Utc>,
}
