//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub handle: String,
    pub display_name: String,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}
