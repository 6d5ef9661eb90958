//! User entity - the identity layer owns users; this subsystem only reads them

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// Read-only view of a user account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    /// Stable public handle used by clients to address the user
    pub handle: String,
    pub display_name: String,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user with required fields
    pub fn new(id: UserId, handle: String, display_name: String) -> Self {
        Self {
            id,
            handle,
            display_name,
            profile_image: None,
            created_at: Utc::now(),
        }
    }

    /// Name shown to other users, falling back to the handle when no display name is set
    pub fn name(&self) -> &str {
        let trimmed = self.display_name.trim();
        if trimmed.is_empty() {
            &self.handle
        } else {
            trimmed
        }
    }
}
