//! Domain errors - error types for the domain layer

use thiserror::Error;

use super::ErrorKind;
use crate::value_objects::UserId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("No user with handle '{0}'")]
    UnknownHandle(String),

    /// Absent or expired; the token itself is never echoed back
    #[error("Invitation not found")]
    InvitationNotFound,

    #[error("Friendship between {user_id} and {friend_id} not found")]
    FriendshipNotFound { user_id: UserId, friend_id: UserId },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Cannot befriend yourself")]
    SelfFriendship,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Users {0} and {1} are not friends")]
    NotFriends(UserId, UserId),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Already friends")]
    AlreadyFriends,

    #[error("User {user_id} has reached the friend limit of {limit}")]
    FriendLimitReached { user_id: UserId, limit: u32 },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Classify the error for callers and transports
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotFound(_)
            | Self::UnknownHandle(_)
            | Self::InvitationNotFound
            | Self::FriendshipNotFound { .. } => ErrorKind::NotFound,

            Self::ValidationError(_) | Self::SelfFriendship => ErrorKind::BadRequest,

            Self::NotFriends(..) => ErrorKind::Forbidden,

            Self::AlreadyFriends => ErrorKind::AlreadyFriends,
            Self::FriendLimitReached { .. } => ErrorKind::FriendLimitReached,

            Self::DatabaseError(_) | Self::InternalError(_) => ErrorKind::Internal,
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        self.kind().as_str()
    }
}
