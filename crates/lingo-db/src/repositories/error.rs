//! Error handling utilities for repositories

use lingo_core::error::DomainError;
use lingo_core::value_objects::UserId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Map a check-constraint failure (self friendship) or fall back
pub fn map_check_violation<F>(e: SqlxError, on_check: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_check_violation() {
            return on_check();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "friendship not found" error
pub fn friendship_not_found(user_id: UserId, friend_id: UserId) -> DomainError {
    DomainError::FriendshipNotFound { user_id, friend_id }
}
