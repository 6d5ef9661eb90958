//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{FriendPair, Friendship, Invitation, NewNotification, Notification, User};
use crate::error::DomainError;
use crate::value_objects::{NotificationId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Identity
// ============================================================================

/// Maps caller-supplied handles to internal user ids.
///
/// Owned by the identity layer; every entry point resolves handles through it
/// before touching friendships or notifications.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve a handle, `None` if no such user exists
    async fn resolve(&self, handle: &str) -> RepoResult<Option<UserId>>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;
}

// ============================================================================
// Invitation Repository
// ============================================================================

#[async_trait]
pub trait InvitationRepository: Send + Sync {
    /// Find invitation by token (expired invitations are still returned)
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<Invitation>>;

    /// Persist a new invitation
    async fn create(&self, invitation: &Invitation) -> RepoResult<()>;
}

// ============================================================================
// Friendship Repository
// ============================================================================

#[async_trait]
pub trait FriendshipRepository: Send + Sync {
    /// Count rows where `user_id` is the owner
    async fn count_friends(&self, user_id: UserId) -> RepoResult<i64>;

    /// Check for a row in either direction
    async fn are_friends(&self, a: UserId, b: UserId) -> RepoResult<bool>;

    /// List a user's outgoing rows, oldest first
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Friendship>>;

    /// Atomically create both directed rows for `pair`.
    ///
    /// Must re-check, under the same isolation as the insert, that neither user
    /// is at `limit` (`FriendLimitReached`) and that no row for the pair exists
    /// (`AlreadyFriends`). On any failure no row for the pair may remain.
    async fn create_pair(&self, pair: FriendPair, limit: u32) -> RepoResult<()>;

    /// Delete both directed rows in one statement.
    ///
    /// Returns `FriendshipNotFound` when nothing was deleted.
    async fn delete_pair(&self, user_id: UserId, friend_id: UserId) -> RepoResult<u64>;
}

// ============================================================================
// Activity Stats Repository
// ============================================================================

/// Read-only access to learning activity recorded by the rest of the application
#[async_trait]
pub trait ActivityStatsRepository: Send + Sync {
    /// Most recently recorded visit count, 0 when none
    async fn latest_visit_count(&self, user_id: UserId) -> RepoResult<i64>;

    /// Number of learning-activity records owned by the user
    async fn learning_record_count(&self, user_id: UserId) -> RepoResult<i64>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Insert an unread notification and return the stored row
    async fn create(&self, notification: &NewNotification) -> RepoResult<Notification>;

    /// Unread notifications owned by the user, newest first
    async fn find_unread(&self, user_id: UserId) -> RepoResult<Vec<Notification>>;

    /// Number of unread notifications owned by the user
    async fn count_unread(&self, user_id: UserId) -> RepoResult<i64>;

    /// Read notifications owned by the user, newest first
    async fn find_read(&self, user_id: UserId, limit: i64) -> RepoResult<Vec<Notification>>;

    /// Mark unread notifications as read.
    ///
    /// Only rows owned by `user_id` and still unread are touched; returns the
    /// number of rows actually updated.
    async fn mark_read(&self, user_id: UserId, ids: &[NotificationId]) -> RepoResult<u64>;

    /// Delete every read notification owned by the user
    async fn delete_read(&self, user_id: UserId) -> RepoResult<u64>;
}
