//! Service context - dependency container for services
//!
//! Holds all repositories and the immutable friend settings needed by services.

use std::sync::Arc;

use lingo_common::{AppError, Environment, FriendsConfig};
use lingo_core::traits::{
    ActivityStatsRepository, FriendshipRepository, IdentityResolver, InvitationRepository,
    NotificationRepository, UserRepository,
};
use lingo_core::{DomainError, UserId};
use lingo_db::{
    PgActivityStatsRepository, PgFriendshipRepository, PgInvitationRepository,
    PgNotificationRepository, PgPool, PgUserRepository,
};
use tracing::warn;

use super::error::{ServiceError, ServiceResult};

/// Link template used outside production when no base URL is configured
pub const LOCAL_INVITE_BASE_URL: &str = "http://localhost:3000/invite";

/// Friend limit and invitation settings, read once at startup
#[derive(Debug, Clone)]
pub struct FriendSettings {
    /// Maximum simultaneous friendships per user
    pub friend_limit: u32,
    /// Base URL for shareable invite links
    pub invite_base_url: Option<String>,
    /// Invitation lifetime in hours (0 = never expires)
    pub invite_ttl_hours: u32,
    /// Deployment environment, decides whether a missing base URL is fatal
    pub environment: Environment,
}

impl FriendSettings {
    pub fn from_config(config: &FriendsConfig, environment: Environment) -> Self {
        Self {
            friend_limit: config.friend_limit,
            invite_base_url: config.invite_base_url.clone(),
            invite_ttl_hours: config.invite_ttl_hours,
            environment,
        }
    }

    /// Build the shareable link for `token`
    ///
    /// # Errors
    /// Returns `AppError::Config` in production when no base URL is configured
    pub fn invite_link(&self, token: &str) -> Result<String, AppError> {
        match self.invite_base_url.as_deref() {
            Some(base) => Ok(format!("{}/{token}", base.trim_end_matches('/'))),
            None if self.environment.is_production() => Err(AppError::config(
                "INVITE_BASE_URL must be set in production",
            )),
            None => {
                warn!(
                    fallback = LOCAL_INVITE_BASE_URL,
                    "INVITE_BASE_URL not set, using localhost invite links"
                );
                Ok(format!("{LOCAL_INVITE_BASE_URL}/{token}"))
            }
        }
    }
}

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Identity resolution for caller-supplied handles
/// - Repositories for users, invitations, friendships, activity stats and notifications
/// - Friend settings (limit, invite links)
#[derive(Clone)]
pub struct ServiceContext {
    identity: Arc<dyn IdentityResolver>,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    invitation_repo: Arc<dyn InvitationRepository>,
    friendship_repo: Arc<dyn FriendshipRepository>,
    activity_repo: Arc<dyn ActivityStatsRepository>,
    notification_repo: Arc<dyn NotificationRepository>,

    settings: FriendSettings,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        identity: Arc<dyn IdentityResolver>,
        user_repo: Arc<dyn UserRepository>,
        invitation_repo: Arc<dyn InvitationRepository>,
        friendship_repo: Arc<dyn FriendshipRepository>,
        activity_repo: Arc<dyn ActivityStatsRepository>,
        notification_repo: Arc<dyn NotificationRepository>,
        settings: FriendSettings,
    ) -> Self {
        Self {
            identity,
            user_repo,
            invitation_repo,
            friendship_repo,
            activity_repo,
            notification_repo,
            settings,
        }
    }

    /// Wire every port to its PostgreSQL implementation
    pub fn from_pool(pool: &PgPool, settings: FriendSettings) -> Self {
        let users = Arc::new(PgUserRepository::new(pool.clone()));
        Self::new(
            users.clone(),
            users,
            Arc::new(PgInvitationRepository::new(pool.clone())),
            Arc::new(PgFriendshipRepository::new(pool.clone())),
            Arc::new(PgActivityStatsRepository::new(pool.clone())),
            Arc::new(PgNotificationRepository::new(pool.clone())),
            settings,
        )
    }

    // === Repositories ===

    pub fn identity(&self) -> &dyn IdentityResolver {
        self.identity.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the invitation repository
    pub fn invitation_repo(&self) -> &dyn InvitationRepository {
        self.invitation_repo.as_ref()
    }

    /// Get the friendship repository
    pub fn friendship_repo(&self) -> &dyn FriendshipRepository {
        self.friendship_repo.as_ref()
    }

    /// Get the activity stats repository
    pub fn activity_repo(&self) -> &dyn ActivityStatsRepository {
        self.activity_repo.as_ref()
    }

    /// Get the notification repository
    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    // === Settings ===

    pub fn settings(&self) -> &FriendSettings {
        &self.settings
    }

    /// Resolve a caller-supplied handle to an internal user id
    ///
    /// # Errors
    /// `Validation` for a blank handle, `UnknownHandle` when nobody owns it
    pub async fn resolve_handle(&self, handle: &str) -> ServiceResult<UserId> {
        let handle = handle.trim();
        if handle.is_empty() {
            return Err(ServiceError::validation("user handle must not be empty"));
        }

        self.identity
            .resolve(handle)
            .await?
            .ok_or_else(|| DomainError::UnknownHandle(handle.to_string()).into())
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("settings", &self.settings)
            .finish()
    }
}
