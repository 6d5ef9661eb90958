//! # lingo-core
//!
//! Domain layer of the friend relationship and notification subsystem:
//! entities, id value objects, repository traits and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    escape_html, generate_invitation_token, is_well_formed_token, ActivityStats, FriendPair,
    FriendWithStats, Friendship, Invitation, InvitationReply, NewNotification, Notification, User,
    INVITATION_TOKEN_BYTES,
};
pub use error::{DomainError, ErrorKind};
pub use traits::{
    ActivityStatsRepository, FriendshipRepository, IdentityResolver, InvitationRepository,
    NotificationRepository, RepoResult, UserRepository,
};
pub use value_objects::{IdParseError, NotificationId, UserId};
