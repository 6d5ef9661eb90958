//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ActivityStatsRepository, FriendshipRepository, IdentityResolver, InvitationRepository,
    NotificationRepository, RepoResult, UserRepository,
};
