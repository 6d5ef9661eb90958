//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in lingo-core.
//! Each repository handles database operations for a specific domain entity.

mod activity;
mod error;
mod friendship;
mod invitation;
mod notification;
mod user;

pub use activity::PgActivityStatsRepository;
pub use friendship::PgFriendshipRepository;
pub use invitation::PgInvitationRepository;
pub use notification::PgNotificationRepository;
pub use user::PgUserRepository;
