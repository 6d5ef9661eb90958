//! Database models - SQLx-compatible structs for PostgreSQL tables

mod friendship;
mod invitation;
mod notification;
mod user;

pub use friendship::FriendshipModel;
pub use invitation::InvitationModel;
pub use notification::NotificationModel;
pub use user::UserModel;
