//! Domain entities - core business objects

mod friendship;
mod invitation;
mod notification;
mod user;

pub use friendship::{ActivityStats, FriendPair, FriendWithStats, Friendship};
pub use invitation::{
    generate_invitation_token, is_well_formed_token, Invitation, InvitationReply,
    INVITATION_TOKEN_BYTES,
};
pub use notification::{escape_html, NewNotification, Notification};
pub use user::User;
