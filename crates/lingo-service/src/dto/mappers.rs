//! Entity to DTO mappers

use lingo_core::entities::{FriendWithStats, Invitation, Notification, User};

use super::responses::{
    FriendResponse, InvitationPreviewResponse, InviterSummary, NotificationResponse,
};

impl From<&User> for InviterSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            handle: user.handle.clone(),
            display_name: user.name().to_string(),
            profile_image: user.profile_image.clone(),
        }
    }
}

impl InvitationPreviewResponse {
    pub fn new(invitation: Invitation, inviter: &User) -> Self {
        Self {
            token: invitation.token,
            inviter: InviterSummary::from(inviter),
            created_at: invitation.created_at,
            expires_at: invitation.expires_at,
        }
    }
}

impl From<FriendWithStats> for FriendResponse {
    fn from(entry: FriendWithStats) -> Self {
        let display_name = entry.friend.name().to_string();
        Self {
            id: entry.friend.id,
            handle: entry.friend.handle,
            display_name,
            profile_image: entry.friend.profile_image,
            friends_since: entry.since,
            visit_count: entry.stats.visit_count,
            learning_count: entry.stats.learning_count,
        }
    }
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            sender_id: notification.sender_id,
            message: notification.message,
            is_read: notification.is_read,
            created_at: notification.created_at,
        }
    }
}
