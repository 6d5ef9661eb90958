//! Friendship entity <-> model mapper

use lingo_core::entities::Friendship;
use lingo_core::value_objects::UserId;

use crate::models::FriendshipModel;

impl From<FriendshipModel> for Friendship {
    fn from(model: FriendshipModel) -> Self {
        Friendship {
            user_id: UserId::new(model.user_id),
            friend_id: UserId::new(model.friend_id),
            created_at: model.created_at,
        }
    }
}
