//! User entity <-> model mapper

use lingo_core::entities::User;
use lingo_core::value_objects::UserId;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            handle: model.handle,
            display_name: model.display_name,
            profile_image: model.profile_image,
            created_at: model.created_at,
        }
    }
}
