//! Invitation entity <-> model mapper

use lingo_core::entities::Invitation;
use lingo_core::value_objects::UserId;

use crate::models::InvitationModel;

impl From<InvitationModel> for Invitation {
    fn from(model: InvitationModel) -> Self {
        Invitation {
            token: model.token,
            inviter_id: UserId::new(model.inviter_id),
            created_at: model.created_at,
            expires_at: model.expires_at,
        }
    }
}
