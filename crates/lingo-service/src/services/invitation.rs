//! Invitation service
//!
//! Issues reusable, expiring invitation links and turns accepted invitations
//! into friendships.

use lingo_core::entities::{FriendPair, Invitation, InvitationReply};
use lingo_core::{generate_invitation_token, is_well_formed_token, DomainError, UserId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{InvitationCreatedResponse, InvitationPreviewResponse, RespondInvitationRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Invitation service
pub struct InvitationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InvitationService<'a> {
    /// Create a new InvitationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Issue a new invitation link for `inviter_id`
    ///
    /// Fails with `FriendLimitReached` before any token is created when the
    /// inviter is already at the limit.
    #[instrument(skip(self))]
    pub async fn create_invitation(
        &self,
        inviter_id: UserId,
    ) -> ServiceResult<InvitationCreatedResponse> {
        self.ensure_below_limit(inviter_id).await?;

        let settings = self.ctx.settings();
        let invitation = Invitation::new(generate_invitation_token(), inviter_id)
            .with_ttl_hours(settings.invite_ttl_hours);

        // Resolve the link first so a misconfigured deployment stores nothing
        let invite_link = settings.invite_link(&invitation.token)?;

        self.ctx.invitation_repo().create(&invitation).await?;

        info!(
            inviter_id = %inviter_id,
            expires_at = ?invitation.expires_at,
            "Invitation created"
        );

        Ok(InvitationCreatedResponse {
            invite_link,
            token: invitation.token,
            expires_at: invitation.expires_at,
        })
    }

    /// Show who issued an invitation without responding to it
    #[instrument(skip(self, token))]
    pub async fn preview_invitation(&self, token: &str) -> ServiceResult<InvitationPreviewResponse> {
        let invitation = self.find_active(token).await?;

        let inviter = self
            .ctx
            .user_repo()
            .find_by_id(invitation.inviter_id)
            .await?
            .ok_or(DomainError::UserNotFound(invitation.inviter_id))?;

        Ok(InvitationPreviewResponse::new(invitation, &inviter))
    }

    /// Accept or decline an invitation on behalf of `invitee_id`
    ///
    /// Declining changes nothing. Accepting creates both friendship rows in one
    /// atomic step; the token stays usable until it expires.
    #[instrument(skip(self, request))]
    pub async fn respond_to_invitation(
        &self,
        invitee_id: UserId,
        request: RespondInvitationRequest,
    ) -> ServiceResult<()> {
        request.validate()?;
        let reply = request.reply()?;

        let invitation = self.find_active(&request.token).await?;
        let inviter_id = invitation.inviter_id;
        let pair = FriendPair::new(inviter_id, invitee_id)?;

        if reply == InvitationReply::Decline {
            info!(inviter_id = %inviter_id, invitee_id = %invitee_id, "Invitation declined");
            return Ok(());
        }

        let friendships = self.ctx.friendship_repo();
        if friendships.are_friends(inviter_id, invitee_id).await? {
            return Err(DomainError::AlreadyFriends.into());
        }

        self.ensure_below_limit(invitee_id).await?;

        friendships
            .create_pair(pair, self.ctx.settings().friend_limit)
            .await?;

        info!(inviter_id = %inviter_id, invitee_id = %invitee_id, "Friendship created");

        Ok(())
    }

    /// Look up a token, treating malformed and expired tokens as absent
    async fn find_active(&self, token: &str) -> ServiceResult<Invitation> {
        if !is_well_formed_token(token) {
            return Err(DomainError::InvitationNotFound.into());
        }

        match self.ctx.invitation_repo().find_by_token(token).await? {
            Some(invitation) if !invitation.is_expired() => Ok(invitation),
            _ => Err(DomainError::InvitationNotFound.into()),
        }
    }

    async fn ensure_below_limit(&self, user_id: UserId) -> ServiceResult<()> {
        let limit = self.ctx.settings().friend_limit;
        let count = self.ctx.friendship_repo().count_friends(user_id).await?;

        if count >= i64::from(limit) {
            return Err(DomainError::FriendLimitReached { user_id, limit }.into());
        }
        Ok(())
    }
}
