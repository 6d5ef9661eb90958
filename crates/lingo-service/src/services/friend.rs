//! Friend service
//!
//! Lists friends with their learning activity and removes friendships.

use lingo_core::entities::{ActivityStats, FriendWithStats};
use lingo_core::UserId;
use tracing::{info, instrument, warn};

use crate::dto::FriendResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Friend service
pub struct FriendService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FriendService<'a> {
    /// Create a new FriendService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the user's friends, oldest friendship first
    #[instrument(skip(self))]
    pub async fn get_friends(&self, user_id: UserId) -> ServiceResult<Vec<FriendResponse>> {
        let rows = self.ctx.friendship_repo().find_by_user(user_id).await?;

        let mut friends = Vec::with_capacity(rows.len());
        for row in rows {
            let Some(friend) = self.ctx.user_repo().find_by_id(row.friend_id).await? else {
                warn!(friend_id = %row.friend_id, "Friendship row points at a missing user");
                continue;
            };

            let stats = self.activity_stats(row.friend_id).await?;
            friends.push(FriendResponse::from(FriendWithStats {
                friend,
                since: row.created_at,
                stats,
            }));
        }

        Ok(friends)
    }

    /// Remove the friendship between `user_id` and `friend_id` in both directions
    #[instrument(skip(self))]
    pub async fn remove_friend(&self, user_id: UserId, friend_id: UserId) -> ServiceResult<()> {
        let deleted = self
            .ctx
            .friendship_repo()
            .delete_pair(user_id, friend_id)
            .await?;

        info!(user_id = %user_id, friend_id = %friend_id, rows = deleted, "Friendship removed");

        Ok(())
    }

    async fn activity_stats(&self, user_id: UserId) -> ServiceResult<ActivityStats> {
        let activity = self.ctx.activity_repo();
        Ok(ActivityStats {
            visit_count: activity.latest_visit_count(user_id).await?,
            learning_count: activity.learning_record_count(user_id).await?,
        })
    }
}
