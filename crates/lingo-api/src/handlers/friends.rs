//! Friend handlers

use axum::{
    extract::{Path, State},
    Json,
};
use lingo_service::{FriendResponse, FriendService};

use crate::extractors::CurrentUser;
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// List the caller's friends with their learning stats
///
/// GET /friends
pub async fn get_friends(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> ApiResult<Json<Vec<FriendResponse>>> {
    let service = FriendService::new(state.service_context());
    let friends = service.get_friends(caller.user_id).await?;
    Ok(Json(friends))
}

/// Remove a friendship in both directions
///
/// DELETE /friends/{friend_handle}
pub async fn remove_friend(
    State(state): State<AppState>,
    caller: CurrentUser,
    Path(friend_handle): Path<String>,
) -> ApiResult<NoContent> {
    let ctx = state.service_context();
    let friend_id = ctx.resolve_handle(&friend_handle).await?;

    FriendService::new(ctx)
        .remove_friend(caller.user_id, friend_id)
        .await?;
    Ok(NoContent)
}
