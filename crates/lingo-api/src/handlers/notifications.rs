//! Notification handlers
//!
//! Pokes, the unread inbox and the read history.

use axum::{extract::State, Json};
use lingo_service::{
    DeleteReadResponse, MarkReadRequest, MarkReadResponse, NotificationResponse,
    NotificationService, PokeRequest, UnreadCountResponse,
};

use crate::extractors::{CurrentUser, ReadLimit, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Poke a friend
///
/// POST /notifications/poke
pub async fn send_poke(
    State(state): State<AppState>,
    caller: CurrentUser,
    ValidatedJson(request): ValidatedJson<PokeRequest>,
) -> ApiResult<Created<Json<NotificationResponse>>> {
    let ctx = state.service_context();
    let receiver_id = ctx.resolve_handle(&request.receiver).await?;

    let notification = NotificationService::new(ctx)
        .send_poke(caller.user_id, receiver_id)
        .await?;
    Ok(Created(Json(notification)))
}

/// GET /notifications/unread
pub async fn get_unread(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> ApiResult<Json<Vec<NotificationResponse>>> {
    let service = NotificationService::new(state.service_context());
    let notifications = service.get_unread(caller.user_id).await?;
    Ok(Json(notifications))
}

/// GET /notifications/unread/count
pub async fn count_unread(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> ApiResult<Json<UnreadCountResponse>> {
    let service = NotificationService::new(state.service_context());
    let count = service.count_unread(caller.user_id).await?;
    Ok(Json(count))
}

/// Mark notifications as read
///
/// POST /notifications/read
pub async fn mark_as_read(
    State(state): State<AppState>,
    caller: CurrentUser,
    ValidatedJson(request): ValidatedJson<MarkReadRequest>,
) -> ApiResult<Json<MarkReadResponse>> {
    let service = NotificationService::new(state.service_context());
    let response = service.mark_as_read(caller.user_id, request).await?;
    Ok(Json(response))
}

/// Read history, newest first
///
/// GET /notifications/read?limit=N
pub async fn get_read(
    State(state): State<AppState>,
    caller: CurrentUser,
    ReadLimit(limit): ReadLimit,
) -> ApiResult<Json<Vec<NotificationResponse>>> {
    let service = NotificationService::new(state.service_context());
    let notifications = service.get_read(caller.user_id, limit).await?;
    Ok(Json(notifications))
}

/// DELETE /notifications/read
pub async fn delete_read(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> ApiResult<Json<DeleteReadResponse>> {
    let service = NotificationService::new(state.service_context());
    let response = service.delete_read(caller.user_id).await?;
    Ok(Json(response))
}
