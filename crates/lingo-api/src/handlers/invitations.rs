//! Invitation handlers
//!
//! Endpoints for issuing, previewing and answering friend invitation links.

use axum::{
    extract::{Path, State},
    Json,
};
use lingo_service::{
    InvitationCreatedResponse, InvitationPreviewResponse, InvitationService,
    RespondInvitationRequest,
};

use crate::extractors::{CurrentUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create an invitation link for the caller
///
/// POST /invitations
pub async fn create_invitation(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> ApiResult<Created<Json<InvitationCreatedResponse>>> {
    let service = InvitationService::new(state.service_context());
    let response = service.create_invitation(caller.user_id).await?;
    Ok(Created(Json(response)))
}

/// Show who issued an invitation
///
/// GET /invitations/{token}
pub async fn preview_invitation(
    State(state): State<AppState>,
    _caller: CurrentUser,
    Path(token): Path<String>,
) -> ApiResult<Json<InvitationPreviewResponse>> {
    let service = InvitationService::new(state.service_context());
    let preview = service.preview_invitation(&token).await?;
    Ok(Json(preview))
}

/// Accept or decline an invitation
///
/// POST /invitations/respond
pub async fn respond_to_invitation(
    State(state): State<AppState>,
    caller: CurrentUser,
    ValidatedJson(request): ValidatedJson<RespondInvitationRequest>,
) -> ApiResult<NoContent> {
    let service = InvitationService::new(state.service_context());
    service.respond_to_invitation(caller.user_id, request).await?;
    Ok(NoContent)
}
