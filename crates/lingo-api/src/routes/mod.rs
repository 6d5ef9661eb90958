//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{friends, health, invitations, notifications};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(friend_routes())
        .merge(invitation_routes())
        .merge(notification_routes())
}

/// Friend routes; every path segment after /friends is a handle
fn friend_routes() -> Router<AppState> {
    Router::new()
        .route("/friends", get(friends::get_friends))
        .route("/friends/:friend_handle", delete(friends::remove_friend))
}

/// Invitation routes
fn invitation_routes() -> Router<AppState> {
    Router::new()
        .route("/invitations", post(invitations::create_invitation))
        .route(
            "/invitations/respond",
            post(invitations::respond_to_invitation),
        )
        .route("/invitations/:token", get(invitations::preview_invitation))
}

/// Notification routes
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications/poke", post(notifications::send_poke))
        .route("/notifications/unread", get(notifications::get_unread))
        .route("/notifications/unread/count", get(notifications::count_unread))
        .route(
            "/notifications/read",
            get(notifications::get_read)
                .post(notifications::mark_as_read)
                .delete(notifications::delete_read),
        )
}
