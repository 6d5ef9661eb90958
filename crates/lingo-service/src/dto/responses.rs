//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use lingo_core::{NotificationId, UserId};

// ============================================================================
// Invitation Responses
// ============================================================================

/// Freshly issued invitation
#[derive(Debug, Clone, Serialize)]
pub struct InvitationCreatedResponse {
    pub invite_link: String,
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Public profile of the user who issued an invitation
#[derive(Debug, Clone, Serialize)]
pub struct InviterSummary {
    pub id: UserId,
    pub handle: String,
    pub display_name: String,
    pub profile_image: Option<String>,
}

/// What an invitee sees before responding
#[derive(Debug, Clone, Serialize)]
pub struct InvitationPreviewResponse {
    pub token: String,
    pub inviter: InviterSummary,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Friend Responses
// ============================================================================

/// A friend's profile with learning activity
#[derive(Debug, Clone, Serialize)]
pub struct FriendResponse {
    pub id: UserId,
    pub handle: String,
    pub display_name: String,
    pub profile_image: Option<String>,
    pub friends_since: DateTime<Utc>,
    pub visit_count: i64,
    pub learning_count: i64,
}

// ============================================================================
// Notification Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: NotificationId,
    pub sender_id: UserId,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct UnreadCountResponse {
    pub count: i64,
}

/// Rows actually transitioned to read
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MarkReadResponse {
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteReadResponse {
    pub message: String,
    pub deleted: u64,
}

impl DeleteReadResponse {
    pub fn new(deleted: u64) -> Self {
        let message = if deleted == 0 {
            "No read notifications to delete".to_string()
        } else {
            format!("Deleted {deleted} read notifications")
        };
        Self { message, deleted }
    }
}

// ============================================================================
// Health Check Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
