//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`, and body DTOs `Validate`.

use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use lingo_core::{InvitationReply, NotificationId};

/// Maximum number of ids accepted by a single mark-read call
pub const MAX_MARK_READ_IDS: usize = 100;

// ============================================================================
// Invitation Requests
// ============================================================================

/// Accept or decline an invitation
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RespondInvitationRequest {
    #[validate(length(min = 1, max = 128, message = "Token must be 1-128 characters"))]
    pub token: String,

    /// `accept` or `decline`
    #[validate(length(min = 1, message = "Response is required"))]
    pub response: String,
}

impl RespondInvitationRequest {
    /// Parse the response field
    pub fn reply(&self) -> Result<InvitationReply, lingo_core::DomainError> {
        self.response.parse()
    }
}

// ============================================================================
// Notification Requests
// ============================================================================

/// Poke a friend
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PokeRequest {
    /// Receiver's handle
    #[validate(length(min = 1, max = 64, message = "Receiver must be 1-64 characters"))]
    pub receiver: String,
}

/// Mark a batch of notifications as read
///
/// Ids are kept as raw JSON values; malformed entries are dropped by
/// [`MarkReadRequest::notification_ids`] instead of failing the whole batch.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MarkReadRequest {
    #[validate(length(min = 1, max = 100, message = "Between 1 and 100 ids are required"))]
    pub ids: Vec<Value>,
}

impl MarkReadRequest {
    /// Well-formed positive ids in request order, duplicates removed
    pub fn notification_ids(&self) -> Vec<NotificationId> {
        let mut ids: Vec<NotificationId> = Vec::with_capacity(self.ids.len());
        for id in self.ids.iter().filter_map(parse_notification_id) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }
}

fn parse_notification_id(value: &Value) -> Option<NotificationId> {
    match value {
        Value::Number(n) => n.as_i64().map(NotificationId::new).filter(NotificationId::is_valid),
        Value::String(s) => NotificationId::parse(s).ok(),
        _ => None,
    }
}

/// Query parameters for read history
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ReadHistoryQuery {
    pub limit: Option<i64>,
}
