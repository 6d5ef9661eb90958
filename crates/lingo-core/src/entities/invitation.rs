//! Invitation entity - a shareable friend invite link

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::UserId;

/// Number of random bytes behind a token (256 bits, 64 hex characters)
pub const INVITATION_TOKEN_BYTES: usize = 32;

/// Invitation entity
///
/// A token stays valid until `expires_at` and may be answered by any invitee
/// holding the link. Accepting or declining never consumes it; re-accepting is
/// rejected by the friendship check instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invitation {
    pub token: String,
    pub inviter_id: UserId,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Invitation {
    /// Create a new Invitation that never expires
    pub fn new(token: String, inviter_id: UserId) -> Self {
        Self {
            token,
            inviter_id,
            created_at: Utc::now(),
            expires_at: None,
        }
    }

    /// Set a time-to-live in hours (0 = never expires)
    pub fn with_ttl_hours(mut self, hours: u32) -> Self {
        self.expires_at = if hours > 0 {
            Some(self.created_at + Duration::hours(i64::from(hours)))
        } else {
            None
        };
        self
    }

    /// Check if the invitation has expired at the given instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }

    /// Check if the invitation has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Generate a cryptographically secure, hex-encoded invitation token
pub fn generate_invitation_token() -> String {
    use rand::RngCore;

    let mut bytes = [0u8; INVITATION_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Check that a caller-supplied token has the shape of a generated one
pub fn is_well_formed_token(token: &str) -> bool {
    token.len() == INVITATION_TOKEN_BYTES * 2 && token.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Invitee's answer to an invitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationReply {
    Accept,
    Decline,
}

impl InvitationReply {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Decline => "decline",
        }
    }
}

impl fmt::Display for InvitationReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvitationReply {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accept" => Ok(Self::Accept),
            "decline" => Ok(Self::Decline),
            other => Err(DomainError::ValidationError(format!(
                "response must be 'accept' or 'decline', got '{other}'"
            ))),
        }
    }
}
