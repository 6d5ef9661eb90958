//! Error kinds shared by every layer

use serde::Serialize;
use std::fmt;

/// Discriminant of every error the subsystem reports.
///
/// Callers branch on the kind; messages are for humans only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Malformed or missing input
    BadRequest,
    /// Caller identity missing at the transport boundary
    Unauthorized,
    /// Relationship-gated action attempted without the relationship
    Forbidden,
    /// Referenced entity absent
    NotFound,
    /// Idempotency guard on friendship creation
    AlreadyFriends,
    /// Business cap on simultaneous friendships
    FriendLimitReached,
    /// Deployment misconfiguration
    #[serde(rename = "CONFIG_ERROR")]
    Config,
    /// Unexpected persistence or invariant failure
    Internal,
}

impl ErrorKind {
    /// Stable code used in API responses
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::AlreadyFriends => "ALREADY_FRIENDS",
            Self::FriendLimitReached => "FRIEND_LIMIT_REACHED",
            Self::Config => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }

    /// Status code in the HTTP/JSON binding
    pub fn http_status(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::AlreadyFriends => 409,
            Self::FriendLimitReached => 422,
            Self::Config | Self::Internal => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.http_status())
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
