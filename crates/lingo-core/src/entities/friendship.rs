//! Friendship entity - directed rows that together form a symmetric relationship

use chrono::{DateTime, Utc};

use crate::entities::User;
use crate::error::DomainError;
use crate::value_objects::UserId;

/// One persisted row: `user_id` considers `friend_id` a friend.
///
/// An undirected friendship is exactly two rows, `(a, b)` and `(b, a)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friendship {
    pub user_id: UserId,
    pub friend_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Friendship {
    pub fn new(user_id: UserId, friend_id: UserId) -> Self {
        Self {
            user_id,
            friend_id,
            created_at: Utc::now(),
        }
    }
}

/// Canonical, order-independent key of an undirected friendship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FriendPair {
    low: UserId,
    high: UserId,
}

impl FriendPair {
    /// Build the canonical key for two distinct users
    pub fn new(a: UserId, b: UserId) -> Result<Self, DomainError> {
        if a == b {
            return Err(DomainError::SelfFriendship);
        }
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { low, high })
    }

    #[inline]
    pub fn low(&self) -> UserId {
        self.low
    }

    #[inline]
    pub fn high(&self) -> UserId {
        self.high
    }

    /// Both directed rows for this pair
    pub fn rows(&self) -> [Friendship; 2] {
        let forward = Friendship::new(self.low, self.high);
        let backward = Friendship {
            user_id: self.high,
            friend_id: self.low,
            created_at: forward.created_at,
        };
        [forward, backward]
    }
}

/// Derived learning activity shown next to each friend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActivityStats {
    /// Most recently recorded visit count (0 when none recorded)
    pub visit_count: i64,
    /// Number of learning-activity records
    pub learning_count: i64,
}

/// A friend's profile together with their activity stats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendWithStats {
    pub friend: User,
    pub since: DateTime<Utc>,
    pub stats: ActivityStats,
}
