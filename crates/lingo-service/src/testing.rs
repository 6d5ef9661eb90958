//! In-memory implementations of the repository ports for service tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{Duration, Utc};

use lingo_common::Environment;
use lingo_core::entities::{
    FriendPair, Friendship, Invitation, NewNotification, Notification, User,
};
use lingo_core::traits::{
    ActivityStatsRepository, FriendshipRepository, IdentityResolver, InvitationRepository,
    NotificationRepository, RepoResult, UserRepository,
};
use lingo_core::{DomainError, NotificationId, UserId};

use crate::services::{FriendSettings, ServiceContext};

#[derive(Default)]
struct State {
    users: Vec<User>,
    invitations: HashMap<String, Invitation>,
    friendships: Vec<Friendship>,
    activity: HashMap<UserId, (i64, i64)>,
    notifications: Vec<Notification>,
    next_notification_id: i64,
}

/// Shared store backing every port; clones see the same data
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn add_user(&self, handle: &str, display_name: &str) -> UserId {
        let mut state = self.lock();
        let id = UserId::new(i64::try_from(state.users.len()).unwrap() + 1);
        state
            .users
            .push(User::new(id, handle.to_string(), display_name.to_string()));
        id
    }

    pub fn set_activity(&self, user_id: UserId, visits: i64, learning: i64) {
        self.lock().activity.insert(user_id, (visits, learning));
    }

    /// Insert both rows directly, bypassing limit checks
    pub fn befriend(&self, a: UserId, b: UserId) {
        let pair = FriendPair::new(a, b).unwrap();
        self.lock().friendships.extend(pair.rows());
    }

    pub fn expire_invitation(&self, token: &str) {
        if let Some(invitation) = self.lock().invitations.get_mut(token) {
            invitation.expires_at = Some(Utc::now() - Duration::minutes(1));
        }
    }

    pub fn friendship_rows(&self) -> Vec<Friendship> {
        self.lock().friendships.clone()
    }

    pub fn invitation_count(&self) -> usize {
        self.lock().invitations.len()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().notifications.clone()
    }

    /// Service context over this store
    pub fn context(&self, settings: FriendSettings) -> ServiceContext {
        let store = Arc::new(self.clone());
        ServiceContext::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store,
            settings,
        )
    }
}

/// Settings with the given limit and a fixed base URL
pub fn settings(friend_limit: u32) -> FriendSettings {
    FriendSettings {
        friend_limit,
        invite_base_url: Some("https://lingo.test/invite".to_string()),
        invite_ttl_hours: 168,
        environment: Environment::Development,
    }
}

#[async_trait]
impl IdentityResolver for InMemoryStore {
    async fn resolve(&self, handle: &str) -> RepoResult<Option<UserId>> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|u| u.handle == handle)
            .map(|u| u.id))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.lock().users.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl InvitationRepository for InMemoryStore {
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<Invitation>> {
        Ok(self.lock().invitations.get(token).cloned())
    }

    async fn create(&self, invitation: &Invitation) -> RepoResult<()> {
        self.lock()
            .invitations
            .insert(invitation.token.clone(), invitation.clone());
        Ok(())
    }
}

fn row_count(state: &State, user_id: UserId) -> i64 {
    let count = state
        .friendships
        .iter()
        .filter(|f| f.user_id == user_id)
        .count();
    i64::try_from(count).unwrap()
}

fn has_pair(state: &State, a: UserId, b: UserId) -> bool {
    state.friendships.iter().any(|f| {
        (f.user_id == a && f.friend_id == b) || (f.user_id == b && f.friend_id == a)
    })
}

#[async_trait]
impl FriendshipRepository for InMemoryStore {
    async fn count_friends(&self, user_id: UserId) -> RepoResult<i64> {
        Ok(row_count(&self.lock(), user_id))
    }

    async fn are_friends(&self, a: UserId, b: UserId) -> RepoResult<bool> {
        Ok(has_pair(&self.lock(), a, b))
    }

    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Friendship>> {
        let state = self.lock();
        let mut rows: Vec<Friendship> = state
            .friendships
            .iter()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by_key(|f| (f.created_at, f.friend_id));
        Ok(rows)
    }

    async fn create_pair(&self, pair: FriendPair, limit: u32) -> RepoResult<()> {
        // One guard for the whole check-and-insert, like the store's transaction
        let mut state = self.lock();
        if has_pair(&state, pair.low(), pair.high()) {
            return Err(DomainError::AlreadyFriends);
        }
        for user_id in [pair.low(), pair.high()] {
            if row_count(&state, user_id) >= i64::from(limit) {
                return Err(DomainError::FriendLimitReached { user_id, limit });
            }
        }
        state.friendships.extend(pair.rows());
        Ok(())
    }

    async fn delete_pair(&self, user_id: UserId, friend_id: UserId) -> RepoResult<u64> {
        let mut state = self.lock();
        let before = state.friendships.len();
        state.friendships.retain(|f| {
            !((f.user_id == user_id && f.friend_id == friend_id)
                || (f.user_id == friend_id && f.friend_id == user_id))
        });
        let deleted = (before - state.friendships.len()) as u64;
        if deleted == 0 {
            return Err(DomainError::FriendshipNotFound { user_id, friend_id });
        }
        Ok(deleted)
    }
}

#[async_trait]
impl ActivityStatsRepository for InMemoryStore {
    async fn latest_visit_count(&self, user_id: UserId) -> RepoResult<i64> {
        Ok(self.lock().activity.get(&user_id).map_or(0, |a| a.0))
    }

    async fn learning_record_count(&self, user_id: UserId) -> RepoResult<i64> {
        Ok(self.lock().activity.get(&user_id).map_or(0, |a| a.1))
    }
}

fn newest_first(mut list: Vec<Notification>) -> Vec<Notification> {
    list.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
    list
}

#[async_trait]
impl NotificationRepository for InMemoryStore {
    async fn create(&self, notification: &NewNotification) -> RepoResult<Notification> {
        let mut state = self.lock();
        state.next_notification_id += 1;
        let stored = Notification {
            id: NotificationId::new(state.next_notification_id),
            user_id: notification.user_id,
            sender_id: notification.sender_id,
            message: notification.message.clone(),
            is_read: false,
            created_at: Utc::now(),
        };
        state.notifications.push(stored.clone());
        Ok(stored)
    }

    async fn find_unread(&self, user_id: UserId) -> RepoResult<Vec<Notification>> {
        let list = self
            .lock()
            .notifications
            .iter()
            .filter(|n| n.is_unread_for(user_id))
            .cloned()
            .collect();
        Ok(newest_first(list))
    }

    async fn count_unread(&self, user_id: UserId) -> RepoResult<i64> {
        let list = self.find_unread(user_id).await?;
        Ok(i64::try_from(list.len()).unwrap())
    }

    async fn find_read(&self, user_id: UserId, limit: i64) -> RepoResult<Vec<Notification>> {
        let list = self
            .lock()
            .notifications
            .iter()
            .filter(|n| n.is_owned_by(user_id) && n.is_read)
            .cloned()
            .collect();
        let mut list = newest_first(list);
        list.truncate(usize::try_from(limit).unwrap());
        Ok(list)
    }

    async fn mark_read(&self, user_id: UserId, ids: &[NotificationId]) -> RepoResult<u64> {
        let mut updated = 0;
        for n in &mut self.lock().notifications {
            if n.is_unread_for(user_id) && ids.contains(&n.id) {
                n.is_read = true;
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn delete_read(&self, user_id: UserId) -> RepoResult<u64> {
        let mut state = self.lock();
        let before = state.notifications.len();
        state
            .notifications
            .retain(|n| !(n.is_owned_by(user_id) && n.is_read));
        Ok((before - state.notifications.len()) as u64)
    }
}
