//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, cleanup, fixtures::*,
    friendship_rows, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

const INVITATIONS: &str = "/api/v1/invitations";
const RESPOND: &str = "/api/v1/invitations/respond";
const FRIENDS: &str = "/api/v1/friends";
const POKE: &str = "/api/v1/notifications/poke";
const UNREAD: &str = "/api/v1/notifications/unread";
const UNREAD_COUNT: &str = "/api/v1/notifications/unread/count";
const READ: &str = "/api/v1/notifications/read";

async fn create_invitation(server: &TestServer, inviter: &TestUser) -> InvitationResponse {
    let response = server.post_empty_as(INVITATIONS, &inviter.handle).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

/// Make `a` and `b` friends through the invitation flow
async fn befriend(server: &TestServer, a: &TestUser, b: &TestUser) {
    let invitation = create_invitation(server, a).await;
    let response = server
        .post_as(RESPOND, &b.handle, &RespondRequest::accept(&invitation.token))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

async fn unread(server: &TestServer, user: &TestUser) -> Vec<NotificationResponse> {
    let response = server.get_as(UNREAD, &user.handle).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Caller Identity Tests
// ============================================================================

#[tokio::test]
async fn test_missing_identity_is_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get(FRIENDS).await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "UNAUTHORIZED");
}

#[tokio::test]
async fn test_unknown_handle_is_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server
        .get_as(FRIENDS, &format!("ghost_{}", unique_suffix()))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "NOT_FOUND");
}

// ============================================================================
// Invitation Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_preview_invitation() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = TestUser::seed(&server.pool, "alice").await.unwrap();
    let bob = TestUser::seed(&server.pool, "bob").await.unwrap();

    let invitation = create_invitation(&server, &alice).await;
    assert!(invitation.invite_link.ends_with(&format!("/{}", invitation.token)));
    assert_eq!(invitation.token.len(), 64);

    let response = server
        .get_as(&format!("{INVITATIONS}/{}", invitation.token), &bob.handle)
        .await
        .unwrap();
    let preview: PreviewResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(preview.token, invitation.token);
    assert_eq!(preview.inviter.id, alice.id);
    assert_eq!(preview.inviter.handle, alice.handle);
    assert_eq!(preview.inviter.display_name, "alice");

    cleanup(&server.pool, &[&alice, &bob]).await.unwrap();
}

#[tokio::test]
async fn test_preview_unknown_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let bob = TestUser::seed(&server.pool, "bob").await.unwrap();

    let response = server
        .get_as(&format!("{INVITATIONS}/{}", "ab".repeat(32)), &bob.handle)
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();

    cleanup(&server.pool, &[&bob]).await.unwrap();
}

/// An inviter at the limit cannot issue invitations
#[tokio::test]
async fn test_create_invitation_at_friend_limit() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start_with_limit(5).await.unwrap();
    let alice = TestUser::seed(&server.pool, "alice").await.unwrap();
    let mut friends = Vec::new();
    for i in 0..5 {
        let friend = TestUser::seed(&server.pool, &format!("friend{i}")).await.unwrap();
        befriend(&server, &alice, &friend).await;
        friends.push(friend);
    }

    let response = server.post_empty_as(INVITATIONS, &alice.handle).await.unwrap();
    let code = assert_error(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();
    assert_eq!(code, "FRIEND_LIMIT_REACHED");

    let mut users: Vec<&TestUser> = friends.iter().collect();
    users.push(&alice);
    cleanup(&server.pool, &users).await.unwrap();
}

/// Declining leaves no friendship rows behind
#[tokio::test]
async fn test_decline_creates_nothing() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = TestUser::seed(&server.pool, "alice").await.unwrap();
    let bob = TestUser::seed(&server.pool, "bob").await.unwrap();

    let invitation = create_invitation(&server, &alice).await;
    let response = server
        .post_as(RESPOND, &bob.handle, &RespondRequest::decline(&invitation.token))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    assert_eq!(friendship_rows(&server.pool, alice.id).await.unwrap(), 0);
    assert_eq!(friendship_rows(&server.pool, bob.id).await.unwrap(), 0);

    cleanup(&server.pool, &[&alice, &bob]).await.unwrap();
}

#[tokio::test]
async fn test_accept_twice_is_already_friends() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = TestUser::seed(&server.pool, "alice").await.unwrap();
    let bob = TestUser::seed(&server.pool, "bob").await.unwrap();

    let invitation = create_invitation(&server, &alice).await;
    let accept = RespondRequest::accept(&invitation.token);

    let response = server.post_as(RESPOND, &bob.handle, &accept).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    assert_eq!(friendship_rows(&server.pool, alice.id).await.unwrap(), 2);

    let response = server.post_as(RESPOND, &bob.handle, &accept).await.unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "ALREADY_FRIENDS");
    assert_eq!(friendship_rows(&server.pool, alice.id).await.unwrap(), 2);

    cleanup(&server.pool, &[&alice, &bob]).await.unwrap();
}

#[tokio::test]
async fn test_accept_own_invitation_is_bad_request() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = TestUser::seed(&server.pool, "alice").await.unwrap();

    let invitation = create_invitation(&server, &alice).await;
    let response = server
        .post_as(RESPOND, &alice.handle, &RespondRequest::accept(&invitation.token))
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(friendship_rows(&server.pool, alice.id).await.unwrap(), 0);

    cleanup(&server.pool, &[&alice]).await.unwrap();
}

#[tokio::test]
async fn test_respond_with_bad_input() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = TestUser::seed(&server.pool, "alice").await.unwrap();
    let bob = TestUser::seed(&server.pool, "bob").await.unwrap();
    let invitation = create_invitation(&server, &alice).await;

    // Unknown reply
    let response = server
        .post_as(
            RESPOND,
            &bob.handle,
            &json!({ "token": invitation.token, "response": "maybe" }),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Missing token
    let response = server
        .post_as(RESPOND, &bob.handle, &json!({ "response": "accept" }))
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Unknown token
    let response = server
        .post_as(RESPOND, &bob.handle, &RespondRequest::accept(&"cd".repeat(32)))
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();

    cleanup(&server.pool, &[&alice, &bob]).await.unwrap();
}

#[tokio::test]
async fn test_invitee_at_limit_cannot_accept() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start_with_limit(1).await.unwrap();
    let alice = TestUser::seed(&server.pool, "alice").await.unwrap();
    let bob = TestUser::seed(&server.pool, "bob").await.unwrap();
    let carol = TestUser::seed(&server.pool, "carol").await.unwrap();

    befriend(&server, &carol, &bob).await;

    let invitation = create_invitation(&server, &alice).await;
    let response = server
        .post_as(RESPOND, &bob.handle, &RespondRequest::accept(&invitation.token))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();
    assert_eq!(code, "FRIEND_LIMIT_REACHED");
    assert_eq!(friendship_rows(&server.pool, alice.id).await.unwrap(), 0);

    cleanup(&server.pool, &[&alice, &bob, &carol]).await.unwrap();
}

// ============================================================================
// Friend Tests
// ============================================================================

#[tokio::test]
async fn test_friends_listed_with_stats() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = TestUser::seed(&server.pool, "alice").await.unwrap();
    let bob = TestUser::seed(&server.pool, "bob").await.unwrap();
    bob.record_activity(&server.pool, 12, 3).await.unwrap();

    befriend(&server, &alice, &bob).await;

    let response = server.get_as(FRIENDS, &alice.handle).await.unwrap();
    let friends: Vec<FriendResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(friends.len(), 1);
    assert_eq!(friends[0].id, bob.id);
    assert_eq!(friends[0].handle, bob.handle);
    assert_eq!(friends[0].display_name, bob.display_name);
    assert_eq!(friends[0].visit_count, 12);
    assert_eq!(friends[0].learning_count, 3);

    // Symmetric
    let response = server.get_as(FRIENDS, &bob.handle).await.unwrap();
    let friends: Vec<FriendResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(friends.len(), 1);
    assert_eq!(friends[0].id, alice.id);
    assert_eq!(friends[0].visit_count, 0);
    assert_eq!(friends[0].learning_count, 0);

    cleanup(&server.pool, &[&alice, &bob]).await.unwrap();
}

/// Removing a missing friendship is NOT_FOUND, before and after
#[tokio::test]
async fn test_remove_friend() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = TestUser::seed(&server.pool, "alice").await.unwrap();
    let bob = TestUser::seed(&server.pool, "bob").await.unwrap();
    let path = format!("{FRIENDS}/{}", bob.handle);

    let response = server.delete_as(&path, &alice.handle).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();

    befriend(&server, &alice, &bob).await;

    let response = server.delete_as(&path, &alice.handle).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    assert_eq!(friendship_rows(&server.pool, alice.id).await.unwrap(), 0);

    let response = server.delete_as(&path, &alice.handle).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();

    cleanup(&server.pool, &[&alice, &bob]).await.unwrap();
}

// ============================================================================
// Notification Tests
// ============================================================================

/// Poking a non-friend is forbidden
#[tokio::test]
async fn test_poke_requires_friendship() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = TestUser::seed(&server.pool, "alice").await.unwrap();
    let bob = TestUser::seed(&server.pool, "bob").await.unwrap();

    let response = server
        .post_as(POKE, &alice.handle, &PokeRequest::to(&bob))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "FORBIDDEN");
    assert!(unread(&server, &bob).await.is_empty());

    cleanup(&server.pool, &[&alice, &bob]).await.unwrap();
}

#[tokio::test]
async fn test_poke_unknown_receiver() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = TestUser::seed(&server.pool, "alice").await.unwrap();

    let response = server
        .post_as(
            POKE,
            &alice.handle,
            &json!({ "receiver": format!("ghost_{}", unique_suffix()) }),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();

    cleanup(&server.pool, &[&alice]).await.unwrap();
}

/// Poke, read, mark, purge
#[tokio::test]
async fn test_notification_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = TestUser::seed(&server.pool, "alice").await.unwrap();
    let bob = TestUser::seed(&server.pool, "bob").await.unwrap();
    befriend(&server, &alice, &bob).await;

    let response = server
        .post_as(POKE, &alice.handle, &PokeRequest::to(&bob))
        .await
        .unwrap();
    let poke: NotificationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(poke.message, "alice poked you!");

    let inbox = unread(&server, &bob).await;
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].id, poke.id);
    assert_eq!(inbox[0].sender_id, alice.id);
    assert!(!inbox[0].is_read);

    // Reading the inbox does not mark anything
    let response = server.get_as(UNREAD_COUNT, &bob.handle).await.unwrap();
    let count: CountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.count, 1);

    let mark = json!({ "ids": [poke.id] });
    let response = server.post_as(READ, &bob.handle, &mark).await.unwrap();
    let marked: CountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(marked.count, 1);

    let response = server.post_as(READ, &bob.handle, &mark).await.unwrap();
    let marked: CountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(marked.count, 0);

    assert!(unread(&server, &bob).await.is_empty());

    let response = server.get_as(READ, &bob.handle).await.unwrap();
    let history: Vec<NotificationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0].is_read);

    let response = server.delete_as(READ, &bob.handle).await.unwrap();
    let deleted: DeleteReadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(deleted.deleted, 1);

    let response = server.delete_as(READ, &bob.handle).await.unwrap();
    let deleted: DeleteReadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(deleted.deleted, 0);
    assert_eq!(deleted.message, "No read notifications to delete");

    let response = server.get_as(READ, &bob.handle).await.unwrap();
    let history: Vec<NotificationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(history.is_empty());

    cleanup(&server.pool, &[&alice, &bob]).await.unwrap();
}

#[tokio::test]
async fn test_mark_read_only_touches_own_notifications() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = TestUser::seed(&server.pool, "alice").await.unwrap();
    let bob = TestUser::seed(&server.pool, "bob").await.unwrap();
    befriend(&server, &alice, &bob).await;

    let response = server
        .post_as(POKE, &alice.handle, &PokeRequest::to(&bob))
        .await
        .unwrap();
    let poke: NotificationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_as(READ, &alice.handle, &json!({ "ids": [poke.id] }))
        .await
        .unwrap();
    let marked: CountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(marked.count, 0);
    assert_eq!(unread(&server, &bob).await.len(), 1);

    cleanup(&server.pool, &[&alice, &bob]).await.unwrap();
}

#[tokio::test]
async fn test_mark_read_rejects_bad_id_lists() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let bob = TestUser::seed(&server.pool, "bob").await.unwrap();

    for body in [
        json!({ "ids": [] }),
        json!({ "ids": ["abc", -3, null] }),
        json!({ "ids": (1..=101).collect::<Vec<i64>>() }),
        json!({}),
    ] {
        let response = server.post_as(READ, &bob.handle, &body).await.unwrap();
        let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(code, "BAD_REQUEST");
    }

    cleanup(&server.pool, &[&bob]).await.unwrap();
}

#[tokio::test]
async fn test_read_history_limit() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = TestUser::seed(&server.pool, "alice").await.unwrap();
    let bob = TestUser::seed(&server.pool, "bob").await.unwrap();
    befriend(&server, &alice, &bob).await;

    let mut ids = Vec::new();
    for _ in 0..3 {
        let response = server
            .post_as(POKE, &alice.handle, &PokeRequest::to(&bob))
            .await
            .unwrap();
        let poke: NotificationResponse =
            assert_json(response, StatusCode::CREATED).await.unwrap();
        ids.push(poke.id);
    }

    let response = server
        .post_as(READ, &bob.handle, &json!({ "ids": ids }))
        .await
        .unwrap();
    let marked: CountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(marked.count, 3);

    let response = server
        .get_as(&format!("{READ}?limit=2"), &bob.handle)
        .await
        .unwrap();
    let history: Vec<NotificationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(history.len(), 2);

    let response = server
        .get_as(&format!("{READ}?limit=abc"), &bob.handle)
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();

    cleanup(&server.pool, &[&alice, &bob]).await.unwrap();
}
