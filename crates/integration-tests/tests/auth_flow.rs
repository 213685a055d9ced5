//! Integration tests for registration, login, sessions, and profile updates.

use axum::http::StatusCode;
use serde_json::json;

use curio_integration_tests::{PASSWORD, TestContext};

#[tokio::test]
async fn register_returns_token_and_user() {
    let ctx = TestContext::new();

    let (status, body) = ctx
        .post(
            "/api/auth/register",
            None,
            json!({"name": "Alice", "email": "alice@example.com", "password": PASSWORD}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["name"], "Alice");
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert_eq!(body["user"]["role"], "member");
    // The credential digest must never appear on the wire
    assert!(body["user"].get("passwordDigest").is_none());
}

#[tokio::test]
async fn register_rejects_invalid_payloads() {
    let ctx = TestContext::new();

    for payload in [
        json!({"name": "", "email": "a@example.com", "password": PASSWORD}),
        json!({"name": "A", "email": "not-an-email", "password": PASSWORD}),
        json!({"name": "A", "email": "a@example.com", "password": "short"}),
        json!({"email": "a@example.com", "password": PASSWORD}),
    ] {
        let (status, body) = ctx.post("/api/auth/register", None, payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn duplicate_email_differing_only_in_case_is_rejected() {
    let ctx = TestContext::new();
    ctx.register("Alice", "alice@example.com").await;

    let (status, body) = ctx
        .post(
            "/api/auth/register",
            None,
            json!({"name": "Impostor", "email": "ALICE@Example.COM", "password": PASSWORD}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email already registered");
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let ctx = TestContext::new();
    ctx.register("Alice", "alice@example.com").await;

    let (wrong_status, wrong_body) = ctx
        .post(
            "/api/auth/login",
            None,
            json!({"email": "alice@example.com", "password": "wrong-password"}),
        )
        .await;
    let (unknown_status, unknown_body) = ctx
        .post(
            "/api/auth/login",
            None,
            json!({"email": "nobody@example.com", "password": PASSWORD}),
        )
        .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    // Identical error bodies: no user-enumeration signal
    assert_eq!(wrong_body, unknown_body);
}

#[tokio::test]
async fn login_mints_new_session_without_invalidating_prior() {
    let ctx = TestContext::new();
    let first = ctx.register("Alice", "alice@example.com").await;
    let second = ctx.login("alice@example.com", PASSWORD).await;

    assert_ne!(first.token, second.token);

    // Both tokens still authenticate
    let (status, body) = ctx.get("/api/auth/me", Some(&first.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "alice@example.com");

    let (status, _) = ctx.get("/api/auth/me", Some(&second.token)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn protected_routes_reject_missing_or_unknown_tokens() {
    let ctx = TestContext::new();

    for uri in [
        "/api/auth/me",
        "/api/me/listings",
        "/api/cart",
        "/api/purchases",
        "/api/admin/data",
    ] {
        let (status, body) = ctx.get(uri, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "uri: {uri}");
        assert_eq!(body["error"], "Unauthorized");

        let (status, _) = ctx.get(uri, Some("made-up-token")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "uri: {uri}");
    }
}

#[tokio::test]
async fn profile_update_applies_valid_fields_and_ignores_malformed() {
    let ctx = TestContext::new();
    let session = ctx.register("Alice", "alice@example.com").await;

    // Malformed fields keep prior values
    let (status, body) = ctx
        .send(
            "PUT",
            "/api/users/me",
            Some(&session.token),
            Some(json!({"name": "   ", "email": "not-an-email"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["email"], "alice@example.com");

    // Valid fields are applied
    let (status, body) = ctx
        .send(
            "PUT",
            "/api/users/me",
            Some(&session.token),
            Some(json!({"name": "Alice B.", "email": "alice.b@example.com"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alice B.");
    assert_eq!(body["email"], "alice.b@example.com");

    // The new email works for login; sessions are unaffected
    ctx.login("alice.b@example.com", PASSWORD).await;
}
