//! HTTP integration tests for the authentication endpoints.

mod common;

use axum::http::StatusCode;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use uuid::Uuid;

use common::{TestApp, PASSWORD, SECRET};
use hr_assist::domain::auth::{TokenClaims, TokenKind};
use hr_assist::domain::foundation::{Timestamp, UserId};
use hr_assist::ports::TokenService;

const LOGIN: &str = "/v1/api/auth/login";
const LOGOUT: &str = "/v1/api/auth/logout";
const REFRESH: &str = "/v1/api/auth/refresh";

fn expired_refresh_token(user_id: UserId) -> String {
    let now = Timestamp::now().as_unix_secs();
    let claims = TokenClaims {
        sub: user_id.to_string(),
        jti: Uuid::new_v4(),
        token_type: TokenKind::Refresh,
        iat: now - 600,
        exp: now - 300,
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET)).unwrap()
}

// ════════════════════════════════════════════════════════════════════════════════
// Login
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn login_returns_token_pair() {
    let app = TestApp::new();
    let user = app.seed_user("ana", true, false).await;

    let (status, body) = app
        .post(LOGIN, None, &json!({"username": "ana", "password": PASSWORD}))
        .await;

    assert_eq!(status, StatusCode::OK);
    let access = body["access_token"].as_str().unwrap();
    let refresh = body["refresh_token"].as_str().unwrap();
    let claims = app.tokens.decode(access, TokenKind::Access).unwrap();
    assert_eq!(claims.user_id(), Some(user.id));
    assert!(app.tokens.decode(refresh, TokenKind::Refresh).is_ok());
}

#[tokio::test]
async fn login_names_every_violated_field() {
    let app = TestApp::new();

    let (status, body) = app
        .post(LOGIN, None, &json!({"username": "", "password": null}))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"message": {
            "username": ["This field may not be blank."],
            "password": ["This field may not be null."]
        }})
    );
}

#[tokio::test]
async fn login_with_unparseable_body_is_bad_request() {
    let app = TestApp::new();

    let (status, body) = app.send("POST", LOGIN, None, Some("{\"username\":")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Bad request."}));
}

#[tokio::test]
async fn login_rejects_unknown_user_and_wrong_password_alike() {
    let app = TestApp::new();
    app.seed_user("ana", true, false).await;

    for payload in [
        json!({"username": "nobody", "password": PASSWORD}),
        json!({"username": "ana", "password": "Wr0ng!Pass"}),
    ] {
        let (status, body) = app.post(LOGIN, None, &payload).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"message": "Invalid credentials."}));
    }
}

#[tokio::test]
async fn login_to_inactive_account_is_forbidden() {
    let app = TestApp::new();
    app.seed_user("ana", false, false).await;

    let (status, body) = app
        .post(LOGIN, None, &json!({"username": "ana", "password": PASSWORD}))
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({"message": "User account is inactive."}));
}

// ════════════════════════════════════════════════════════════════════════════════
// Logout
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn logout_blacklists_refresh_token() {
    let app = TestApp::new();
    let user = app.seed_user("ana", true, false).await;
    let access = app.access_token(user.id);
    let refresh = app.refresh_token(user.id);

    let (status, body) = app
        .post(LOGOUT, Some(&access), &json!({"refresh_token": refresh}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Refresh token blacklisted successfully."})
    );
    assert_eq!(app.blacklist.len().await, 1);

    let (status, _) = app
        .post(REFRESH, Some(&access), &json!({"refresh_token": refresh}))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_twice_is_unauthorized() {
    let app = TestApp::new();
    let user = app.seed_user("ana", true, false).await;
    let access = app.access_token(user.id);
    let refresh = app.refresh_token(user.id);

    app.post(LOGOUT, Some(&access), &json!({"refresh_token": refresh}))
        .await;
    let (status, body) = app
        .post(LOGOUT, Some(&access), &json!({"refresh_token": refresh}))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({"message": "The provided token is invalid or has expired."})
    );
}

#[tokio::test]
async fn logout_keeps_access_token_usable() {
    let app = TestApp::new();
    let user = app.seed_user("ana", true, false).await;
    let access = app.access_token(user.id);

    app.post(
        LOGOUT,
        Some(&access),
        &json!({"refresh_token": app.refresh_token(user.id)}),
    )
    .await;
    let (status, _) = app.send("GET", "/v1/api/users", Some(&access), None).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn logout_with_malformed_token_is_unauthorized() {
    let app = TestApp::new();
    let token = app.caller_token().await;

    let (status, _) = app
        .post(LOGOUT, Some(&token), &json!({"refresh_token": "not-a-jwt"}))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_rejects_access_token_in_body() {
    let app = TestApp::new();
    let token = app.caller_token().await;

    let (status, _) = app
        .post(LOGOUT, Some(&token), &json!({"refresh_token": token}))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(app.blacklist.is_empty().await);
}

#[tokio::test]
async fn logout_without_refresh_token_field_is_plain_bad_request() {
    let app = TestApp::new();
    let token = app.caller_token().await;

    let (status, body) = app.post(LOGOUT, Some(&token), &json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Bad request."}));
}

#[tokio::test]
async fn logout_requires_bearer_token() {
    let app = TestApp::new();

    let (status, body) = app
        .post(LOGOUT, None, &json!({"refresh_token": "anything"}))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({"message": "Authentication credentials were not provided."})
    );
}

// ════════════════════════════════════════════════════════════════════════════════
// Refresh
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn refresh_issues_new_access_token() {
    let app = TestApp::new();
    let user = app.seed_user("ana", true, false).await;
    let access = app.access_token(user.id);

    let (status, body) = app
        .post(
            REFRESH,
            Some(&access),
            &json!({"refresh_token": app.refresh_token(user.id)}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let fresh = body["access_token"].as_str().unwrap();
    assert_ne!(fresh, access);
    let claims = app.tokens.decode(fresh, TokenKind::Access).unwrap();
    assert_eq!(claims.user_id(), Some(user.id));
}

#[tokio::test]
async fn refresh_with_expired_token_is_unauthorized() {
    let app = TestApp::new();
    let user = app.seed_user("ana", true, false).await;
    let access = app.access_token(user.id);

    let (status, body) = app
        .post(
            REFRESH,
            Some(&access),
            &json!({"refresh_token": expired_refresh_token(user.id)}),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({"message": "The provided token is invalid or has expired."})
    );
}

#[tokio::test]
async fn refresh_with_foreign_signature_is_unauthorized() {
    let app = TestApp::new();
    let user = app.seed_user("ana", true, false).await;
    let access = app.access_token(user.id);
    let foreign = hr_assist::adapters::auth::JwtTokenService::new(
        b"some-other-secret-that-is-long-enough",
        300,
        86_400,
    )
    .issue(user.id, TokenKind::Refresh)
    .unwrap()
    .token;

    let (status, _) = app
        .post(REFRESH, Some(&access), &json!({"refresh_token": foreign}))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
