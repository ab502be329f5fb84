//! HTTP integration tests for the user management endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{TestApp, PASSWORD};
use hr_assist::domain::foundation::UserId;
use hr_assist::ports::{PasswordHasher, UserRepository};

const USERS: &str = "/v1/api/users";

fn new_user() -> serde_json::Value {
    json!({
        "username": "joana",
        "email": "joana@example.com",
        "password": "Sup3r$ecret"
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Authentication
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn every_route_requires_bearer_token() {
    let app = TestApp::new();

    for (method, uri) in [
        ("GET", USERS),
        ("POST", USERS),
        ("GET", "/v1/api/users/1"),
        ("PUT", "/v1/api/users/1"),
        ("DELETE", "/v1/api/users/1"),
    ] {
        let (status, body) = app.send(method, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(
            body,
            json!({"message": "Authentication credentials were not provided."})
        );
    }
}

#[tokio::test]
async fn token_of_deactivated_caller_is_rejected() {
    let app = TestApp::new();
    let caller = app.seed_user("caller", false, false).await;
    let token = app.access_token(caller.id);

    let (status, body) = app.send("GET", USERS, Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({"message": "The provided token is invalid or has expired."})
    );
}

#[tokio::test]
async fn refresh_token_is_not_a_bearer_credential() {
    let app = TestApp::new();
    let caller = app.seed_user("caller", true, false).await;
    let token = app.refresh_token(caller.id);

    let (status, _) = app.send("GET", USERS, Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ════════════════════════════════════════════════════════════════════════════════
// List and create
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn list_hides_superusers_and_reports_status() {
    let app = TestApp::new();
    let token = app.caller_token().await;
    app.seed_user("root", true, true).await;
    app.seed_user("former", false, false).await;

    let (status, body) = app.send("GET", USERS, Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "username": "caller", "email": "caller@example.com", "status": "active"},
            {"id": 3, "username": "former", "email": "former@example.com", "status": "inactive"}
        ])
    );
}

#[tokio::test]
async fn create_returns_201_and_hashes_password() {
    let app = TestApp::new();
    let token = app.caller_token().await;

    let (status, body) = app.post(USERS, Some(&token), &new_user()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"message": "User created successfully."}));

    let stored = app.users.find_by_username("joana").await.unwrap().unwrap();
    assert!(stored.is_active);
    assert!(!stored.is_superuser);
    assert_ne!(stored.password_hash, "Sup3r$ecret");
    assert!(app
        .hasher
        .verify("Sup3r$ecret", &stored.password_hash)
        .await
        .unwrap());
}

#[tokio::test]
async fn create_with_duplicate_username_is_conflict() {
    let app = TestApp::new();
    let token = app.caller_token().await;
    app.post(USERS, Some(&token), &new_user()).await;

    let (status, body) = app.post(USERS, Some(&token), &new_user()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"message": "Username is already taken."}));
}

#[tokio::test]
async fn create_lists_every_password_policy_violation() {
    let app = TestApp::new();
    let token = app.caller_token().await;
    let mut payload = new_user();
    payload["password"] = json!("lowercaseonly");

    let (status, body) = app.post(USERS, Some(&token), &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"message": {"password": [
            "Password must contain at least one uppercase letter.",
            "Password must contain at least one digit.",
            "Password must contain at least one special character."
        ]}})
    );
}

#[tokio::test]
async fn create_reports_all_invalid_fields_together() {
    let app = TestApp::new();
    let token = app.caller_token().await;

    let (status, body) = app
        .post(
            USERS,
            Some(&token),
            &json!({"username": "jo", "email": "not-an-email"}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"message": {
            "username": ["Ensure this field has at least 3 characters."],
            "email": ["Enter a valid email address."],
            "password": ["This field is required."]
        }})
    );
}

#[tokio::test]
async fn create_with_non_object_body_is_field_error() {
    let app = TestApp::new();
    let token = app.caller_token().await;

    let (status, body) = app.send("POST", USERS, Some(&token), Some("[1, 2]")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"message": {"non_field_errors": [
            "Invalid data. Expected a dictionary, but got list."
        ]}})
    );
}

// ════════════════════════════════════════════════════════════════════════════════
// Single account
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn get_returns_profile() {
    let app = TestApp::new();
    let token = app.caller_token().await;
    let user = app.seed_user("marta", true, false).await;

    let (status, body) = app
        .send("GET", &format!("{USERS}/{}", user.id), Some(&token), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 2, "username": "marta", "email": "marta@example.com", "status": "active"})
    );
}

#[tokio::test]
async fn get_with_bad_ids() {
    let app = TestApp::new();
    let token = app.caller_token().await;

    let (status, body) = app.send("GET", "/v1/api/users/0", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"message": "Bad request. User ID must be greater than zero."})
    );

    let (status, body) = app.send("GET", "/v1/api/users/abc", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Bad request."}));

    let (status, body) = app.send("GET", "/v1/api/users/99", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "User not found."}));
}

#[tokio::test]
async fn update_replaces_every_field() {
    let app = TestApp::new();
    let token = app.caller_token().await;
    let user = app.seed_user("marta", true, false).await;

    let (status, body) = app
        .send(
            "PUT",
            &format!("{USERS}/{}", user.id),
            Some(&token),
            Some(&new_user().to_string()),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "User updated successfully."}));

    let stored = app.users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(stored.username, "joana");
    assert_eq!(stored.email, "joana@example.com");
    assert!(!app.hasher.verify(PASSWORD, &stored.password_hash).await.unwrap());
}

#[tokio::test]
async fn update_of_superuser_is_forbidden_whatever_the_payload() {
    let app = TestApp::new();
    let token = app.caller_token().await;
    let root = app.seed_user("root", true, true).await;
    let uri = format!("{USERS}/{}", root.id);

    for body in [new_user().to_string(), "{}".to_string(), "{broken".to_string()] {
        let (status, response) = app.send("PUT", &uri, Some(&token), Some(&body)).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "body {body}");
        assert_eq!(
            response,
            json!({"message": "Cannot update/delete superuser account."})
        );
    }
}

#[tokio::test]
async fn update_checks_id_then_existence() {
    let app = TestApp::new();
    let token = app.caller_token().await;
    let body = new_user().to_string();

    let (status, _) = app.send("PUT", "/v1/api/users/-4", Some(&token), Some(&body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.send("PUT", "/v1/api/users/42", Some(&token), Some(&body)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_to_taken_username_is_conflict() {
    let app = TestApp::new();
    let token = app.caller_token().await;
    let marta = app.seed_user("marta", true, false).await;
    let mut payload = new_user();
    payload["username"] = json!("caller");

    let (status, _) = app
        .send(
            "PUT",
            &format!("{USERS}/{}", marta.id),
            Some(&token),
            Some(&payload.to_string()),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn delete_deactivates_account() {
    let app = TestApp::new();
    let token = app.caller_token().await;
    let marta = app.seed_user("marta", true, false).await;

    let (status, body) = app
        .send("DELETE", &format!("{USERS}/{}", marta.id), Some(&token), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "User set as inactive successfully."}));
    let stored = app.users.find_by_id(marta.id).await.unwrap().unwrap();
    assert!(!stored.is_active);
}

#[tokio::test]
async fn delete_guards() {
    let app = TestApp::new();
    let token = app.caller_token().await;
    let root = app.seed_user("root", true, true).await;

    let (status, _) = app
        .send("DELETE", &format!("{USERS}/{}", root.id), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.send("DELETE", "/v1/api/users/0", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send("DELETE", &format!("{USERS}/{}", UserId::new(77)), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
