use axum::extract::{Extension, Json, State};
use uuid::Uuid;

use identity_cell::handlers::{get_profile, list_users, login, register, IdentityState};
use identity_cell::models::{CreateUserRequest, LoginRequest};
use identity_cell::services::IdentityStore;
use shared_models::auth::User;
use shared_models::error::AppError;
use shared_utils::test_utils::TestConfig;

fn create_test_state() -> IdentityState {
    IdentityState {
        config: TestConfig::default().to_arc(),
        store: IdentityStore::new(),
    }
}

fn create_request(email: &str, password: &str) -> CreateUserRequest {
    CreateUserRequest {
        name: "Test User".to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role: None,
        age: Some(34),
        gender: Some("female".to_string()),
        is_host: Some(false),
    }
}

fn principal(id: Uuid) -> User {
    User {
        id: id.to_string(),
        email: Some("a@x.com".to_string()),
        role: Some("patient".to_string()),
        created_at: None,
    }
}

#[tokio::test]
async fn test_register_success_excludes_credential() {
    let state = create_test_state();

    let result = register(State(state), Json(create_request("a@x.com", "password-1"))).await;

    assert!(result.is_ok());
    let response = result.unwrap().0;
    assert_eq!(response["email"], "a@x.com");
    assert_eq!(response["role"], "patient");
    assert!(response.get("password").is_none());
    assert!(response.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_conflict() {
    let state = create_test_state();

    let first = register(
        State(state.clone()),
        Json(create_request("a@x.com", "password-1")),
    )
    .await;
    assert!(first.is_ok());

    let second = register(
        State(state),
        Json(create_request("a@x.com", "password-2")),
    )
    .await;

    match second.unwrap_err() {
        AppError::Conflict(_) => {}
        other => panic!("Expected Conflict error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_register_duplicate_email_is_case_insensitive() {
    let state = create_test_state();

    let _ = register(
        State(state.clone()),
        Json(create_request("a@x.com", "password-1")),
    )
    .await
    .unwrap();

    let second = register(
        State(state),
        Json(create_request("A@X.COM", "password-2")),
    )
    .await;

    match second.unwrap_err() {
        AppError::Conflict(_) => {}
        other => panic!("Expected Conflict error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_register_invalid_input() {
    let state = create_test_state();

    let result = register(
        State(state),
        Json(CreateUserRequest {
            name: "".to_string(),
            email: "a@x.com".to_string(),
            password: "password-1".to_string(),
            role: None,
            age: None,
            gender: None,
            is_host: None,
        }),
    )
    .await;

    match result.unwrap_err() {
        AppError::ValidationError(_) => {}
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_login_success() {
    let state = create_test_state();

    let _ = register(
        State(state.clone()),
        Json(create_request("a@x.com", "password-1")),
    )
    .await
    .unwrap();

    let result = login(
        State(state),
        Json(LoginRequest {
            email: "a@x.com".to_string(),
            password: "password-1".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let response = result.unwrap().0;
    assert_eq!(response.token_type, "Bearer");
    assert_eq!(response.user.email, "a@x.com");
}

#[tokio::test]
async fn test_login_wrong_password_unauthorized() {
    let state = create_test_state();

    let _ = register(
        State(state.clone()),
        Json(create_request("a@x.com", "password-1")),
    )
    .await
    .unwrap();

    let result = login(
        State(state),
        Json(LoginRequest {
            email: "a@x.com".to_string(),
            password: "password-2".to_string(),
        }),
    )
    .await;

    match result.unwrap_err() {
        AppError::Auth(_) => {}
        other => panic!("Expected Auth error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_login_unknown_email_unauthorized() {
    let state = create_test_state();

    let result = login(
        State(state),
        Json(LoginRequest {
            email: "nobody@x.com".to_string(),
            password: "password-1".to_string(),
        }),
    )
    .await;

    match result.unwrap_err() {
        AppError::Auth(_) => {}
        other => panic!("Expected Auth error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_profile_projection() {
    let state = create_test_state();

    let created = register(
        State(state.clone()),
        Json(create_request("a@x.com", "password-1")),
    )
    .await
    .unwrap()
    .0;
    let user_id = Uuid::parse_str(created["id"].as_str().unwrap()).unwrap();

    let result = get_profile(State(state), Extension(principal(user_id))).await;

    assert!(result.is_ok());
    let response = result.unwrap().0;
    assert_eq!(response["id"], user_id.to_string());
    assert_eq!(response["name"], "Test User");
    assert!(response.get("password_hash").is_none());
}

#[tokio::test]
async fn test_get_profile_unknown_user() {
    let state = create_test_state();

    let result = get_profile(State(state), Extension(principal(Uuid::new_v4()))).await;

    match result.unwrap_err() {
        AppError::NotFound(_) => {}
        other => panic!("Expected NotFound error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_users_in_insertion_order() {
    let state = create_test_state();

    let _ = register(
        State(state.clone()),
        Json(create_request("a@x.com", "password-1")),
    )
    .await
    .unwrap();
    let _ = register(
        State(state.clone()),
        Json(create_request("b@x.com", "password-2")),
    )
    .await
    .unwrap();

    let result = list_users(State(state), Extension(principal(Uuid::new_v4()))).await;

    assert!(result.is_ok());
    let response = result.unwrap().0;
    assert_eq!(response["total"], 2);
    assert_eq!(response["users"][0]["email"], "a@x.com");
    assert_eq!(response["users"][1]["email"], "b@x.com");
}
