use std::sync::Arc;

use axum::extract::{Extension, Json, State};
use serde_json::{json, Value};
use tracing::debug;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::auth::User;
use shared_models::error::AppError;

use crate::models::{CreateUserRequest, LoginRequest, LoginResponse};
use crate::services::{CredentialService, IdentityStore};

#[derive(Clone)]
pub struct IdentityState {
    pub config: Arc<AppConfig>,
    pub store: IdentityStore,
}

#[axum::debug_handler]
pub async fn register(
    State(state): State<IdentityState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<Value>, AppError> {
    let service = CredentialService::new(state.config.clone(), state.store.clone());

    let profile = service.register(request).await?;

    Ok(Json(json!(profile)))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<IdentityState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let service = CredentialService::new(state.config.clone(), state.store.clone());

    let response = service.login(request).await?;

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn get_profile(
    State(state): State<IdentityState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    debug!("Getting profile for user: {}", user.id);

    let user_id = Uuid::parse_str(&user.id)
        .map_err(|_| AppError::Auth("Invalid subject in token".to_string()))?;

    let profile = state.store.get_profile(user_id).await?;

    Ok(Json(json!(profile)))
}

#[axum::debug_handler]
pub async fn list_users(
    State(state): State<IdentityState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    debug!("Listing users for caller: {}", user.id);

    let users = state.store.list_profiles().await;

    Ok(Json(json!({
        "users": users,
        "total": users.len()
    })))
}
