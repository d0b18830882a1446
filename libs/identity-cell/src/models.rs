use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::error::AppError;

/// Stored identity record. Deliberately not serializable: read paths go
/// through [`UserProfile`] so the credential hash can never leak into a
/// response body.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub is_host: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            age: self.age,
            gender: self.gender.clone(),
            is_host: self.is_host,
            created_at: self.created_at,
        }
    }
}

/// Read projection of a user record, without the credential field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub is_host: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub is_host: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserProfile,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum IdentityError {
    #[error("User not found")]
    NotFound,

    #[error("User with email {email} already exists")]
    EmailAlreadyExists { email: String },

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Credential error: {0}")]
    CredentialError(String),
}

impl From<IdentityError> for AppError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::NotFound => AppError::NotFound(err.to_string()),
            IdentityError::EmailAlreadyExists { .. } => AppError::Conflict(err.to_string()),
            IdentityError::InvalidCredentials => AppError::Auth(err.to_string()),
            IdentityError::ValidationError(msg) => AppError::ValidationError(msg),
            IdentityError::CredentialError(msg) => AppError::Internal(msg),
        }
    }
}
