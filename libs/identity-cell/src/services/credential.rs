use std::sync::Arc;

use chrono::Utc;
use regex::Regex;
use tracing::debug;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_utils::jwt::issue_token;
use shared_utils::password::{hash_password, verify_password};

use crate::models::{
    CreateUserRequest, IdentityError, LoginRequest, LoginResponse, UserProfile, UserRecord,
};
use crate::services::identity::IdentityStore;

pub struct CredentialService {
    config: Arc<AppConfig>,
    store: IdentityStore,
}

impl CredentialService {
    pub fn new(config: Arc<AppConfig>, store: IdentityStore) -> Self {
        Self { config, store }
    }

    /// Register a new user. The raw secret is hashed before it reaches the
    /// store and never appears in logs or responses.
    pub async fn register(&self, request: CreateUserRequest) -> Result<UserProfile, IdentityError> {
        debug!("Registering new user: {}", request.email);

        Self::validate_registration(&request)?;

        let password_hash = hash_password(&request.password)
            .map_err(|e| IdentityError::CredentialError(e.to_string()))?;

        let now = Utc::now();
        let record = UserRecord {
            id: Uuid::new_v4(),
            name: request.name,
            email: request.email,
            password_hash,
            role: request.role.unwrap_or_else(|| "patient".to_string()),
            age: request.age,
            gender: request.gender,
            is_host: request.is_host.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };

        let record = self.store.create(record).await?;
        debug!("User registered successfully with ID: {}", record.id);

        Ok(record.profile())
    }

    /// Verify a credential and issue a token. Unknown email and wrong
    /// password collapse into the same failure so callers cannot probe
    /// which half was wrong.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, IdentityError> {
        debug!("Login attempt for: {}", request.email);

        let record = self
            .store
            .find_by_email(&request.email)
            .await
            .ok_or(IdentityError::InvalidCredentials)?;

        let matches = verify_password(&request.password, &record.password_hash)
            .map_err(|e| IdentityError::CredentialError(e.to_string()))?;

        if !matches {
            debug!("Credential verification failed for: {}", request.email);
            return Err(IdentityError::InvalidCredentials);
        }

        let token = issue_token(
            &record.id.to_string(),
            &record.email,
            &record.role,
            &self.config.jwt_secret,
            self.config.token_ttl_hours,
        )
        .map_err(IdentityError::CredentialError)?;

        debug!("Login succeeded for user: {}", record.id);

        Ok(LoginResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.config.token_ttl_hours * 3600,
            user: record.profile(),
        })
    }

    fn validate_registration(request: &CreateUserRequest) -> Result<(), IdentityError> {
        if request.name.trim().is_empty() {
            return Err(IdentityError::ValidationError(
                "Name must not be empty".to_string(),
            ));
        }

        if !Self::is_valid_email(&request.email) {
            return Err(IdentityError::ValidationError(
                "Invalid email address".to_string(),
            ));
        }

        if request.password.is_empty() {
            return Err(IdentityError::ValidationError(
                "Password must not be empty".to_string(),
            ));
        }

        if let Some(age) = request.age {
            if !(0..=150).contains(&age) {
                return Err(IdentityError::ValidationError(
                    "Age is out of range".to_string(),
                ));
            }
        }

        Ok(())
    }

    fn is_valid_email(email: &str) -> bool {
        let email_regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();

        email_regex.is_match(email) && email.len() <= 254
    }
}
