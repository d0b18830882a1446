use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::{IdentityError, UserProfile, UserRecord};

/// In-memory identity store. The store exclusively owns its records;
/// uniqueness checks and inserts happen under a single write lock so two
/// concurrent registrations cannot both claim the same email.
#[derive(Clone, Default)]
pub struct IdentityStore {
    records: Arc<RwLock<Vec<UserRecord>>>,
}

impl IdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, record: UserRecord) -> Result<UserRecord, IdentityError> {
        let mut records = self.records.write().await;

        if records
            .iter()
            .any(|r| r.email.eq_ignore_ascii_case(&record.email))
        {
            return Err(IdentityError::EmailAlreadyExists {
                email: record.email,
            });
        }

        records.push(record.clone());
        debug!("User record created with ID: {}", record.id);

        Ok(record)
    }

    pub async fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        let records = self.records.read().await;
        records
            .iter()
            .find(|r| r.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    /// Projected read; the credential field is not part of the result shape.
    pub async fn get_profile(&self, user_id: Uuid) -> Result<UserProfile, IdentityError> {
        let records = self.records.read().await;
        records
            .iter()
            .find(|r| r.id == user_id)
            .map(UserRecord::profile)
            .ok_or(IdentityError::NotFound)
    }

    /// All profiles in insertion order.
    pub async fn list_profiles(&self) -> Vec<UserProfile> {
        let records = self.records.read().await;
        records.iter().map(UserRecord::profile).collect()
    }
}
