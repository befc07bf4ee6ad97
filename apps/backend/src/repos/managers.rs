//! Manager identities (admin portal).

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use super::PrincipalStore;
use crate::errors::domain::DomainError;

/// Manager domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Manager {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub email_normalized: String,
    pub password_hash: String,
    pub created_at: OffsetDateTime,
}

/// Insert payload; `password_hash` is already hashed.
#[derive(Debug, Clone)]
pub struct NewManager {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

#[async_trait]
pub trait ManagerStore: PrincipalStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Manager>, DomainError>;

    /// Lookup is done on the normalized form of `email`.
    async fn find_by_email(&self, email: &str) -> Result<Option<Manager>, DomainError>;

    async fn insert(&self, manager: NewManager) -> Result<Manager, DomainError>;
}

/// Canonical form used for email uniqueness and lookups.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_uppercase()
}

impl From<crate::entities::managers::Model> for Manager {
    fn from(model: crate::entities::managers::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            email_normalized: model.email_normalized,
            password_hash: model.password_hash,
            created_at: model.created_at,
        }
    }
}
