use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::auth::password::hash_password;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::repos::{Manager, ManagerStore, NewManager};

/// Plain-text input for creating a manager account.
#[derive(Debug, Clone)]
pub struct CreateManager {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone)]
pub struct ManagersService {
    store: Arc<dyn ManagerStore>,
}

impl ManagersService {
    pub fn new(store: Arc<dyn ManagerStore>) -> Self {
        Self { store }
    }

    /// Create a manager, hashing the password with argon2id.
    pub async fn create(&self, input: CreateManager) -> Result<Manager, DomainError> {
        if input.password.is_empty() {
            return Err(DomainError::validation("Password must not be empty"));
        }
        let email = input.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::validation("Email is invalid"));
        }

        let password_hash = hash_password(&input.password).map_err(|e| {
            DomainError::infra(
                InfraErrorKind::Other("PasswordHash".into()),
                format!("failed to hash password: {e}"),
            )
        })?;

        let manager = self
            .store
            .insert(NewManager {
                first_name: input.first_name.trim().to_string(),
                last_name: input.last_name.trim().to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!(manager_id = %manager.id, email = %Redacted(&manager.email), "manager created");
        Ok(manager)
    }

    /// Create the manager unless its email is already taken.
    ///
    /// Returns `true` when a new account was created.
    pub async fn ensure(&self, input: CreateManager) -> Result<bool, DomainError> {
        match self.create(input).await {
            Ok(_) => Ok(true),
            Err(DomainError::Conflict(ConflictKind::UniqueEmail, _)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub async fn profile(&self, id: Uuid) -> Result<Manager, DomainError> {
        self.store.find_by_id(id).await?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Manager, format!("Manager {id} not found"))
        })
    }
}
