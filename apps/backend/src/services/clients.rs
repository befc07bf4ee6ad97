use std::sync::Arc;

use uuid::Uuid;

use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::{Client, ClientStore, ClientUpdate};

#[derive(Clone)]
pub struct ClientsService {
    store: Arc<dyn ClientStore>,
}

impl ClientsService {
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self { store }
    }

    pub async fn profile(&self, id: Uuid) -> Result<Client, DomainError> {
        self.store.find_by_id(id).await?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Client, format!("Client {id} not found"))
        })
    }

    /// Apply a partial profile update after trimming and validating fields.
    pub async fn update(&self, id: Uuid, update: ClientUpdate) -> Result<Client, DomainError> {
        let update = normalize_update(update)?;
        self.store.update(id, update).await
    }
}

fn normalize_update(update: ClientUpdate) -> Result<ClientUpdate, DomainError> {
    let trimmed = |v: Option<String>, field: &str| -> Result<Option<String>, DomainError> {
        match v.map(|s| s.trim().to_string()) {
            Some(s) if s.is_empty() => Err(DomainError::validation(format!(
                "{field} must not be empty"
            ))),
            other => Ok(other),
        }
    };

    let update = ClientUpdate {
        first_name: trimmed(update.first_name, "firstName")?,
        last_name: trimmed(update.last_name, "lastName")?,
        email: trimmed(update.email, "email")?,
        phone: trimmed(update.phone, "phone")?,
    };

    if update.email.as_deref().is_some_and(|e| !e.contains('@')) {
        return Err(DomainError::validation("email is invalid"));
    }
    Ok(update)
}
