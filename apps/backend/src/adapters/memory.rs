//! Map-backed stores for tests and database-less local runs.
//!
//! Uniqueness rules match the database indexes: one manager per normalized
//! email, one client per phone and per normalized email.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::{
    normalize_email, Client, ClientStore, ClientUpdate, Manager, ManagerStore, NewManager,
    PrincipalStore,
};

#[derive(Debug, Default)]
pub struct InMemoryManagers {
    rows: RwLock<HashMap<Uuid, Manager>>,
}

impl InMemoryManagers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop a manager, as an operator deleting the account would.
    pub fn remove(&self, id: Uuid) -> Option<Manager> {
        self.rows.write().remove(&id)
    }
}

#[async_trait]
impl PrincipalStore for InMemoryManagers {
    async fn exists(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.rows.read().contains_key(&id))
    }
}

#[async_trait]
impl ManagerStore for InMemoryManagers {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Manager>, DomainError> {
        Ok(self.rows.read().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Manager>, DomainError> {
        let wanted = normalize_email(email);
        Ok(self
            .rows
            .read()
            .values()
            .find(|m| m.email_normalized == wanted)
            .cloned())
    }

    async fn insert(&self, manager: NewManager) -> Result<Manager, DomainError> {
        let email_normalized = normalize_email(&manager.email);
        let mut rows = self.rows.write();
        if rows.values().any(|m| m.email_normalized == email_normalized) {
            return Err(DomainError::conflict(
                ConflictKind::UniqueEmail,
                "Email already registered",
            ));
        }

        let row = Manager {
            id: Uuid::new_v4(),
            first_name: manager.first_name,
            last_name: manager.last_name,
            email: manager.email,
            email_normalized,
            password_hash: manager.password_hash,
            created_at: OffsetDateTime::now_utc(),
        };
        rows.insert(row.id, row.clone());
        Ok(row)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryClients {
    rows: RwLock<HashMap<Uuid, Client>>,
}

impl InMemoryClients {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    pub fn remove(&self, id: Uuid) -> Option<Client> {
        self.rows.write().remove(&id)
    }
}

#[async_trait]
impl PrincipalStore for InMemoryClients {
    async fn exists(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.rows.read().contains_key(&id))
    }
}

#[async_trait]
impl ClientStore for InMemoryClients {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, DomainError> {
        Ok(self.rows.read().get(&id).cloned())
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Client>, DomainError> {
        Ok(self
            .rows
            .read()
            .values()
            .find(|c| c.phone == phone)
            .cloned())
    }

    async fn register_by_phone(&self, phone: &str) -> Result<Uuid, DomainError> {
        // check and insert under one write lock
        let mut rows = self.rows.write();
        if let Some(existing) = rows.values().find(|c| c.phone == phone) {
            return Ok(existing.id);
        }

        let client = Client {
            id: Uuid::new_v4(),
            phone: phone.to_string(),
            first_name: None,
            last_name: None,
            email: None,
            created_at: OffsetDateTime::now_utc(),
        };
        let id = client.id;
        rows.insert(id, client);
        Ok(id)
    }

    async fn update(&self, id: Uuid, update: ClientUpdate) -> Result<Client, DomainError> {
        let mut rows = self.rows.write();

        if let Some(phone) = &update.phone {
            if rows.values().any(|c| c.id != id && &c.phone == phone) {
                return Err(DomainError::conflict(
                    ConflictKind::UniquePhone,
                    "Phone already registered",
                ));
            }
        }
        if let Some(email) = &update.email {
            let wanted = normalize_email(email);
            let taken = rows.values().any(|c| {
                c.id != id
                    && c.email
                        .as_deref()
                        .is_some_and(|e| normalize_email(e) == wanted)
            });
            if taken {
                return Err(DomainError::conflict(
                    ConflictKind::UniqueEmail,
                    "Email already registered",
                ));
            }
        }

        let client = rows.get_mut(&id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Client, format!("Client {id} not found"))
        })?;
        if let Some(first_name) = update.first_name {
            client.first_name = Some(first_name);
        }
        if let Some(last_name) = update.last_name {
            client.last_name = Some(last_name);
        }
        if let Some(email) = update.email {
            client.email = Some(email);
        }
        if let Some(phone) = update.phone {
            client.phone = phone;
        }
        Ok(client.clone())
    }
}
