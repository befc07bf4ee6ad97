//! Client identities (console API).

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use super::PrincipalStore;
use crate::errors::domain::DomainError;

/// Client domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: Uuid,
    pub phone: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Partial profile update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ClientUpdate {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }
}

#[async_trait]
pub trait ClientStore: PrincipalStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, DomainError>;

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Client>, DomainError>;

    /// Ensure a client exists for `phone` and return its id.
    ///
    /// Idempotent: concurrent or repeated calls for the same phone resolve to
    /// the same id.
    async fn register_by_phone(&self, phone: &str) -> Result<Uuid, DomainError>;

    async fn update(&self, id: Uuid, update: ClientUpdate) -> Result<Client, DomainError>;
}

impl From<crate::entities::clients::Model> for Client {
    fn from(model: crate::entities::clients::Model) -> Self {
        Self {
            id: model.id,
            phone: model.phone,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            created_at: model.created_at,
        }
    }
}
