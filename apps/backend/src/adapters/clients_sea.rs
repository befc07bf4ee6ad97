//! SeaORM adapter for clients.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::clients;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::{normalize_email, Client, ClientStore, ClientUpdate, PrincipalStore};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<Option<clients::Model>, sea_orm::DbErr> {
    clients::Entity::find_by_id(id).one(conn).await
}

pub async fn find_by_phone<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    phone: &str,
) -> Result<Option<clients::Model>, sea_orm::DbErr> {
    clients::Entity::find()
        .filter(clients::Column::Phone.eq(phone))
        .one(conn)
        .await
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<bool, sea_orm::DbErr> {
    let count = clients::Entity::find()
        .filter(clients::Column::Id.eq(id))
        .count(conn)
        .await?;
    Ok(count > 0)
}

/// Insert a bare client for `phone` unless one exists, then read it back.
///
/// The unique index on `phone` settles races between concurrent logins.
pub async fn ensure_by_phone<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    phone: &str,
) -> Result<(clients::Model, bool), sea_orm::DbErr> {
    let active = clients::ActiveModel {
        id: Set(Uuid::new_v4()),
        phone: Set(phone.to_string()),
        first_name: Set(None),
        last_name: Set(None),
        email: Set(None),
        email_normalized: Set(None),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    let rows = clients::Entity::insert(active)
        .on_conflict(
            OnConflict::column(clients::Column::Phone)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    let inserted = rows == 1;
    let client = find_by_phone(conn, phone)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("clients.phone not found".to_string()))?;

    Ok((client, inserted))
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    model: clients::Model,
    dto: ClientUpdate,
) -> Result<clients::Model, sea_orm::DbErr> {
    let mut active = model.into_active_model();
    if let Some(first_name) = dto.first_name {
        active.first_name = Set(Some(first_name));
    }
    if let Some(last_name) = dto.last_name {
        active.last_name = Set(Some(last_name));
    }
    if let Some(email) = dto.email {
        active.email_normalized = Set(Some(normalize_email(&email)));
        active.email = Set(Some(email));
    }
    if let Some(phone) = dto.phone {
        active.phone = Set(phone);
    }
    active.update(conn).await
}

/// Client store backed by a database connection.
#[derive(Debug, Clone)]
pub struct SeaClients {
    db: DatabaseConnection,
}

impl SeaClients {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PrincipalStore for SeaClients {
    async fn exists(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(exists(&self.db, id).await?)
    }
}

#[async_trait]
impl ClientStore for SeaClients {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, DomainError> {
        Ok(find_by_id(&self.db, id).await?.map(Client::from))
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Client>, DomainError> {
        Ok(find_by_phone(&self.db, phone).await?.map(Client::from))
    }

    async fn register_by_phone(&self, phone: &str) -> Result<Uuid, DomainError> {
        let (client, inserted) = ensure_by_phone(&self.db, phone).await?;
        if inserted {
            tracing::info!(client_id = %client.id, "client registered");
        }
        Ok(client.id)
    }

    async fn update(&self, id: Uuid, dto: ClientUpdate) -> Result<Client, DomainError> {
        let model = find_by_id(&self.db, id).await?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Client, format!("Client {id} not found"))
        })?;
        if dto.is_empty() {
            return Ok(Client::from(model));
        }
        Ok(Client::from(update(&self.db, model, dto).await?))
    }
}
