//! SeaORM adapter for managers.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::managers;
use crate::errors::domain::DomainError;
use crate::repos::{normalize_email, Manager, ManagerStore, NewManager, PrincipalStore};

// Adapter functions return DbErr; the store maps to DomainError via From<DbErr>.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<Option<managers::Model>, sea_orm::DbErr> {
    managers::Entity::find_by_id(id).one(conn).await
}

pub async fn find_by_email_normalized<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email_normalized: &str,
) -> Result<Option<managers::Model>, sea_orm::DbErr> {
    managers::Entity::find()
        .filter(managers::Column::EmailNormalized.eq(email_normalized))
        .one(conn)
        .await
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<bool, sea_orm::DbErr> {
    let count = managers::Entity::find()
        .filter(managers::Column::Id.eq(id))
        .count(conn)
        .await?;
    Ok(count > 0)
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: NewManager,
) -> Result<managers::Model, sea_orm::DbErr> {
    let active = managers::ActiveModel {
        id: Set(Uuid::new_v4()),
        first_name: Set(dto.first_name),
        last_name: Set(dto.last_name),
        email_normalized: Set(normalize_email(&dto.email)),
        email: Set(dto.email),
        password_hash: Set(dto.password_hash),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    active.insert(conn).await
}

/// Manager store backed by a database connection.
#[derive(Debug, Clone)]
pub struct SeaManagers {
    db: DatabaseConnection,
}

impl SeaManagers {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PrincipalStore for SeaManagers {
    async fn exists(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(exists(&self.db, id).await?)
    }
}

#[async_trait]
impl ManagerStore for SeaManagers {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Manager>, DomainError> {
        Ok(find_by_id(&self.db, id).await?.map(Manager::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Manager>, DomainError> {
        let model = find_by_email_normalized(&self.db, &normalize_email(email)).await?;
        Ok(model.map(Manager::from))
    }

    async fn insert(&self, manager: NewManager) -> Result<Manager, DomainError> {
        Ok(Manager::from(create(&self.db, manager).await?))
    }
}
