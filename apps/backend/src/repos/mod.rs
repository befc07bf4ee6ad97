//! Identity store boundaries.
//!
//! Services and the authenticator talk to these traits only. There is one
//! SeaORM implementation per table in `crate::adapters` and an in-memory
//! implementation for tests and local runs.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::domain::DomainError;

pub mod clients;
pub mod managers;

pub use clients::{Client, ClientStore, ClientUpdate};
pub use managers::{normalize_email, Manager, ManagerStore, NewManager};

/// Minimal capability the authenticator needs: does this principal still exist?
#[async_trait]
pub trait PrincipalStore: Send + Sync {
    async fn exists(&self, id: Uuid) -> Result<bool, DomainError>;
}
