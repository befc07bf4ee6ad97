use std::sync::Arc;

use tracing::info;

use crate::adapters::{InMemoryClients, InMemoryManagers, SeaClients, SeaManagers};
use crate::config::BootstrapManager;
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::repos::{ClientStore, ManagerStore};
use crate::services::{CreateManager, ExternalTokenCheck, TrustingTokenCheck};
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    database_url: Option<String>,
    token_check: Arc<dyn ExternalTokenCheck>,
    bootstrap_manager: Option<BootstrapManager>,
}

impl StateBuilder {
    pub fn new(security_config: SecurityConfig) -> Self {
        Self {
            security_config,
            database_url: None,
            token_check: Arc::new(TrustingTokenCheck),
            bootstrap_manager: None,
        }
    }

    /// Back the stores with this database instead of in-memory maps.
    pub fn with_db(mut self, database_url: impl Into<String>) -> Self {
        self.database_url = Some(database_url.into());
        self
    }

    pub fn with_token_check(mut self, token_check: Arc<dyn ExternalTokenCheck>) -> Self {
        self.token_check = token_check;
        self
    }

    /// Seed this manager while building, unless its email is already taken.
    pub fn with_bootstrap_manager(mut self, manager: Option<BootstrapManager>) -> Self {
        self.bootstrap_manager = manager;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let (db, managers, clients): (_, Arc<dyn ManagerStore>, Arc<dyn ClientStore>) =
            match &self.database_url {
                Some(url) => {
                    // single entrypoint: connect + migrate
                    let conn = connect_db(url).await?;
                    (
                        Some(conn.clone()),
                        Arc::new(SeaManagers::new(conn.clone())),
                        Arc::new(SeaClients::new(conn)),
                    )
                }
                None => (
                    None,
                    Arc::new(InMemoryManagers::new()),
                    Arc::new(InMemoryClients::new()),
                ),
            };

        let state = AppState::new(
            db,
            &self.security_config,
            managers,
            clients,
            self.token_check,
        );

        if let Some(bootstrap) = self.bootstrap_manager {
            let created = state
                .admin
                .managers
                .ensure(CreateManager {
                    first_name: "Bootstrap".into(),
                    last_name: "Manager".into(),
                    email: bootstrap.email,
                    password: bootstrap.password,
                })
                .await?;
            info!(created, "bootstrap manager ensured");
        }

        Ok(state)
    }
}
