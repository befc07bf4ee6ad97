use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::auth::SessionCookie;
use crate::repos::{ClientStore, ManagerStore};
use crate::services::{
    AdminAuth, ClientsService, ConsoleAuth, ExternalTokenCheck, ManagersService,
};

/// Shared resources of the admin portal server.
#[derive(Clone)]
pub struct AdminState {
    pub auth: AdminAuth,
    pub managers: ManagersService,
    pub cookie: SessionCookie,
}

/// Shared resources of the console API server.
#[derive(Clone)]
pub struct ConsoleState {
    pub auth: ConsoleAuth,
    pub clients: ClientsService,
}

/// Everything the process shares across both servers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection (absent when running on in-memory stores)
    pub db: Option<DatabaseConnection>,
    pub admin: AdminState,
    pub console: ConsoleState,
}

impl AppState {
    pub fn new(
        db: Option<DatabaseConnection>,
        security: &SecurityConfig,
        managers: Arc<dyn ManagerStore>,
        clients: Arc<dyn ClientStore>,
        token_check: Arc<dyn ExternalTokenCheck>,
    ) -> Self {
        let admin = AdminState {
            auth: AdminAuth::new(security.admin_signer(), Arc::clone(&managers)),
            managers: ManagersService::new(managers),
            cookie: SessionCookie::new(security.cookie.clone()),
        };
        let console = ConsoleState {
            auth: ConsoleAuth::new(security.console_signer(), Arc::clone(&clients), token_check),
            clients: ClientsService::new(clients),
        };
        Self { db, admin, console }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
