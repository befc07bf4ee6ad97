#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod trace_ctx;

// Re-exports for public API
pub use auth::{AuthError, AuthStage, Authenticator, Claims, Token, TokenSigner, SESSION_TTL};
pub use config::AppConfig;
pub use error::AppError;
pub use errors::DomainError;
pub use infra::db::connect_db;
pub use infra::state::StateBuilder;
pub use middleware::RequestSpan;
pub use state::{AdminState, AppState, ConsoleState, SecurityConfig};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    portal_test_support::logging::init();
}
