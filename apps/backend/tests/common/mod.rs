#![allow(dead_code)]

use actix_web::body::BoxBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error as ActixError};
use portal_backend::services::CreateManager;
use portal_backend::{routes, AppState, RequestSpan, SecurityConfig, StateBuilder};
use portal_test_support::unique_helpers::unique_str;

// Logging is auto-installed for every test binary that includes `common`
#[ctor::ctor]
fn init_logging() {
    portal_test_support::logging::init();
}

/// Independent random secrets for each test.
pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(unique_str("admin"), unique_str("console"))
}

/// State backed by in-memory stores.
pub async fn memory_state() -> AppState {
    StateBuilder::new(test_security())
        .build()
        .await
        .expect("in-memory state should build")
}

/// State backed by a fresh, migrated SQLite in-memory database.
pub async fn sqlite_state() -> AppState {
    StateBuilder::new(test_security())
        .with_db("sqlite::memory:")
        .build()
        .await
        .expect("sqlite state should build")
}

pub async fn admin_app(
    state: &AppState,
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError> {
    let mut app = App::new()
        .wrap(RequestSpan)
        .app_data(web::Data::new(state.admin.clone()));
    if let Some(db) = state.db() {
        app = app.app_data(web::Data::new(db.clone()));
    }
    test::init_service(app.configure(routes::configure_admin)).await
}

pub async fn console_app(
    state: &AppState,
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError> {
    let mut app = App::new()
        .wrap(RequestSpan)
        .app_data(web::Data::new(state.console.clone()));
    if let Some(db) = state.db() {
        app = app.app_data(web::Data::new(db.clone()));
    }
    test::init_service(app.configure(routes::configure_console)).await
}

/// Create a manager with the given credentials and return its id.
pub async fn seed_manager(state: &AppState, email: &str, password: &str) -> uuid::Uuid {
    state
        .admin
        .managers
        .create(CreateManager {
            first_name: "Test".into(),
            last_name: "Manager".into(),
            email: email.into(),
            password: password.into(),
        })
        .await
        .expect("manager should be created")
        .id
}

/// The session cookie set by a response, if any.
pub fn session_cookie(resp: &ServiceResponse<BoxBody>, name: &str) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == name)
        .map(|c| c.into_owned())
}
