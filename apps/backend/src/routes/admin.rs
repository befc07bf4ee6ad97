//! Admin portal: cookie-based manager sessions.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::see_other;
use crate::error::AppError;
use crate::extractors::AdminSession;
use crate::logging::security;
use crate::repos::Manager;
use crate::state::app_state::AdminState;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<Manager> for ManagerResponse {
    fn from(m: Manager) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
        }
    }
}

async fn login(
    state: web::Data<AdminState>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let now = OffsetDateTime::now_utc();

    let token = state
        .auth
        .login_at(&form.email, &form.password, now)
        .await
        .map_err(|e| {
            security::login_failed("admin", e.kind(), &form.email);
            AppError::from(e)
        })?;

    Ok(see_other("/").cookie(state.cookie.issue(&token, now)).finish())
}

async fn logout(state: web::Data<AdminState>) -> HttpResponse {
    see_other("/login").cookie(state.cookie.removal()).finish()
}

async fn session(
    state: web::Data<AdminState>,
    session: AdminSession,
) -> Result<web::Json<ManagerResponse>, AppError> {
    let manager = state.managers.profile(session.manager_id()).await?;
    Ok(web::Json(manager.into()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::post().to(login))
        .route("/logout", web::post().to(logout))
        .route("/session", web::get().to(session));
}
