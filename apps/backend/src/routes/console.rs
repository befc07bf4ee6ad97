//! Console API: header-based client sessions.

use actix_web::web;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::extractors::{ConsoleSession, ValidatedJson};
use crate::logging::security;
use crate::repos::{Client, ClientUpdate};
use crate::state::app_state::ConsoleState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub phone: String,
    /// One-time token delivered to the phone out of band.
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateClientRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<UpdateClientRequest> for ClientUpdate {
    fn from(r: UpdateClientRequest) -> Self {
        Self {
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            phone: r.phone,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id: Uuid,
    pub phone: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl From<Client> for ClientResponse {
    fn from(c: Client) -> Self {
        Self {
            id: c.id,
            phone: c.phone,
            first_name: c.first_name,
            last_name: c.last_name,
            email: c.email,
        }
    }
}

async fn login(
    state: web::Data<ConsoleState>,
    body: ValidatedJson<LoginRequest>,
) -> Result<web::Json<LoginResponse>, AppError> {
    let body = body.into_inner();
    if body.phone.trim().is_empty() {
        return Err(AppError::invalid("VALIDATION_ERROR", "phone is required"));
    }

    let token = state
        .auth
        .login(&body.phone, &body.token)
        .await
        .map_err(|e| {
            security::login_failed("console", e.kind(), &body.phone);
            AppError::from(e)
        })?;

    Ok(web::Json(LoginResponse {
        token: token.to_string(),
    }))
}

async fn me(
    state: web::Data<ConsoleState>,
    session: ConsoleSession,
) -> Result<web::Json<ClientResponse>, AppError> {
    let client = state.clients.profile(session.client_id()).await?;
    Ok(web::Json(client.into()))
}

async fn update(
    state: web::Data<ConsoleState>,
    session: ConsoleSession,
    body: ValidatedJson<UpdateClientRequest>,
) -> Result<web::Json<ClientResponse>, AppError> {
    let client = state
        .clients
        .update(session.client_id(), body.into_inner().into())
        .await?;
    Ok(web::Json(client.into()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/login", web::post().to(login))
        .route("/clients/me", web::get().to(me))
        .route("/clients", web::patch().to(update));
}
