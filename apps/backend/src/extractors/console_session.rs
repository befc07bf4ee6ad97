use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};
use uuid::Uuid;

use crate::auth::Claims;
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::ConsoleState;

/// Authenticated client, taken from the `Authorization` header.
#[derive(Debug, Clone)]
pub struct ConsoleSession {
    pub claims: Claims,
}

impl ConsoleSession {
    pub fn client_id(&self) -> Uuid {
        self.claims.subject_id
    }
}

/// Accepts `Bearer <token>` as well as a bare token.
fn token_from_header(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = match value.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        _ => value,
    };
    (!token.is_empty()).then_some(token)
}

impl FromRequest for ConsoleSession {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<ConsoleState>>().cloned();
        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(token_from_header)
            .map(str::to_string);

        Box::pin(async move {
            let state = state.ok_or_else(|| AppError::internal("ConsoleState not available"))?;

            let claims = state
                .auth
                .authorize(token.as_deref())
                .await
                .map_err(|e| {
                    security::session_rejected("console", e.kind());
                    AppError::from(e)
                })?;

            Ok(ConsoleSession { claims })
        })
    }
}
