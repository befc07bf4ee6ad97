use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use uuid::Uuid;

use crate::auth::Claims;
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AdminState;

/// Authenticated manager, taken from the session cookie.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub claims: Claims,
}

impl AdminSession {
    pub fn manager_id(&self) -> Uuid {
        self.claims.subject_id
    }
}

impl FromRequest for AdminSession {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AdminState>>().cloned();
        let token = state.as_ref().and_then(|s| s.cookie.token(req));

        Box::pin(async move {
            let state = state.ok_or_else(|| AppError::internal("AdminState not available"))?;

            let claims = state
                .auth
                .authorize(token.as_deref())
                .await
                .map_err(|e| {
                    security::session_rejected("admin", e.kind());
                    AppError::from(e)
                })?;

            Ok(AdminSession { claims })
        })
    }
}
