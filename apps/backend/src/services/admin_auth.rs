//! Manager login and session checks for the admin portal.

use std::sync::{Arc, LazyLock};

use time::OffsetDateTime;
use tracing::{debug, info};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::{AuthError, Authenticator, Claims, Token, TokenSigner};
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::logging::pii::Redacted;
use crate::repos::ManagerStore;

/// Hash checked when the email is unknown, so both login failures cost one
/// argon2 verification.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("dummy-password-for-unknown-managers").ok());

/// Run a verification whose result is discarded.
fn burn_verification(password: &str) -> bool {
    match DUMMY_HASH.as_deref() {
        Some(hash) => {
            let _ = verify_password(password, hash);
            true
        }
        None => false,
    }
}

#[derive(Clone)]
pub struct AdminAuth {
    managers: Arc<dyn ManagerStore>,
    authenticator: Authenticator<dyn ManagerStore>,
}

impl AdminAuth {
    pub fn new(signer: TokenSigner, managers: Arc<dyn ManagerStore>) -> Self {
        Self {
            authenticator: Authenticator::new(signer, Arc::clone(&managers)),
            managers,
        }
    }

    /// Exchange email and password for a session token.
    ///
    /// Unknown email and wrong password are distinct errors here but render
    /// identically at the HTTP boundary.
    pub async fn login_at(
        &self,
        email: &str,
        password: &str,
        now: OffsetDateTime,
    ) -> Result<Token, AuthError> {
        let manager = match self.managers.find_by_email(email).await? {
            Some(m) => m,
            None => {
                burn_verification(password);
                debug!(email = %Redacted(email), "login for unknown manager");
                return Err(AuthError::NoSuchPrincipal);
            }
        };

        let matches = verify_password(password, &manager.password_hash).map_err(|e| {
            AuthError::Store(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("stored password hash is unusable: {e}"),
            ))
        })?;
        if !matches {
            debug!(manager_id = %manager.id, "manager password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.authenticator.issue_at(manager.id, now)?;
        info!(manager_id = %manager.id, "manager logged in");
        Ok(token)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Token, AuthError> {
        self.login_at(email, password, OffsetDateTime::now_utc()).await
    }

    pub async fn authorize_at(
        &self,
        raw: Option<&str>,
        now: OffsetDateTime,
    ) -> Result<Claims, AuthError> {
        self.authenticator.authorize_at(raw, now).await
    }

    pub async fn authorize(&self, raw: Option<&str>) -> Result<Claims, AuthError> {
        self.authenticator.authorize(raw).await
    }
}
