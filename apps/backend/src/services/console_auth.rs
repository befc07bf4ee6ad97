//! Phone-based client login and session checks for the console API.

use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::auth::{AuthError, Authenticator, Claims, Token, TokenSigner};
use crate::logging::pii::Redacted;
use crate::repos::ClientStore;

/// Check of the one-time token a client receives out of band for its phone.
#[async_trait]
pub trait ExternalTokenCheck: Send + Sync {
    async fn verify(&self, phone: &str, token: &str) -> bool;
}

/// Accepts every token. Stands in until an SMS verification provider is wired.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrustingTokenCheck;

#[async_trait]
impl ExternalTokenCheck for TrustingTokenCheck {
    async fn verify(&self, _phone: &str, _token: &str) -> bool {
        true
    }
}

#[derive(Clone)]
pub struct ConsoleAuth {
    clients: Arc<dyn ClientStore>,
    token_check: Arc<dyn ExternalTokenCheck>,
    authenticator: Authenticator<dyn ClientStore>,
}

impl ConsoleAuth {
    pub fn new(
        signer: TokenSigner,
        clients: Arc<dyn ClientStore>,
        token_check: Arc<dyn ExternalTokenCheck>,
    ) -> Self {
        Self {
            authenticator: Authenticator::new(signer, Arc::clone(&clients)),
            clients,
            token_check,
        }
    }

    /// Log a client in by phone, registering it on first login.
    pub async fn login_at(
        &self,
        phone: &str,
        external_token: &str,
        now: OffsetDateTime,
    ) -> Result<Token, AuthError> {
        let phone = phone.trim();
        if phone.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        if !self.token_check.verify(phone, external_token).await {
            debug!(phone = %Redacted(phone), "external token rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let client_id = match self.clients.find_by_phone(phone).await? {
            Some(client) => client.id,
            None => self.clients.register_by_phone(phone).await?,
        };

        let token = self.authenticator.issue_at(client_id, now)?;
        info!(client_id = %client_id, "client logged in");
        Ok(token)
    }

    pub async fn login(&self, phone: &str, external_token: &str) -> Result<Token, AuthError> {
        self.login_at(phone, external_token, OffsetDateTime::now_utc())
            .await
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
