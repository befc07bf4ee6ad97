//! Per-request session verification.

use std::fmt;
use std::sync::Arc;

use time::OffsetDateTime;
use uuid::Uuid;

use super::claims::Claims;
use super::error::AuthError;
use super::signer::TokenSigner;
use super::token::Token;
use crate::repos::PrincipalStore;

/// Lifetime of a freshly issued session.
pub const SESSION_TTL: time::Duration = time::Duration::hours(24);

/// Progress of one authorization attempt. Each stage is only reached after
/// every earlier check has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AuthStage {
    NoToken,
    TokenPresented,
    SignatureVerified,
    ClaimsValid,
    Authorized,
}

impl fmt::Display for AuthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AuthStage::NoToken => "no_token",
            AuthStage::TokenPresented => "token_presented",
            AuthStage::SignatureVerified => "signature_verified",
            AuthStage::ClaimsValid => "claims_valid",
            AuthStage::Authorized => "authorized",
        };
        f.write_str(s)
    }
}

/// Issues session tokens and checks presented ones against a principal store.
///
/// Holds no per-session state; two authenticators with different secrets
/// never accept each other's tokens.
pub struct Authenticator<S: PrincipalStore + ?Sized> {
    signer: TokenSigner,
    store: Arc<S>,
}

impl<S: PrincipalStore + ?Sized> Clone for Authenticator<S> {
    fn clone(&self) -> Self {
        Self {
            signer: self.signer.clone(),
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: PrincipalStore + ?Sized> fmt::Debug for Authenticator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authenticator")
            .field("signer", &self.signer)
            .finish_non_exhaustive()
    }
}

impl<S: PrincipalStore + ?Sized> Authenticator<S> {
    pub fn new(signer: TokenSigner, store: Arc<S>) -> Self {
        Self { signer, store }
    }

    pub fn signer(&self) -> &TokenSigner {
        &self.signer
    }

    /// Sign a session for `subject_id` valid for [`SESSION_TTL`] from `now`.
    pub fn issue_at(&self, subject_id: Uuid, now: OffsetDateTime) -> Result<Token, AuthError> {
        self.signer
            .sign(&Claims::expiring(subject_id, now, SESSION_TTL))
    }

    pub fn issue(&self, subject_id: Uuid) -> Result<Token, AuthError> {
        self.issue_at(subject_id, OffsetDateTime::now_utc())
    }

    /// Run the full check on a raw token as read from the transport.
    pub async fn authorize_at(
        &self,
        raw: Option<&str>,
        now: OffsetDateTime,
    ) -> Result<Claims, AuthError> {
        let mut stage = AuthStage::NoToken;
        let result = self.advance(raw, now, &mut stage).await;

        if let Err(err) = &result {
            tracing::debug!(stage = %stage, reason = err.kind(), "session rejected");
        }
        result
    }

    pub async fn authorize(&self, raw: Option<&str>) -> Result<Claims, AuthError> {
        self.authorize_at(raw, OffsetDateTime::now_utc()).await
    }

    async fn advance(
        &self,
        raw: Option<&str>,
        now: OffsetDateTime,
        stage: &mut AuthStage,
    ) -> Result<Claims, AuthError> {
        let raw = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(AuthError::MissingToken)?;
        *stage = AuthStage::TokenPresented;

        let token = Token::from_base64url_string(raw)?;
        let claims = self.signer.verify(&token)?;
        *stage = AuthStage::SignatureVerified;

        if claims.is_expired_at(now) {
            return Err(AuthError::TokenExpired);
        }
        *stage = AuthStage::ClaimsValid;

        if !self.store.exists(claims.subject_id).await? {
            return Err(AuthError::PrincipalNotFound);
        }
        *stage = AuthStage::Authorized;

        Ok(claims)
    }
}
