use thiserror::Error;

use crate::errors::domain::DomainError;

/// Everything that can go wrong while issuing or checking a session.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no session token presented")]
    MissingToken,
    #[error("session token payload is malformed")]
    MalformedPayload,
    #[error("session token signature is invalid")]
    InvalidSignature,
    #[error("session token has expired")]
    TokenExpired,
    #[error("session principal no longer exists")]
    PrincipalNotFound,
    #[error("no principal matches the presented identifier")]
    NoSuchPrincipal,
    #[error("presented credentials do not match")]
    InvalidCredentials,
    #[error("failed to serialize claims: {0}")]
    Serialization(String),
    #[error("identity store failure: {0}")]
    Store(#[from] DomainError),
}

impl AuthError {
    /// Short label used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "missing_token",
            AuthError::MalformedPayload => "malformed_payload",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::TokenExpired => "token_expired",
            AuthError::PrincipalNotFound => "principal_not_found",
            AuthError::NoSuchPrincipal => "no_such_principal",
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::Serialization(_) => "serialization",
            AuthError::Store(_) => "store",
        }
    }
}
