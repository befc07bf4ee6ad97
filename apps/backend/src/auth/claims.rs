//! Identity assertion carried inside a session token.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::error::AuthError;

/// Claims signed by the server and used for authentication.
///
/// `expires_at == None` means the claims never expire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Manager or client id
    #[serde(rename = "id")]
    pub subject_id: Uuid,
    #[serde(
        rename = "expiresAt",
        default,
        with = "time::serde::rfc3339::option"
    )]
    pub expires_at: Option<OffsetDateTime>,
}

impl Claims {
    pub fn new(subject_id: Uuid, expires_at: Option<OffsetDateTime>) -> Self {
        Self {
            subject_id,
            expires_at,
        }
    }

    /// Claims that are valid until `now + ttl`.
    pub fn expiring(subject_id: Uuid, now: OffsetDateTime, ttl: time::Duration) -> Self {
        Self::new(subject_id, Some(now + ttl))
    }

    /// Claims are still valid only while `expires_at` is strictly after `now`.
    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        matches!(self.expires_at, Some(expires_at) if expires_at <= now)
    }

    /// JSON representation used as the token payload.
    pub fn to_json(&self) -> Result<Vec<u8>, AuthError> {
        serde_json::to_vec(self).map_err(|e| AuthError::Serialization(e.to_string()))
    }

    pub fn from_json(data: &[u8]) -> Result<Self, AuthError> {
        serde_json::from_slice(data).map_err(|_| AuthError::MalformedPayload)
    }
}
