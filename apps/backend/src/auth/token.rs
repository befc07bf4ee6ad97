//! Opaque wire form of a signed session.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;

use super::error::AuthError;

const SEPARATOR: char = '.';

/// A claims payload together with its signature.
///
/// On the wire a token is `base64url(payload) "." base64url(signature)`.
/// Nothing about the token is trusted until a signer has verified it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub payload: Vec<u8>,
    pub signature: Vec<u8>,
}

impl Token {
    pub fn new(payload: Vec<u8>, signature: Vec<u8>) -> Self {
        Self { payload, signature }
    }

    pub fn to_base64url_string(&self) -> String {
        format!(
            "{}{SEPARATOR}{}",
            URL_SAFE.encode(&self.payload),
            URL_SAFE.encode(&self.signature)
        )
    }

    /// Parse the wire form. Any structural or encoding problem is reported
    /// as [`AuthError::MalformedPayload`].
    pub fn from_base64url_string(raw: &str) -> Result<Self, AuthError> {
        let (payload, signature) = raw
            .trim()
            .split_once(SEPARATOR)
            .ok_or(AuthError::MalformedPayload)?;

        if payload.is_empty() || signature.is_empty() || signature.contains(SEPARATOR) {
            return Err(AuthError::MalformedPayload);
        }

        let payload = URL_SAFE
            .decode(payload)
            .map_err(|_| AuthError::MalformedPayload)?;
        let signature = URL_SAFE
            .decode(signature)
            .map_err(|_| AuthError::MalformedPayload)?;

        Ok(Self { payload, signature })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64url_string())
    }
}

impl FromStr for Token {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base64url_string(s)
    }
}
