//! HMAC-SHA256 signing of session claims.

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::claims::Claims;
use super::error::AuthError;
use super::token::Token;

type HmacSha256 = Hmac<Sha256>;

/// Signs claims and verifies tokens with a single shared secret.
///
/// The MAC input is the base64url text of the payload, so a verifier only
/// needs the wire form to recompute it.
#[derive(Clone)]
pub struct TokenSigner {
    secret: Vec<u8>,
}

impl TokenSigner {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn sign(&self, claims: &Claims) -> Result<Token, AuthError> {
        let payload = claims.to_json()?;
        let signature = self.mac(&payload)?;
        Ok(Token::new(payload, signature))
    }

    /// Check the signature and decode the claims. Expiry is not checked here.
    pub fn verify(&self, token: &Token) -> Result<Claims, AuthError> {
        let expected = self.mac(&token.payload)?;
        if !bool::from(expected.as_slice().ct_eq(token.signature.as_slice())) {
            return Err(AuthError::InvalidSignature);
        }
        Claims::from_json(&token.payload)
    }

    fn mac(&self, payload: &[u8]) -> Result<Vec<u8>, AuthError> {
        use base64::engine::general_purpose::URL_SAFE;
        use base64::Engine;

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| AuthError::Serialization(format!("hmac key rejected: {e}")))?;
        mac.update(URL_SAFE.encode(payload).as_bytes());
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
