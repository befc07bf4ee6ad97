use std::fmt;

use crate::auth::{CookieSettings, TokenSigner};

/// Secrets and cookie settings for both boundaries.
///
/// The admin portal and the console sign with independent secrets so a
/// token minted on one is never accepted by the other.
#[derive(Clone)]
pub struct SecurityConfig {
    pub admin_secret: Vec<u8>,
    pub console_secret: Vec<u8>,
    pub cookie: CookieSettings,
}

impl SecurityConfig {
    pub fn new(admin_secret: impl Into<Vec<u8>>, console_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            admin_secret: admin_secret.into(),
            console_secret: console_secret.into(),
            cookie: CookieSettings::default(),
        }
    }

    pub fn with_cookie(mut self, cookie: CookieSettings) -> Self {
        self.cookie = cookie;
        self
    }

    pub fn admin_signer(&self) -> TokenSigner {
        TokenSigner::new(self.admin_secret.clone())
    }

    pub fn console_signer(&self) -> TokenSigner {
        TokenSigner::new(self.console_secret.clone())
    }

    /// Fresh random secrets, so tests never share keys.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(
            format!("admin-{}", uuid::Uuid::new_v4()),
            format!("console-{}", uuid::Uuid::new_v4()),
        )
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("admin_secret", &"[REDACTED]")
            .field("console_secret", &"[REDACTED]")
            .field("cookie", &self.cookie)
            .finish()
    }
}
