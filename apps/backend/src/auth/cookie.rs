//! Browser transport for admin portal sessions.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;
use time::OffsetDateTime;

use super::authenticator::SESSION_TTL;
use super::token::Token;

pub const DEFAULT_COOKIE_NAME: &str = "admin_session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieSettings {
    pub name: String,
    pub secure: bool,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_COOKIE_NAME.to_string(),
            secure: false,
        }
    }
}

/// Reads and writes the session cookie for one configured cookie name.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    settings: CookieSettings,
}

impl SessionCookie {
    pub fn new(settings: CookieSettings) -> Self {
        Self { settings }
    }

    pub fn name(&self) -> &str {
        &self.settings.name
    }

    /// Raw token string carried by the request, if any.
    pub fn token(&self, req: &HttpRequest) -> Option<String> {
        req.cookie(&self.settings.name)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Cookie carrying `token`, expiring together with the session.
    pub fn issue(&self, token: &Token, now: OffsetDateTime) -> Cookie<'static> {
        self.base(token.to_base64url_string())
            .expires(now + SESSION_TTL)
            .finish()
    }

    /// Cookie that overwrites and expires the session cookie.
    pub fn removal(&self) -> Cookie<'static> {
        self.base(String::new())
            .expires(OffsetDateTime::UNIX_EPOCH)
            .finish()
    }

    fn base(&self, value: String) -> actix_web::cookie::CookieBuilder<'static> {
        Cookie::build(self.settings.name.clone(), value)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(self.settings.secure)
    }
}
