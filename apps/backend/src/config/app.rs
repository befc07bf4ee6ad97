//! Process configuration read from environment variables.

use std::env;
use std::fmt;

use crate::auth::cookie::DEFAULT_COOKIE_NAME;
use crate::auth::CookieSettings;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindAddr {
    pub host: String,
    pub port: u16,
}

impl fmt::Display for BindAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Manager account created at startup when it does not exist yet.
#[derive(Clone, PartialEq, Eq)]
pub struct BootstrapManager {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for BootstrapManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapManager")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub admin_bind: BindAddr,
    pub console_bind: BindAddr,
    pub database_url: String,
    pub security: SecurityConfig,
    pub bootstrap_manager: Option<BootstrapManager>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from any variable source; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let admin_bind = bind_addr(&lookup, "ADMIN_HOST", "ADMIN_PORT", 8080)?;
        let console_bind = bind_addr(&lookup, "CONSOLE_HOST", "CONSOLE_PORT", 8081)?;

        let admin_secret = must_var(&lookup, "ADMIN_TOKEN_SECRET")?;
        let console_secret = must_var(&lookup, "CONSOLE_TOKEN_SECRET")?;
        if admin_secret == console_secret {
            return Err(AppError::config(
                "ADMIN_TOKEN_SECRET and CONSOLE_TOKEN_SECRET must differ",
            ));
        }

        let cookie = CookieSettings {
            name: lookup("ADMIN_COOKIE_NAME")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string()),
            secure: flag(&lookup, "ADMIN_COOKIE_SECURE")?,
        };

        Ok(Self {
            admin_bind,
            console_bind,
            database_url: must_var(&lookup, "DATABASE_URL")?,
            security: SecurityConfig::new(admin_secret, console_secret).with_cookie(cookie),
            bootstrap_manager: bootstrap_manager(&lookup)?,
        })
    }
}

fn bind_addr<F>(
    lookup: &F,
    host_var: &str,
    port_var: &str,
    default_port: u16,
) -> Result<BindAddr, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let host = lookup(host_var).unwrap_or_else(|| "127.0.0.1".to_string());
    let port = match lookup(port_var) {
        Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
            AppError::config(format!("{port_var} must be a port number, got '{raw}'"))
        })?,
        None => default_port,
    };
    Ok(BindAddr { host, port })
}

/// `ADMIN_BOOTSTRAP_EMAIL` and `ADMIN_BOOTSTRAP_PASSWORD` are set together or not at all.
fn bootstrap_manager<F>(lookup: &F) -> Result<Option<BootstrapManager>, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let email = lookup("ADMIN_BOOTSTRAP_EMAIL").filter(|v| !v.trim().is_empty());
    let password = lookup("ADMIN_BOOTSTRAP_PASSWORD").filter(|v| !v.is_empty());

    match (email, password) {
        (Some(email), Some(password)) => Ok(Some(BootstrapManager {
            email: email.trim().to_string(),
            password,
        })),
        (None, None) => Ok(None),
        _ => Err(AppError::config(
            "ADMIN_BOOTSTRAP_EMAIL and ADMIN_BOOTSTRAP_PASSWORD must be set together",
        )),
    }
}

fn flag<F>(lookup: &F, name: &str) -> Result<bool, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name).as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some(v) => v
            .parse::<bool>()
            .map_err(|_| AppError::config(format!("{name} must be 'true' or 'false'"))),
    }
}

/// Get a required, non-empty variable or return error
fn must_var<F>(lookup: &F, name: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|v| !v.is_empty()).ok_or_else(|| {
        AppError::config(format!("Required environment variable '{name}' is not set"))
    })
}
