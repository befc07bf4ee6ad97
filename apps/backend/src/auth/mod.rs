//! Stateless session tokens.
//!
//! A session is a [`Claims`] value serialized to JSON, signed with
//! HMAC-SHA256 by a [`TokenSigner`] and carried by the client as an opaque
//! [`Token`] string. The server keeps no record of issued tokens; the
//! [`Authenticator`] re-verifies every presented token and checks that its
//! principal still exists.

pub mod authenticator;
pub mod claims;
pub mod cookie;
pub mod error;
pub mod password;
pub mod signer;
pub mod token;

pub use authenticator::{AuthStage, Authenticator, SESSION_TTL};
pub use claims::Claims;
pub use cookie::{CookieSettings, SessionCookie};
pub use error::AuthError;
pub use signer::TokenSigner;
pub use token::Token;
