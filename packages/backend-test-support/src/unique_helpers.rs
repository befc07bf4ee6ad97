//! Unique test data so tests sharing a store never collide.

use uuid::Uuid;

/// Generate a unique string in the format `{prefix}-{uuid}`.
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// Generate a unique, lower-case email address under `example.com`.
pub fn unique_email(prefix: &str) -> String {
    format!("{}@example.com", unique_str(prefix))
}

/// Generate a unique phone-like string, e.g. `+380-5d1c9a02e4`.
pub fn unique_phone() -> String {
    let digits = Uuid::new_v4().simple().to_string();
    format!("+380-{}", &digits[..10])
}
