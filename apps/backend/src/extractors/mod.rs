pub mod admin_session;
pub mod console_session;
pub mod validated_json;

pub use admin_session::AdminSession;
pub use console_session::ConsoleSession;
pub use validated_json::ValidatedJson;
