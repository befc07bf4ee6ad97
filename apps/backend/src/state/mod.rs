pub mod app_state;
pub mod security_config;

pub use app_state::{AdminState, AppState, ConsoleState};
pub use security_config::SecurityConfig;
