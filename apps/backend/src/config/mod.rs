pub mod app;

pub use app::{AppConfig, BindAddr, BootstrapManager};
