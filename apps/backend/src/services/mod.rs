pub mod admin_auth;
pub mod clients;
pub mod console_auth;
pub mod managers;

pub use admin_auth::AdminAuth;
pub use clients::ClientsService;
pub use console_auth::{ConsoleAuth, ExternalTokenCheck, TrustingTokenCheck};
pub use managers::{CreateManager, ManagersService};
