pub mod clients;
pub mod managers;

pub use clients::Entity as Clients;
pub use clients::Model as Client;
pub use managers::Entity as Managers;
pub use managers::Model as Manager;
