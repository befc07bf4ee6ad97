//! Store implementations.
//!
//! `*_sea` modules hold SeaORM free functions generic over `ConnectionTrait`
//! plus the store type that wires them to the repo traits. `memory` holds
//! map-backed stores.

pub mod clients_sea;
pub mod managers_sea;
pub mod memory;

pub use clients_sea::SeaClients;
pub use managers_sea::SeaManagers;
pub use memory::{InMemoryClients, InMemoryManagers};
