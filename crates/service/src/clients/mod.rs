//! Client registry: create, get, update, delete and list over `clients`.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::Client;
pub use repository::{ClientRepository, SeaOrmClientRepository};
pub use service::ClientRegistry;
