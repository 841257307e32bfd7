//! Product catalog: create, get, update, delete and list over `products`.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::Product;
pub use repository::{ProductRepository, SeaOrmProductRepository};
pub use service::ProductCatalog;
