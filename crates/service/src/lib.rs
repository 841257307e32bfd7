//! Service layer for the client registry and the product catalog.
//! - Each service is a thin façade over one table: one statement per call.
//! - Storage sits behind a repository trait so handlers get an injected
//!   handle (SeaORM in production, in-memory in tests).
//! - Missing rows surface as `ServiceError::NotFound`, storage failures as
//!   `ServiceError::Db`.

pub mod errors;
pub mod clients;
pub mod products;
#[cfg(test)]
pub mod test_support;
