//! Shared plumbing for the client and product services: log setup,
//! response types that are not tied to either table, and request metrics.

pub mod types;
pub mod metrics;

pub mod utils {
    pub mod logging;
}
