//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod account;
pub mod admin;
pub mod error;
pub mod middleware;
pub mod tally;

// Re-export key types for convenience
pub use account::{account_routes, AccountHandlers};
pub use admin::{admin_routes, AdminHandlers};
pub use tally::{tally_routes, TallyHandlers};
