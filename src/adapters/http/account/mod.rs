//! HTTP adapter for account self-service endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AccountHandlers;
pub use routes::account_routes;
