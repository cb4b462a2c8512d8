//! HTTP adapter for personal tally endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::TallyHandlers;
pub use routes::tally_routes;
