//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - PostgreSQL-backed repositories
//! - `auth` - Session validation and the auth directory client
//! - `http` - Axum routes, handlers, and DTOs

pub mod auth;
pub mod http;
pub mod postgres;
