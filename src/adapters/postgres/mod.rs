//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresEntryRepository` - Drink entry storage and targeted deletion
//! - `PostgresProfileRepository` - Profile rows keyed by auth user id

mod entry_repository;
mod profile_repository;

pub use entry_repository::PostgresEntryRepository;
pub use profile_repository::PostgresProfileRepository;
