//! Auth adapters - session validation and the auth directory client.

mod directory;
mod jwt;
pub mod mock;

pub use directory::{DirectoryClient, DirectoryConfig};
pub use jwt::{JwtConfig, JwtSessionValidator};
