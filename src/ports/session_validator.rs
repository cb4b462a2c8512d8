//! Port for bearer token validation.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates a bearer token and extracts the caller.
///
/// Keeps the HTTP middleware provider-agnostic: the production adapter
/// checks the auth directory's JWT signature, tests use a mock.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
