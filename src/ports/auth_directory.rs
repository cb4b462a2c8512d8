//! Port for the hosted auth directory's privileged admin API.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

/// Privileged account operations against the hosted auth directory.
///
/// These run with a service-role credential distinct from the per-request
/// bearer tokens; the adapter holds that key, handlers never see it.
#[async_trait]
pub trait AuthDirectory: Send + Sync {
    /// Creates an account for the email and dispatches the invite email.
    /// Returns the new account id.
    async fn invite_by_email(&self, email: &str) -> Result<UserId, DomainError>;

    /// Permanently deletes the account.
    async fn delete_account(&self, user_id: &UserId) -> Result<(), DomainError>;

    /// Sets a new password on the account.
    async fn set_password(&self, user_id: &UserId, password: &str) -> Result<(), DomainError>;
}
