//! Port for profile persistence.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::{Profile, Role};

/// Persistence operations for profiles.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Inserts or replaces the profile row for its user id.
    async fn upsert(&self, profile: &Profile) -> Result<(), DomainError>;

    /// Looks up one profile by user id.
    async fn find(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError>;

    /// All profiles, ordered by email.
    async fn list_all(&self) -> Result<Vec<Profile>, DomainError>;

    /// Sets the role for one user.
    ///
    /// Idempotent: setting the current role again succeeds without change.
    /// Fails with `UserNotFound` when no profile row exists.
    async fn update_role(&self, user_id: &UserId, role: Role) -> Result<(), DomainError>;

    /// Deletes the profile row. Succeeds even when no row exists, so the
    /// delete-user cascade can be re-run after a partial failure.
    async fn delete(&self, user_id: &UserId) -> Result<(), DomainError>;
}
