//! Command and query handlers, grouped by module.

pub mod tally;
pub mod user;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::profile::Profile;
use crate::ports::ProfileRepository;

/// Resolves the caller's profile and requires the admin role.
///
/// Role is read from the profile row on every call, never from token claims.
/// A caller without a profile row has the default `user` role and is refused.
pub async fn ensure_admin(
    profiles: &dyn ProfileRepository,
    caller_id: &UserId,
) -> Result<Profile, DomainError> {
    let profile = profiles
        .find(caller_id)
        .await?
        .ok_or_else(|| DomainError::new(ErrorCode::Forbidden, "Admin role required"))?;

    if !profile.role.is_admin() {
        return Err(DomainError::new(ErrorCode::Forbidden, "Admin role required"));
    }

    Ok(profile)
}
