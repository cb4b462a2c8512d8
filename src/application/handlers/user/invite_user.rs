//! InviteUser - admin command creating an auth account and its profile.

use std::sync::Arc;

use crate::application::handlers::ensure_admin;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::{Profile, Role};
use crate::ports::{AuthDirectory, ProfileRepository};

/// Command to invite a new user by email.
#[derive(Debug, Clone)]
pub struct InviteUserCommand {
    pub caller_id: UserId,
    pub email: String,
    pub role: Option<Role>,
}

/// Result of a successful invite.
#[derive(Debug, Clone)]
pub struct InviteUserResult {
    pub user_id: UserId,
}

/// Handler for inviting users.
///
/// Two steps: the directory creates the account and sends the invite email,
/// then the profile row is upserted with the sanitized role. A step-2
/// failure leaves the auth account orphaned; the error carries a `profile:`
/// prefix so the operator can re-run or clean up by hand.
pub struct InviteUserHandler {
    profiles: Arc<dyn ProfileRepository>,
    directory: Arc<dyn AuthDirectory>,
}

impl InviteUserHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, directory: Arc<dyn AuthDirectory>) -> Self {
        Self { profiles, directory }
    }

    pub async fn handle(&self, cmd: InviteUserCommand) -> Result<InviteUserResult, DomainError> {
        ensure_admin(&*self.profiles, &cmd.caller_id).await?;

        let email = cmd.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::validation("email", "valid email required"));
        }

        let user_id = self.directory.invite_by_email(email).await?;

        let role = Role::sanitize(cmd.role);
        let profile = Profile::new(user_id, email, role);
        self.profiles
            .upsert(&profile)
            .await
            .map_err(|e| e.with_step("profile"))?;

        tracing::info!(user_id = %user_id, role = %role, "user invited");

        Ok(InviteUserResult { user_id })
    }
}
