//! ChangeRole - admin command flipping one user's role.

use std::sync::Arc;

use crate::application::handlers::ensure_admin;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::Role;
use crate::ports::ProfileRepository;

/// Command to set a user's role. Idempotent.
#[derive(Debug, Clone)]
pub struct ChangeRoleCommand {
    pub caller_id: UserId,
    pub user_id: UserId,
    pub role: Role,
}

/// Handler for role changes.
pub struct ChangeRoleHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl ChangeRoleHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(&self, cmd: ChangeRoleCommand) -> Result<(), DomainError> {
        ensure_admin(&*self.profiles, &cmd.caller_id).await?;

        self.profiles.update_role(&cmd.user_id, cmd.role).await?;
        tracing::info!(user_id = %cmd.user_id, role = %cmd.role, "role changed");
        Ok(())
    }
}
