//! SetPassword - relays the caller's new password to the auth directory.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::AuthDirectory;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

/// Command to set the caller's own password (after following an invite link).
#[derive(Debug, Clone)]
pub struct SetPasswordCommand {
    pub user_id: UserId,
    pub password: String,
}

/// Handler for password updates. No admin gate: callers change their own
/// password only.
pub struct SetPasswordHandler {
    directory: Arc<dyn AuthDirectory>,
}

impl SetPasswordHandler {
    pub fn new(directory: Arc<dyn AuthDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(&self, cmd: SetPasswordCommand) -> Result<(), DomainError> {
        if cmd.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(DomainError::validation(
                "password",
                format!("must be at least {} characters", MIN_PASSWORD_LEN),
            ));
        }

        self.directory
            .set_password(&cmd.user_id, &cmd.password)
            .await
    }
}
