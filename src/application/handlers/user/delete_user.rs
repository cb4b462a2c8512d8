//! DeleteUser - admin command cascading entries, profile, then auth account.

use std::sync::Arc;

use crate::application::handlers::ensure_admin;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::{AuthDirectory, EntryRepository, ProfileRepository};

/// Command to delete one user and everything they own.
#[derive(Debug, Clone)]
pub struct DeleteUserCommand {
    pub caller_id: UserId,
    pub user_id: UserId,
}

/// Result of the cascade.
#[derive(Debug, Clone)]
pub struct DeleteUserResult {
    pub entries_deleted: u64,
}

/// Handler for user deletion.
///
/// The cascade runs entries -> profile -> auth account and stops at the
/// first failure with a step-prefixed message. There is no compensating
/// transaction; every step tolerates already-deleted targets, so the
/// recovery path for a partial failure is to re-run the request.
pub struct DeleteUserHandler {
    profiles: Arc<dyn ProfileRepository>,
    entries: Arc<dyn EntryRepository>,
    directory: Arc<dyn AuthDirectory>,
}

impl DeleteUserHandler {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        entries: Arc<dyn EntryRepository>,
        directory: Arc<dyn AuthDirectory>,
    ) -> Self {
        Self {
            profiles,
            entries,
            directory,
        }
    }

    pub async fn handle(&self, cmd: DeleteUserCommand) -> Result<DeleteUserResult, DomainError> {
        ensure_admin(&*self.profiles, &cmd.caller_id).await?;

        if cmd.user_id == cmd.caller_id {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                "Cannot delete your own account",
            ));
        }

        let entries_deleted = self
            .entries
            .delete_for_user(&cmd.user_id)
            .await
            .map_err(|e| e.with_step("entries"))?;

        self.profiles
            .delete(&cmd.user_id)
            .await
            .map_err(|e| e.with_step("profile"))?;

        self.directory
            .delete_account(&cmd.user_id)
            .await
            .map_err(|e| e.with_step("auth"))?;

        tracing::info!(user_id = %cmd.user_id, entries_deleted, "user deleted");

        Ok(DeleteUserResult { entries_deleted })
    }
}
