//! RemoveEntry - admin "subtract one" for a user's most recent matching entry.

use std::sync::Arc;

use crate::application::handlers::ensure_admin;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::tally::{DrinkKind, DrinkSize, TallyCounts};
use crate::ports::{EntryRepository, ProfileRepository};

/// Command to remove the newest entry matching (user, kind, size).
#[derive(Debug, Clone)]
pub struct RemoveEntryCommand {
    pub caller_id: UserId,
    pub user_id: UserId,
    pub kind: DrinkKind,
    pub size: DrinkSize,
}

/// Outcome of the subtraction. `removed` is false when no entry matched;
/// that is a reported no-op, not an error. `counts` is the target user's
/// refreshed tally either way.
#[derive(Debug, Clone)]
pub struct RemoveEntryResult {
    pub removed: bool,
    pub counts: TallyCounts,
}

/// Handler for subtract-one.
pub struct RemoveEntryHandler {
    profiles: Arc<dyn ProfileRepository>,
    entries: Arc<dyn EntryRepository>,
}

impl RemoveEntryHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, entries: Arc<dyn EntryRepository>) -> Self {
        Self { profiles, entries }
    }

    pub async fn handle(&self, cmd: RemoveEntryCommand) -> Result<RemoveEntryResult, DomainError> {
        ensure_admin(&*self.profiles, &cmd.caller_id).await?;

        let deleted = self
            .entries
            .delete_latest_matching(&cmd.user_id, cmd.kind, cmd.size)
            .await?;

        if let Some(entry_id) = &deleted {
            tracing::info!(user_id = %cmd.user_id, entry_id = %entry_id, "entry subtracted");
        }

        let rows = self.entries.list_for_user(&cmd.user_id).await?;
        let counts =
            TallyCounts::from_raw(rows.iter().map(|r| (r.kind.as_str(), r.size.as_str())));

        Ok(RemoveEntryResult {
            removed: deleted.is_some(),
            counts,
        })
    }
}
