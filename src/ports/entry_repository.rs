//! Port for drink entry persistence.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EntryId, UserId};
use crate::domain::tally::{DrinkEntry, DrinkKind, DrinkSize};

/// One stored row with its kind/size still in storage form.
///
/// Aggregation parses these and silently skips combinations outside the
/// current enums, so reads never fail on stale data.
#[derive(Debug, Clone)]
pub struct RawEntryRow {
    pub user_id: UserId,
    pub kind: String,
    pub size: String,
}

/// Persistence operations for drink entries.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Inserts one entry. Entries are append-only.
    async fn insert(&self, entry: &DrinkEntry) -> Result<(), DomainError>;

    /// All rows for one user, unordered.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<RawEntryRow>, DomainError>;

    /// All rows for all users, unordered.
    async fn list_all(&self) -> Result<Vec<RawEntryRow>, DomainError>;

    /// Deletes the most recently created entry matching (user, kind, size).
    ///
    /// Returns the deleted entry's id, or `None` when nothing matched
    /// (a reported no-op, not an error).
    async fn delete_latest_matching(
        &self,
        user_id: &UserId,
        kind: DrinkKind,
        size: DrinkSize,
    ) -> Result<Option<EntryId>, DomainError>;

    /// Deletes every entry belonging to one user. Returns the count removed.
    async fn delete_for_user(&self, user_id: &UserId) -> Result<u64, DomainError>;

    /// Deletes every entry unconditionally. Returns the count removed.
    async fn delete_all(&self) -> Result<u64, DomainError>;
}
