//! RecordEntry - command handler for logging one drink event.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EntryId, UserId};
use crate::domain::tally::{DrinkEntry, DrinkKind, DrinkSize, TallyCounts};
use crate::ports::EntryRepository;

/// Command to log one drink event for the caller.
#[derive(Debug, Clone)]
pub struct RecordEntryCommand {
    pub user_id: UserId,
    pub kind: DrinkKind,
    pub size: DrinkSize,
}

/// Result of a successful insert: the new entry id plus the caller's
/// refreshed counts, so the client never needs a follow-up fetch.
#[derive(Debug, Clone)]
pub struct RecordEntryResult {
    pub entry_id: EntryId,
    pub counts: TallyCounts,
}

/// Handler for recording entries.
pub struct RecordEntryHandler {
    entries: Arc<dyn EntryRepository>,
}

impl RecordEntryHandler {
    pub fn new(entries: Arc<dyn EntryRepository>) -> Self {
        Self { entries }
    }

    pub async fn handle(&self, cmd: RecordEntryCommand) -> Result<RecordEntryResult, DomainError> {
        let entry = DrinkEntry::new(cmd.user_id, cmd.kind, cmd.size);
        let entry_id = entry.id;

        self.entries.insert(&entry).await?;

        // Fresh read inside the same invocation; replaces the client-side
        // re-fetch the original flow relied on.
        let rows = self.entries.list_for_user(&cmd.user_id).await?;
        let counts =
            TallyCounts::from_raw(rows.iter().map(|r| (r.kind.as_str(), r.size.as_str())));

        tracing::debug!(user_id = %cmd.user_id, kind = %cmd.kind, size = %cmd.size, "entry recorded");

        Ok(RecordEntryResult { entry_id, counts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RawEntryRow;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockEntryRepository {
        rows: Mutex<Vec<RawEntryRow>>,
    }

    impl MockEntryRepository {
        fn new() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl EntryRepository for MockEntryRepository {
        async fn insert(&self, entry: &DrinkEntry) -> Result<(), DomainError> {
            self.rows.lock().unwrap().push(RawEntryRow {
                user_id: entry.user_id,
                kind: entry.kind.as_str().to_string(),
                size: entry.size.as_str().to_string(),
            });
            Ok(())
        }

        async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<RawEntryRow>, DomainError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|r| &r.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn list_all(&self) -> Result<Vec<RawEntryRow>, DomainError> {
            unimplemented!()
        }

        async fn delete_latest_matching(
            &self,
            _user_id: &UserId,
            _kind: DrinkKind,
            _size: DrinkSize,
        ) -> Result<Option<EntryId>, DomainError> {
            unimplemented!()
        }

        async fn delete_for_user(&self, _user_id: &UserId) -> Result<u64, DomainError> {
            unimplemented!()
        }

        async fn delete_all(&self) -> Result<u64, DomainError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn record_entry_returns_refreshed_counts() {
        let repo = Arc::new(MockEntryRepository::new());
        let handler = RecordEntryHandler::new(repo.clone());
        let user_id = UserId::new();

        for _ in 0..3 {
            handler
                .handle(RecordEntryCommand {
                    user_id,
                    kind: DrinkKind::Beer,
                    size: DrinkSize::Small,
                })
                .await
                .unwrap();
        }

        let result = handler
            .handle(RecordEntryCommand {
                user_id,
                kind: DrinkKind::Beer,
                size: DrinkSize::Large,
            })
            .await
            .unwrap();

        assert_eq!(result.counts.beer_small, 3);
        assert_eq!(result.counts.beer_large, 1);
        assert_eq!(result.counts.beer_ml(), 1400);
    }

    #[tokio::test]
    async fn record_entry_only_counts_the_callers_rows() {
        let repo = Arc::new(MockEntryRepository::new());
        let handler = RecordEntryHandler::new(repo.clone());
        let alice = UserId::new();
        let bob = UserId::new();

        handler
            .handle(RecordEntryCommand {
                user_id: alice,
                kind: DrinkKind::Na,
                size: DrinkSize::Small,
            })
            .await
            .unwrap();

        let result = handler
            .handle(RecordEntryCommand {
                user_id: bob,
                kind: DrinkKind::Beer,
                size: DrinkSize::Large,
            })
            .await
            .unwrap();

        assert_eq!(result.counts.na_small, 0);
        assert_eq!(result.counts.beer_large, 1);
    }
}
