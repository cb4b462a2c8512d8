//! ResetEntries - admin bulk delete of every entry for every user.

use std::sync::Arc;

use crate::application::handlers::ensure_admin;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{EntryRepository, ProfileRepository};

/// Command to wipe the whole ledger. Irreversible.
#[derive(Debug, Clone)]
pub struct ResetEntriesCommand {
    pub caller_id: UserId,
}

/// Number of rows removed by the reset.
#[derive(Debug, Clone)]
pub struct ResetEntriesResult {
    pub deleted: u64,
}

/// Handler for the bulk reset.
pub struct ResetEntriesHandler {
    profiles: Arc<dyn ProfileRepository>,
    entries: Arc<dyn EntryRepository>,
}

impl ResetEntriesHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, entries: Arc<dyn EntryRepository>) -> Self {
        Self { profiles, entries }
    }

    pub async fn handle(&self, cmd: ResetEntriesCommand) -> Result<ResetEntriesResult, DomainError> {
        ensure_admin(&*self.profiles, &cmd.caller_id).await?;

        let deleted = self.entries.delete_all().await?;
        tracing::warn!(deleted, "all drink entries reset");

        Ok(ResetEntriesResult { deleted })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EntryId, ErrorCode};
    use crate::domain::profile::{Profile, Role};
    use crate::domain::tally::{DrinkEntry, DrinkKind, DrinkSize};
    use crate::ports::RawEntryRow;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockProfileRepository {
        profiles: Vec<Profile>,
    }

    #[async_trait]
    impl ProfileRepository for MockProfileRepository {
        async fn upsert(&self, _profile: &Profile) -> Result<(), DomainError> {
            unimplemented!()
        }

        async fn find(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError> {
            Ok(self
                .profiles
                .iter()
                .find(|p| &p.user_id == user_id)
                .cloned())
        }

        async fn list_all(&self) -> Result<Vec<Profile>, DomainError> {
            unimplemented!()
        }

        async fn update_role(&self, _user_id: &UserId, _role: Role) -> Result<(), DomainError> {
            unimplemented!()
        }

        async fn delete(&self, _user_id: &UserId) -> Result<(), DomainError> {
            unimplemented!()
        }
    }

    struct MockEntryRepository {
        rows: Mutex<Vec<RawEntryRow>>,
    }

    #[async_trait]
    impl EntryRepository for MockEntryRepository {
        async fn insert(&self, _entry: &DrinkEntry) -> Result<(), DomainError> {
            unimplemented!()
        }

        async fn list_for_user(&self, _user_id: &UserId) -> Result<Vec<RawEntryRow>, DomainError> {
            unimplemented!()
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
            let mut rows = self.rows.lock().unwrap();
            let deleted = rows.len() as u64;
            rows.clear();
            Ok(deleted)
        }
    }

    #[tokio::test]
    async fn reset_deletes_everything_and_reports_count() {
        let admin = Profile::new(UserId::new(), "admin@example.com", Role::Admin);
        let rows = vec![
            RawEntryRow {
                user_id: UserId::new(),
                kind: "beer".to_string(),
                size: "large".to_string(),
            },
            RawEntryRow {
                user_id: UserId::new(),
                kind: "na".to_string(),
                size: "small".to_string(),
            },
        ];
        let entries = Arc::new(MockEntryRepository {
            rows: Mutex::new(rows),
        });

        let handler = ResetEntriesHandler::new(
            Arc::new(MockProfileRepository {
                profiles: vec![admin.clone()],
            }),
            entries.clone(),
        );

        let result = handler
            .handle(ResetEntriesCommand {
                caller_id: admin.user_id,
            })
            .await
            .unwrap();

        assert_eq!(result.deleted, 2);
        assert!(entries.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn reset_requires_admin() {
        let user = Profile::new(UserId::new(), "user@example.com", Role::User);
        let handler = ResetEntriesHandler::new(
            Arc::new(MockProfileRepository {
                profiles: vec![user.clone()],
            }),
            Arc::new(MockEntryRepository {
                rows: Mutex::new(vec![]),
            }),
        );

        let err = handler
            .handle(ResetEntriesCommand {
                caller_id: user.user_id,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Forbidden);
    }
}
