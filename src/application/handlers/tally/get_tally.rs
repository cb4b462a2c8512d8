//! GetTally - query handler for the caller's own aggregates.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::tally::TallyCounts;
use crate::ports::EntryRepository;

/// Query for one user's bucket counts.
#[derive(Debug, Clone)]
pub struct GetTallyQuery {
    pub user_id: UserId,
}

/// Handler for reading a user's tally.
pub struct GetTallyHandler {
    entries: Arc<dyn EntryRepository>,
}

impl GetTallyHandler {
    pub fn new(entries: Arc<dyn EntryRepository>) -> Self {
        Self { entries }
    }

    pub async fn handle(&self, query: GetTallyQuery) -> Result<TallyCounts, DomainError> {
        let rows = self.entries.list_for_user(&query.user_id).await?;
        Ok(TallyCounts::from_raw(
            rows.iter().map(|r| (r.kind.as_str(), r.size.as_str())),
        ))
    }
}
