//! GetOverview - admin query for every user's aggregates plus grand totals.

use std::sync::Arc;

use crate::application::handlers::ensure_admin;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::{Profile, Role};
use crate::domain::tally::{group_by_user, TallyCounts};
use crate::ports::{EntryRepository, ProfileRepository};

/// Admin query for the full overview.
#[derive(Debug, Clone)]
pub struct GetOverviewQuery {
    pub caller_id: UserId,
}

/// One user's slice of the overview.
#[derive(Debug, Clone)]
pub struct UserOverview {
    pub user_id: UserId,
    pub email: Option<String>,
    pub role: Role,
    pub counts: TallyCounts,
}

/// The full overview: per-user counts (profile order, zeroes for users with
/// no entries) and grand totals across all users.
#[derive(Debug, Clone)]
pub struct OverviewView {
    pub users: Vec<UserOverview>,
    pub totals: TallyCounts,
}

/// Handler for the admin overview.
pub struct GetOverviewHandler {
    profiles: Arc<dyn ProfileRepository>,
    entries: Arc<dyn EntryRepository>,
}

impl GetOverviewHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, entries: Arc<dyn EntryRepository>) -> Self {
        Self { profiles, entries }
    }

    pub async fn handle(&self, query: GetOverviewQuery) -> Result<OverviewView, DomainError> {
        ensure_admin(&*self.profiles, &query.caller_id).await?;

        let profiles = self.profiles.list_all().await?;
        let rows = self.entries.list_all().await?;

        let mut by_user = group_by_user(
            rows.iter()
                .map(|r| (r.user_id, r.kind.as_str(), r.size.as_str())),
        );

        let mut totals = TallyCounts::zero();
        let users = profiles
            .into_iter()
            .map(|profile: Profile| {
                let counts = by_user.remove(&profile.user_id).unwrap_or_default();
                totals = totals.merge(&counts);
                UserOverview {
                    user_id: profile.user_id,
                    email: profile.email,
                    role: profile.role,
                    counts,
                }
            })
            .collect();

        // Entries whose user has no profile row should not exist (FK), but
        // if the invariant is ever broken they still count toward totals.
        for (_, counts) in by_user {
            totals = totals.merge(&counts);
        }

        Ok(OverviewView { users, totals })
    }
}
