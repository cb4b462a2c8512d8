//! DTOs for admin endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::tally::dto::TallyCountsDto;
use crate::application::handlers::tally::{OverviewView, UserOverview};
use crate::domain::foundation::UserId;
use crate::domain::profile::{Profile, Role};

/// One user's row in the admin overview.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserOverviewDto {
    pub user_id: UserId,
    pub email: Option<String>,
    pub role: Role,
    pub counts: TallyCountsDto,
}

impl From<UserOverview> for UserOverviewDto {
    fn from(user: UserOverview) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email,
            role: user.role,
            counts: user.counts.into(),
        }
    }
}

/// Full admin overview: every user plus grand totals.
#[derive(Debug, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub users: Vec<UserOverviewDto>,
    pub totals: TallyCountsDto,
}

impl From<OverviewView> for OverviewResponse {
    fn from(view: OverviewView) -> Self {
        Self {
            users: view.users.into_iter().map(Into::into).collect(),
            totals: view.totals.into(),
        }
    }
}

/// Request to remove the newest matching entry for a user.
#[derive(Debug, Deserialize)]
pub struct RemoveEntryRequest {
    pub user_id: UserId,
    pub kind: String,
    pub size: String,
}

/// Result of a removal, with the target user's refreshed counts.
#[derive(Debug, Serialize, Deserialize)]
pub struct RemoveEntryResponse {
    pub removed: bool,
    pub counts: TallyCountsDto,
}

/// Result of a bulk reset.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResetEntriesResponse {
    pub deleted: u64,
}

/// One profile row in the admin user list.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileDto {
    pub user_id: UserId,
    pub email: Option<String>,
    pub role: Role,
    pub created_at: String,
}

impl From<Profile> for ProfileDto {
    fn from(profile: Profile) -> Self {
        Self {
            user_id: profile.user_id,
            email: profile.email,
            role: profile.role,
            created_at: profile.created_at.to_string(),
        }
    }
}

/// Request to invite a new user.
#[derive(Debug, Deserialize)]
pub struct InviteUserRequest {
    pub email: String,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Response to a successful invite.
#[derive(Debug, Serialize, Deserialize)]
pub struct InviteUserResponse {
    pub user_id: UserId,
}

/// Request to delete a user.
#[derive(Debug, Deserialize)]
pub struct DeleteUserRequest {
    pub user_id: UserId,
}

/// Response to a completed delete cascade.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub entries_deleted: u64,
}

/// Request to change a user's role.
#[derive(Debug, Deserialize)]
pub struct ChangeRoleRequest {
    pub user_id: UserId,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tally::TallyCounts;

    #[test]
    fn overview_response_carries_users_and_totals() {
        let user_id = UserId::new();
        let view = OverviewView {
            users: vec![UserOverview {
                user_id,
                email: Some("a@example.com".to_string()),
                role: Role::User,
                counts: TallyCounts {
                    beer_small: 2,
                    beer_large: 0,
                    na_small: 0,
                    na_large: 0,
                },
            }],
            totals: TallyCounts {
                beer_small: 2,
                beer_large: 0,
                na_small: 0,
                na_large: 0,
            },
        };

        let response = OverviewResponse::from(view);
        assert_eq!(response.users.len(), 1);
        assert_eq!(response.users[0].counts.beer_ml, 600);
        assert_eq!(response.totals.beer_litres, "0.6");
    }

    #[test]
    fn invite_request_role_defaults_to_none() {
        let req: InviteUserRequest =
            serde_json::from_str(r#"{"email": "a@example.com"}"#).unwrap();
        assert_eq!(req.role, None);
    }

    #[test]
    fn invite_request_rejects_unknown_role() {
        let result = serde_json::from_str::<InviteUserRequest>(
            r#"{"email": "a@example.com", "role": "root"}"#,
        );
        assert!(result.is_err());
    }
}
