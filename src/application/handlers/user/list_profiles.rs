//! ListProfiles - admin query for every account.

use std::sync::Arc;

use crate::application::handlers::ensure_admin;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::Profile;
use crate::ports::ProfileRepository;

/// Admin query for the full profile list.
#[derive(Debug, Clone)]
pub struct ListProfilesQuery {
    pub caller_id: UserId,
}

/// Handler for listing profiles.
pub struct ListProfilesHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl ListProfilesHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(&self, query: ListProfilesQuery) -> Result<Vec<Profile>, DomainError> {
        ensure_admin(&*self.profiles, &query.caller_id).await?;
        self.profiles.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::profile::Role;
    use async_trait::async_trait;

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
            Ok(self.profiles.clone())
        }

        async fn update_role(&self, _user_id: &UserId, _role: Role) -> Result<(), DomainError> {
            unimplemented!()
        }

        async fn delete(&self, _user_id: &UserId) -> Result<(), DomainError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn admin_sees_all_profiles() {
        let admin = Profile::new(UserId::new(), "admin@example.com", Role::Admin);
        let user = Profile::new(UserId::new(), "user@example.com", Role::User);
        let handler = ListProfilesHandler::new(Arc::new(MockProfileRepository {
            profiles: vec![admin.clone(), user],
        }));

        let profiles = handler
            .handle(ListProfilesQuery {
                caller_id: admin.user_id,
            })
            .await
            .unwrap();

        assert_eq!(profiles.len(), 2);
    }

    #[tokio::test]
    async fn plain_user_is_refused() {
        let user = Profile::new(UserId::new(), "user@example.com", Role::User);
        let handler = ListProfilesHandler::new(Arc::new(MockProfileRepository {
            profiles: vec![user.clone()],
        }));

        let err = handler
            .handle(ListProfilesQuery {
                caller_id: user.user_id,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Forbidden);
    }
}
