//! Mock authentication adapters for testing.
//!
//! These adapters implement the `SessionValidator` and `AuthDirectory` ports
//! for use in tests, avoiding a real token secret or a live directory.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, DomainError, ErrorCode, UserId};
use crate::ports::{AuthDirectory, SessionValidator};

/// Mock session validator for testing.
///
/// Stores a map of tokens to users. Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    /// Map of valid tokens to their associated users
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
}

impl MockSessionValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.write().unwrap().insert(token.into(), user);
        self
    }

    /// Adds a valid token for a fresh user, returning the user's id.
    pub fn with_fresh_user(self, token: impl Into<String>) -> (Self, UserId) {
        let user_id = UserId::new();
        let user = AuthenticatedUser {
            id: user_id,
            email: Some(format!("{}@test.example.com", user_id)),
        };
        (self.with_user(token, user), user_id)
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.tokens
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

/// Mock auth directory for testing.
///
/// Records every call and hands out fresh ids for invites. An optional error
/// makes any operation fail, for exercising partial-failure paths.
#[derive(Debug, Default)]
pub struct MockAuthDirectory {
    invited: RwLock<Vec<String>>,
    deleted: RwLock<Vec<UserId>>,
    passwords: RwLock<Vec<(UserId, String)>>,
    fail_with: RwLock<Option<String>>,
}

impl MockAuthDirectory {
    /// Creates a new mock directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every operation fail with the given message.
    pub fn failing(self, message: impl Into<String>) -> Self {
        *self.fail_with.write().unwrap() = Some(message.into());
        self
    }

    /// Emails passed to `invite_by_email` so far.
    pub fn invited(&self) -> Vec<String> {
        self.invited.read().unwrap().clone()
    }

    /// Accounts deleted so far.
    pub fn deleted(&self) -> Vec<UserId> {
        self.deleted.read().unwrap().clone()
    }

    /// Password updates so far.
    pub fn passwords(&self) -> Vec<(UserId, String)> {
        self.passwords.read().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if let Some(message) = self.fail_with.read().unwrap().clone() {
            return Err(DomainError::new(ErrorCode::AuthDirectoryError, message));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthDirectory for MockAuthDirectory {
    async fn invite_by_email(&self, email: &str) -> Result<UserId, DomainError> {
        self.check_failure()?;
        self.invited.write().unwrap().push(email.to_string());
        Ok(UserId::new())
    }

    async fn delete_account(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.check_failure()?;
        self.deleted.write().unwrap().push(*user_id);
        Ok(())
    }

    async fn set_password(&self, user_id: &UserId, password: &str) -> Result<(), DomainError> {
        self.check_failure()?;
        self.passwords
            .write()
            .unwrap()
            .push((*user_id, password.to_string()));
        Ok(())
    }
}
