//! Profile domain - per-user account record holding role and email.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Timestamp, UserId};

/// Access level. Admins see every user's data and manage accounts; users see
/// only their own entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    /// Storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    /// Parses a storage value. Unlike tally buckets, an unknown role is an
    /// error: roles gate authorization and must never be guessed.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "user" => Some(Role::User),
            _ => None,
        }
    }

    /// Maps any requested role onto the allowed set: only an explicit
    /// `admin` grant survives, everything else becomes `user`.
    pub fn sanitize(requested: Option<Role>) -> Role {
        match requested {
            Some(Role::Admin) => Role::Admin,
            _ => Role::User,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-user record keyed by the auth directory account id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub user_id: UserId,
    pub email: Option<String>,
    pub role: Role,
    pub created_at: Timestamp,
}

impl Profile {
    /// Creates a new profile, stamped now.
    pub fn new(user_id: UserId, email: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            email: Some(email.into()),
            role,
            created_at: Timestamp::now(),
        }
    }
}
