//! Drink entry value types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{EntryId, Timestamp, UserId};

/// Category of drink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkKind {
    /// Alcoholic.
    Beer,
    /// Non-alcoholic.
    Na,
}

impl DrinkKind {
    /// Storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DrinkKind::Beer => "beer",
            DrinkKind::Na => "na",
        }
    }

    /// Parses a storage value. Returns `None` for unrecognized values so
    /// callers can skip stale rows instead of failing the whole read.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "beer" => Some(DrinkKind::Beer),
            "na" => Some(DrinkKind::Na),
            _ => None,
        }
    }
}

impl fmt::Display for DrinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fixed-volume size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkSize {
    Small,
    Large,
}

impl DrinkSize {
    /// Storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DrinkSize::Small => "small",
            DrinkSize::Large => "large",
        }
    }

    /// Parses a storage value; `None` for unrecognized values.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "small" => Some(DrinkSize::Small),
            "large" => Some(DrinkSize::Large),
            _ => None,
        }
    }

    /// Volume of one serving in millilitres.
    pub fn volume_ml(&self) -> u64 {
        match self {
            DrinkSize::Small => super::ML_SMALL,
            DrinkSize::Large => super::ML_LARGE,
        }
    }
}

impl fmt::Display for DrinkSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One recorded drink event. Never mutated after insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinkEntry {
    pub id: EntryId,
    pub user_id: UserId,
    pub kind: DrinkKind,
    pub size: DrinkSize,
    pub created_at: Timestamp,
}

impl DrinkEntry {
    /// Creates a new entry for the given user, stamped now.
    pub fn new(user_id: UserId, kind: DrinkKind, size: DrinkSize) -> Self {
        Self {
            id: EntryId::new(),
            user_id,
            kind,
            size,
            created_at: Timestamp::now(),
        }
    }
}
