//! The aggregation core: bucket counts and volume totals.
//!
//! Entries are bucketed into four (kind, size) categories and converted to
//! volume with fixed per-size constants. Aggregation is pure; persistence
//! hands it raw string pairs so rows written with values outside the current
//! enums are skipped rather than failing the read.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

use super::{DrinkKind, DrinkSize};

/// Millilitres in one small serving.
pub const ML_SMALL: u64 = 300;
/// Millilitres in one large serving.
pub const ML_LARGE: u64 = 500;
/// Millilitres per litre.
pub const LITRE_DIVISOR: u64 = 1000;

/// Converts millilitres to litres rounded to one decimal place.
pub fn litres(ml: u64) -> f64 {
    (ml as f64 * 10.0 / LITRE_DIVISOR as f64).round() / 10.0
}

/// Per-user bucket counts for the four (kind, size) categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyCounts {
    pub beer_small: u64,
    pub beer_large: u64,
    pub na_small: u64,
    pub na_large: u64,
}

impl TallyCounts {
    /// All-zero counts.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Increments the bucket for one (kind, size) pair.
    pub fn add(&mut self, kind: DrinkKind, size: DrinkSize) {
        match (kind, size) {
            (DrinkKind::Beer, DrinkSize::Small) => self.beer_small += 1,
            (DrinkKind::Beer, DrinkSize::Large) => self.beer_large += 1,
            (DrinkKind::Na, DrinkSize::Small) => self.na_small += 1,
            (DrinkKind::Na, DrinkSize::Large) => self.na_large += 1,
        }
    }

    /// Builds counts from typed pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (DrinkKind, DrinkSize)>) -> Self {
        let mut counts = Self::zero();
        for (kind, size) in pairs {
            counts.add(kind, size);
        }
        counts
    }

    /// Builds counts from raw storage values, skipping unrecognized pairs.
    pub fn from_raw<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut counts = Self::zero();
        for (kind, size) in pairs {
            if let (Some(kind), Some(size)) = (DrinkKind::parse(kind), DrinkSize::parse(size)) {
                counts.add(kind, size);
            }
        }
        counts
    }

    /// Total beer volume in millilitres.
    pub fn beer_ml(&self) -> u64 {
        self.beer_small * ML_SMALL + self.beer_large * ML_LARGE
    }

    /// Total non-alcoholic volume in millilitres.
    pub fn na_ml(&self) -> u64 {
        self.na_small * ML_SMALL + self.na_large * ML_LARGE
    }

    /// Combined volume in millilitres.
    pub fn total_ml(&self) -> u64 {
        self.beer_ml() + self.na_ml()
    }

    /// True when every bucket is zero.
    pub fn is_empty(&self) -> bool {
        *self == Self::zero()
    }

    /// Bucket-wise sum, used for grand totals across users.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            beer_small: self.beer_small + other.beer_small,
            beer_large: self.beer_large + other.beer_large,
            na_small: self.na_small + other.na_small,
            na_large: self.na_large + other.na_large,
        }
    }
}

/// Groups raw (user, kind, size) rows into per-user counts.
///
/// Users appear only if they have at least one recognizable row; callers
/// merging with the profile list fill in zeroes for the rest.
pub fn group_by_user<'a>(
    rows: impl IntoIterator<Item = (UserId, &'a str, &'a str)>,
) -> BTreeMap<UserId, TallyCounts> {
    let mut map: BTreeMap<UserId, TallyCounts> = BTreeMap::new();
    for (user_id, kind, size) in rows {
        if let (Some(kind), Some(size)) = (DrinkKind::parse(kind), DrinkSize::parse(size)) {
            map.entry(user_id).or_default().add(kind, size);
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_input_yields_all_zero_stats() {
        let counts = TallyCounts::from_pairs([]);
        assert!(counts.is_empty());
        assert_eq!(counts.total_ml(), 0);
        assert_eq!(litres(counts.beer_ml()), 0.0);
    }

    #[test]
    fn example_scenario_three_small_one_large_beer() {
        // 3 beer-small + 1 beer-large => (3*300 + 1*500) / 1000 = 1.4 L
        let counts = TallyCounts::from_pairs([
            (DrinkKind::Beer, DrinkSize::Small),
            (DrinkKind::Beer, DrinkSize::Small),
            (DrinkKind::Beer, DrinkSize::Small),
            (DrinkKind::Beer, DrinkSize::Large),
        ]);
        assert_eq!(counts.beer_small, 3);
        assert_eq!(counts.beer_large, 1);
        assert_eq!(counts.beer_ml(), 1400);
        assert_eq!(litres(counts.beer_ml()), 1.4);
    }

    #[test]
    fn unknown_raw_pairs_do_not_affect_any_bucket() {
        let counts = TallyCounts::from_raw([
            ("beer", "small"),
            ("wine", "small"),
            ("beer", "medium"),
            ("", ""),
            ("na", "large"),
        ]);
        assert_eq!(counts.beer_small, 1);
        assert_eq!(counts.na_large, 1);
        assert_eq!(counts.beer_large, 0);
        assert_eq!(counts.na_small, 0);
    }

    #[test]
    fn merge_sums_bucket_wise() {
        let a = TallyCounts {
            beer_small: 1,
            beer_large: 2,
            na_small: 0,
            na_large: 3,
        };
        let b = TallyCounts {
            beer_small: 4,
            beer_large: 0,
            na_small: 5,
            na_large: 1,
        };
        let merged = a.merge(&b);
        assert_eq!(merged.beer_small, 5);
        assert_eq!(merged.beer_large, 2);
        assert_eq!(merged.na_small, 5);
        assert_eq!(merged.na_large, 4);
        assert_eq!(merged.total_ml(), a.total_ml() + b.total_ml());
    }

    #[test]
    fn group_by_user_separates_users() {
        let alice = UserId::new();
        let bob = UserId::new();
        let map = group_by_user([
            (alice, "beer", "large"),
            (bob, "na", "small"),
            (alice, "beer", "large"),
            (alice, "soda", "large"),
        ]);
        assert_eq!(map[&alice].beer_large, 2);
        assert_eq!(map[&bob].na_small, 1);
        assert_eq!(map[&alice].na_small, 0);
    }

    #[test]
    fn litres_rounds_to_one_decimal() {
        assert_eq!(litres(0), 0.0);
        assert_eq!(litres(300), 0.3);
        assert_eq!(litres(1400), 1.4);
        assert_eq!(litres(250), 0.3);
        assert_eq!(litres(240), 0.2);
    }

    proptest! {
        #[test]
        fn volume_equals_counts_times_constants(
            beer_small in 0u64..10_000,
            beer_large in 0u64..10_000,
            na_small in 0u64..10_000,
            na_large in 0u64..10_000,
        ) {
            let counts = TallyCounts { beer_small, beer_large, na_small, na_large };
            prop_assert_eq!(counts.beer_ml(), beer_small * ML_SMALL + beer_large * ML_LARGE);
            prop_assert_eq!(counts.na_ml(), na_small * ML_SMALL + na_large * ML_LARGE);
            prop_assert_eq!(counts.total_ml(), counts.beer_ml() + counts.na_ml());
        }

        #[test]
        fn from_pairs_counts_every_recognized_pair(n in 0usize..200) {
            let pairs = vec![(DrinkKind::Beer, DrinkSize::Small); n];
            let counts = TallyCounts::from_pairs(pairs);
            prop_assert_eq!(counts.beer_small, n as u64);
            prop_assert_eq!(counts.beer_ml(), n as u64 * ML_SMALL);
        }
    }
}
