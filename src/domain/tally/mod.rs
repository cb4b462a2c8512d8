//! Tally domain - drink entries and volume aggregation.

mod entry;
mod stats;

pub use entry::{DrinkEntry, DrinkKind, DrinkSize};
pub use stats::{group_by_user, litres, TallyCounts, LITRE_DIVISOR, ML_LARGE, ML_SMALL};
