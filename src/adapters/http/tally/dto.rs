//! DTOs for tally endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::EntryId;
use crate::domain::tally::{litres, TallyCounts};

/// Request to record one drink entry.
#[derive(Debug, Deserialize)]
pub struct RecordEntryRequest {
    pub kind: String,
    pub size: String,
}

/// Per-bucket counts plus derived volumes.
///
/// Litre figures are strings with one decimal place, the display format the
/// clients render as-is.
#[derive(Debug, Serialize, Deserialize)]
pub struct TallyCountsDto {
    pub beer_small: u64,
    pub beer_large: u64,
    pub na_small: u64,
    pub na_large: u64,
    pub beer_ml: u64,
    pub na_ml: u64,
    pub beer_litres: String,
    pub na_litres: String,
}

impl From<TallyCounts> for TallyCountsDto {
    fn from(counts: TallyCounts) -> Self {
        let beer_ml = counts.beer_ml();
        let na_ml = counts.na_ml();
        Self {
            beer_small: counts.beer_small,
            beer_large: counts.beer_large,
            na_small: counts.na_small,
            na_large: counts.na_large,
            beer_ml,
            na_ml,
            beer_litres: format_litres(beer_ml),
            na_litres: format_litres(na_ml),
        }
    }
}

/// Response to a recorded entry: the new entry id plus refreshed counts, so
/// the client never needs a follow-up fetch.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordEntryResponse {
    pub entry_id: EntryId,
    pub counts: TallyCountsDto,
}

pub(crate) fn format_litres(ml: u64) -> String {
    format!("{:.1}", litres(ml))
}
