//! Tally handlers - recording entries and computing aggregates.

mod get_overview;
mod get_tally;
mod record_entry;
mod remove_entry;
mod reset_entries;

pub use get_overview::{GetOverviewHandler, GetOverviewQuery, OverviewView, UserOverview};
pub use get_tally::{GetTallyHandler, GetTallyQuery};
pub use record_entry::{RecordEntryCommand, RecordEntryHandler, RecordEntryResult};
pub use remove_entry::{RemoveEntryCommand, RemoveEntryHandler, RemoveEntryResult};
pub use reset_entries::{ResetEntriesCommand, ResetEntriesHandler, ResetEntriesResult};
