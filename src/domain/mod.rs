//! Domain layer - pure types and the tally aggregation core.

pub mod foundation;
pub mod profile;
pub mod tally;
