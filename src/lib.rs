//! Drink Tally - consumption-tracking backend service.
//!
//! Authenticated users log drink events (beer or non-alcoholic, small or
//! large) and read their aggregate volume totals. Admins see all users'
//! totals, subtract individual entries, reset the ledger, and manage
//! accounts through the hosted auth directory.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
