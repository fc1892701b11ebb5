//! Selic - daily rate history and investment simulator
//!
//! This library fetches the daily Selic series from the Banco Central SGS
//! API and derives three operations from it: raw history, compounding of a
//! principal over the series, and CSV export.

pub mod config;
pub mod error;
pub mod sgs;
pub mod simulation;
pub mod utils;
