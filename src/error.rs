//! Error handling for the Selic simulator
//!
//! Defines the error taxonomy for upstream fetches and establishes a
//! unified Result type using anyhow for context chaining at the command
//! layer.

use thiserror::Error;

/// Errors surfaced by the SGS client and the simulation engine.
///
/// Fetch and decode errors propagate to the caller untransformed; there is
/// no retry or fallback. `NoDataForRange` is raised only by the CSV export,
/// which performs an explicit empty-data check.
#[derive(Error, Debug)]
pub enum SelicError {
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("upstream returned a malformed response: {0}")]
    UpstreamMalformedResponse(String),

    #[error("no data available to export between {start} and {end}")]
    NoDataForRange { start: String, end: String },
}

/// Result type alias for command-layer operations
pub type Result<T> = anyhow::Result<T>;
