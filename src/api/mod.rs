//! Client for the report backend's read-side HTTP surface.

mod client;
mod error;

pub use client::HttpBackend;
pub use error::ApiError;
pub use reqwest::StatusCode;

use crate::types::ReportSummary;

/// Search surface the live search coordinator dispatches against.
///
/// The coordinator only ever needs the one call, so tests can substitute an
/// in-memory implementation and control exactly when each query resolves.
pub trait SearchBackend: Send + Sync {
    /// Return the reports whose item name contains `item_name`
    /// (case-insensitive). An empty vector is a valid "no matches" answer,
    /// not an error.
    fn search(&self, item_name: &str) -> Result<Vec<ReportSummary>, ApiError>;
}
