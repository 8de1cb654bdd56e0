//! Live search core for a lost-and-found report client.
//!
//! The crate coordinates a debounced query stream, per-query request
//! dispatch, and stale-result reconciliation so that rendering always
//! reflects the most recently dispatched query, no matter how network
//! responses are ordered. [`search::LiveSearch`] is the entry point;
//! [`api::HttpBackend`] talks to the REST backend the reports live on.

pub mod api;
pub mod search;
pub mod types;

pub use api::{ApiError, HttpBackend, SearchBackend};
pub use search::{LiveSearch, SearchView};
pub use types::{CategoryStats, ReportKind, ReportSummary};
