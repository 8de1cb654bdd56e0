//! Wire types shared between the backend client and the search pipeline.

mod report;

pub use report::{CategoryStats, ReportKind, ReportSummary};
