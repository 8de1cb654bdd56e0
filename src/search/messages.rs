use crate::types::ReportSummary;

/// What a dispatched request came back with.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    /// The backend answered; an empty list is a valid "no matches" result.
    Matches(Vec<ReportSummary>),
    /// Transport, server or decode failure. Already logged by the request
    /// thread; rendered identically to an empty result.
    Failed,
}

/// Envelope sent from a request thread back to the owning thread.
#[derive(Debug)]
pub struct SearchResponse {
    /// Token that allows the reconciler to correlate the response with the
    /// query that produced it.
    pub token: u64,
    /// Query text the request was issued for.
    pub query: String,
    /// Result set or failure marker.
    pub outcome: ResponseOutcome,
}
