use std::time::Duration;

/// Application-ready configuration derived from user input, config files
/// and sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedConfig {
    /// Backend base URL without a trailing slash.
    pub base_url: String,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
    /// Debounce quiet period between the last keystroke and dispatch.
    pub quiet_period: Duration,
}

impl ResolvedConfig {
    /// Print a human readable summary of the effective configuration.
    pub(crate) fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Backend base URL: {}", self.base_url);
        println!("  Request timeout: {} ms", self.timeout.as_millis());
        println!("  Quiet period: {} ms", self.quiet_period.as_millis());
    }
}
