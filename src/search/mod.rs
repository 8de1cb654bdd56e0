//! Live search coordination: debouncing, request dispatch, and stale-result
//! reconciliation.
//!
//! Keystrokes flow into [`LiveSearch::input`], survive the quiet period in
//! the [`Debouncer`], get dispatched with a fresh token, and come back as
//! [`SearchResponse`] messages that only take effect while their token is
//! still the current one.

mod coordinator;
mod debounce;
mod dispatch;
mod messages;
mod view;

use std::time::Duration;

pub use coordinator::LiveSearch;
pub use debounce::{DebounceDecision, Debouncer};
pub use messages::{ResponseOutcome, SearchResponse};
pub use view::SearchView;

/// Delay after the last keystroke before a query is considered effective.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(200);
