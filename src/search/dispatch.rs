use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::Sender;
use std::thread;

use tracing::{debug, warn};

use super::messages::{ResponseOutcome, SearchResponse};
use crate::api::SearchBackend;

/// Issues one backend request per effective query, tagged with a fresh
/// token so late responses can be told apart from current ones.
pub(super) struct Dispatcher {
    backend: Arc<dyn SearchBackend>,
    response_tx: Sender<SearchResponse>,
    latest_token: Arc<AtomicU64>,
    next_token: u64,
}

impl Dispatcher {
    pub fn new(backend: Arc<dyn SearchBackend>, response_tx: Sender<SearchResponse>) -> Self {
        Self {
            backend,
            response_tx,
            latest_token: Arc::new(AtomicU64::new(0)),
            next_token: 0,
        }
    }

    /// Allocate the next token, publish it as current, and fire the request
    /// on its own thread.
    ///
    /// In-flight requests are never aborted when a newer query supersedes
    /// them; a request thread that observes a newer published token simply
    /// skips its send.
    pub fn dispatch(&mut self, query: String) -> u64 {
        self.next_token = self.next_token.saturating_add(1);
        let token = self.next_token;
        self.latest_token.store(token, AtomicOrdering::Release);
        debug!(token, query = %query, "dispatching search");

        let backend = Arc::clone(&self.backend);
        let response_tx = self.response_tx.clone();
        let latest_token = Arc::clone(&self.latest_token);
        thread::spawn(move || {
            let outcome = match backend.search(&query) {
                Ok(reports) => ResponseOutcome::Matches(reports),
                Err(err) => {
                    warn!(token, query = %query, error = %err, "search request failed");
                    ResponseOutcome::Failed
                }
            };

            if latest_token.load(AtomicOrdering::Acquire) != token {
                // Superseded while in flight; skip the send.
                return;
            }
            let _ = response_tx.send(SearchResponse {
                token,
                query,
                outcome,
            });
        });

        token
    }

    /// Advance the published token without dispatching, so everything
    /// currently in flight goes stale. Used when the input is cleared.
    pub fn invalidate(&mut self) {
        self.next_token = self.next_token.saturating_add(1);
        self.latest_token
            .store(self.next_token, AtomicOrdering::Release);
    }
}
