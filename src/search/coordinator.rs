use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use super::DEFAULT_QUIET_PERIOD;
use super::debounce::{DebounceDecision, Debouncer};
use super::dispatch::Dispatcher;
use super::messages::{ResponseOutcome, SearchResponse};
use super::view::SearchView;
use crate::api::SearchBackend;

/// Coordinates the debouncer, request dispatch, and stale-result
/// reconciliation behind one mutable handle.
///
/// The owning thread feeds keystrokes through [`LiveSearch::input`] and
/// calls [`LiveSearch::tick`] on every UI frame; request threads hand their
/// results back over a channel and never touch [`SearchView`] directly.
/// Dropping the coordinator cancels the pending debounce and detaches any
/// in-flight requests, whose sends then go nowhere.
pub struct LiveSearch {
    debouncer: Debouncer,
    dispatcher: Dispatcher,
    response_rx: Receiver<SearchResponse>,
    current_token: Option<u64>,
    view: SearchView,
}

impl LiveSearch {
    /// Build a coordinator with the default 200 ms quiet period.
    #[must_use]
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self::with_quiet_period(backend, DEFAULT_QUIET_PERIOD)
    }

    #[must_use]
    pub fn with_quiet_period(backend: Arc<dyn SearchBackend>, quiet_period: Duration) -> Self {
        let (response_tx, response_rx) = mpsc::channel();
        Self {
            debouncer: Debouncer::new(quiet_period),
            dispatcher: Dispatcher::new(backend, response_tx),
            response_rx,
            current_token: None,
            view: SearchView::default(),
        }
    }

    /// Record the current contents of the search input.
    ///
    /// Empty input resets the view synchronously and invalidates whatever
    /// is in flight; anything else waits out the quiet period.
    pub fn input(&mut self, text: &str) {
        match self.debouncer.submit(text) {
            DebounceDecision::Cleared => self.clear(),
            DebounceDecision::Scheduled => {}
        }
    }

    /// Dispatch `text` immediately, without waiting out the quiet period.
    ///
    /// Used when the user submits explicitly instead of pausing; empty
    /// input still resets instead of dispatching.
    pub fn search_now(&mut self, text: &str) {
        if text.trim().is_empty() {
            self.clear();
            return;
        }
        self.debouncer.cancel();
        self.dispatch(text.to_string());
    }

    /// Advance the debounce timer and drain completed responses. Call on
    /// every UI tick.
    pub fn tick(&mut self) {
        if let Some(query) = self.debouncer.poll() {
            self.dispatch(query);
        }
        self.pump_responses();
    }

    /// Current observable state for rendering.
    #[must_use]
    pub fn view(&self) -> &SearchView {
        &self.view
    }

    /// Block until the in-flight query resolves or `timeout` passes,
    /// returning whether it resolved. One-shot callers use this; the
    /// interactive loop keeps ticking instead.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            self.tick();
            if !self.view.is_searching && self.debouncer.is_idle() {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }

    fn dispatch(&mut self, query: String) {
        let token = self.dispatcher.dispatch(query);
        self.current_token = Some(token);
        self.view.begin_search();
    }

    fn clear(&mut self) {
        self.dispatcher.invalidate();
        self.current_token = None;
        self.view.reset();
    }

    fn pump_responses(&mut self) {
        loop {
            match self.response_rx.try_recv() {
                Ok(response) => self.apply_response(response),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    /// Apply a response if it still corresponds to the latest dispatched
    /// query; anything else is discarded without touching the view.
    fn apply_response(&mut self, response: SearchResponse) {
        if Some(response.token) != self.current_token {
            return;
        }

        match response.outcome {
            ResponseOutcome::Matches(results) => self.view.resolve(results),
            ResponseOutcome::Failed => self.view.resolve(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::types::{ReportKind, ReportSummary};

    /// Backend that answers every query with the same canned result.
    struct CannedBackend(Vec<ReportSummary>);

    impl SearchBackend for CannedBackend {
        fn search(&self, _item_name: &str) -> Result<Vec<ReportSummary>, ApiError> {
            Ok(self.0.clone())
        }
    }

    fn report(id: &str, name: &str) -> ReportSummary {
        ReportSummary::new(id, name, ReportKind::Lost)
    }

    fn coordinator() -> LiveSearch {
        LiveSearch::with_quiet_period(Arc::new(CannedBackend(Vec::new())), Duration::ZERO)
    }

    fn response(token: u64, query: &str, results: Vec<ReportSummary>) -> SearchResponse {
        SearchResponse {
            token,
            query: query.to_string(),
            outcome: ResponseOutcome::Matches(results),
        }
    }

    #[test]
    fn stale_response_has_no_observable_effect() {
        let mut search = coordinator();
        search.current_token = Some(2);
        search.view.begin_search();

        search.apply_response(response(2, "wallet", vec![report("1", "Black wallet")]));
        let after_current = search.view.clone();

        search.apply_response(response(1, "wal", vec![report("9", "Walkie talkie")]));
        assert_eq!(search.view, after_current);
    }

    #[test]
    fn current_response_resolves_the_view() {
        let mut search = coordinator();
        search.current_token = Some(1);
        search.view.begin_search();

        search.apply_response(response(1, "wallet", vec![report("1", "Black wallet")]));
        assert!(!search.view.is_searching);
        assert!(!search.view.no_results);
        assert_eq!(search.view.results[0].item_name, "Black wallet");
    }

    #[test]
    fn failure_outcome_resolves_to_no_results() {
        let mut search = coordinator();
        search.current_token = Some(1);
        search.view.begin_search();

        search.apply_response(SearchResponse {
            token: 1,
            query: "wallet".to_string(),
            outcome: ResponseOutcome::Failed,
        });
        assert!(search.view.no_results);
        assert!(search.view.results.is_empty());
        assert!(!search.view.is_searching);
    }

    #[test]
    fn response_after_clear_is_discarded() {
        let mut search = coordinator();
        search.current_token = Some(1);
        search.view.begin_search();

        search.input("");
        assert_eq!(*search.view(), SearchView::default());

        search.apply_response(response(1, "wallet", vec![report("1", "Black wallet")]));
        assert_eq!(*search.view(), SearchView::default());
    }

    #[test]
    fn empty_input_never_dispatches() {
        let mut search = coordinator();
        search.input("   ");
        search.tick();

        assert_eq!(search.current_token, None);
        assert!(!search.view().is_searching);
    }
}
