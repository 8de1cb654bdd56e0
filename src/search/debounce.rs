use std::time::{Duration, Instant};

/// What a submitted keystroke did to the pending query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceDecision {
    /// The text is pending; a later [`Debouncer::poll`] forwards it once
    /// the quiet period elapses without further input.
    Scheduled,
    /// The input emptied; the caller must reset presentation state now,
    /// without waiting for the quiet period.
    Cleared,
}

/// Collapses a high-frequency stream of keystrokes into a low-frequency
/// stream of effective queries.
///
/// The debouncer owns its pending timer state outright: replacing or
/// cancelling the pending query releases it on every exit path, and
/// dropping the debouncer cancels whatever is still scheduled.
#[derive(Debug)]
pub struct Debouncer {
    quiet_period: Duration,
    pending: Option<PendingQuery>,
}

#[derive(Debug)]
struct PendingQuery {
    query: String,
    deadline: Instant,
}

impl Debouncer {
    #[must_use]
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Record the current contents of the input field.
    ///
    /// Non-empty text restarts the quiet-period timer with the new string;
    /// a previously pending string is never forwarded. Text that trims to
    /// empty cancels the pending query and returns
    /// [`DebounceDecision::Cleared`] immediately.
    pub fn submit(&mut self, text: &str) -> DebounceDecision {
        if text.trim().is_empty() {
            self.pending = None;
            return DebounceDecision::Cleared;
        }

        self.pending = Some(PendingQuery {
            query: text.to_string(),
            deadline: Instant::now() + self.quiet_period,
        });
        DebounceDecision::Scheduled
    }

    /// Forward the pending query once its quiet period has elapsed.
    ///
    /// Returns at most one effective query per submitted string; callers
    /// poll this from their tick loop.
    pub fn poll(&mut self) -> Option<String> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.deadline <= Instant::now());
        if !due {
            return None;
        }
        self.pending.take().map(|pending| pending.query)
    }

    /// Cancel the pending query without forwarding it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// True when no query is waiting out its quiet period.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn rapid_keystrokes_collapse_to_the_final_string() {
        let mut debouncer = Debouncer::new(Duration::ZERO);
        for text in ["w", "wa", "wal", "wall", "walle", "wallet"] {
            assert_eq!(debouncer.submit(text), DebounceDecision::Scheduled);
        }

        assert_eq!(debouncer.poll(), Some("wallet".to_string()));
        assert_eq!(debouncer.poll(), None);
    }

    #[test]
    fn pending_query_waits_out_the_quiet_period() {
        let mut debouncer = Debouncer::new(Duration::from_secs(3600));
        debouncer.submit("phone");

        assert_eq!(debouncer.poll(), None);
        assert!(!debouncer.is_idle());
    }

    #[test]
    fn quiet_period_elapses_in_real_time() {
        let mut debouncer = Debouncer::new(Duration::from_millis(20));
        debouncer.submit("keys");

        assert_eq!(debouncer.poll(), None);
        thread::sleep(Duration::from_millis(40));
        assert_eq!(debouncer.poll(), Some("keys".to_string()));
    }

    #[test]
    fn empty_input_clears_immediately() {
        let mut debouncer = Debouncer::new(Duration::from_secs(3600));
        debouncer.submit("phone");

        assert_eq!(debouncer.submit("   "), DebounceDecision::Cleared);
        assert!(debouncer.is_idle());
        assert_eq!(debouncer.poll(), None);
    }

    #[test]
    fn cancel_drops_the_pending_query() {
        let mut debouncer = Debouncer::new(Duration::ZERO);
        debouncer.submit("bike");
        debouncer.cancel();

        assert_eq!(debouncer.poll(), None);
    }
}
