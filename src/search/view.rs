use crate::types::ReportSummary;

/// Observable output of the live search flow, read by rendering.
///
/// Only the reconciler writes these fields. `results` keeps the last known
/// set while a newer query is in flight, so the list does not flash empty
/// between searches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchView {
    /// Most recently resolved result set, possibly empty.
    pub results: Vec<ReportSummary>,
    /// True iff the last completed query was non-empty and matched nothing.
    pub no_results: bool,
    /// True while a request for the current query is outstanding.
    pub is_searching: bool,
}

impl SearchView {
    /// Return to the idle state shown while the input field is empty.
    pub(super) fn reset(&mut self) {
        self.results.clear();
        self.no_results = false;
        self.is_searching = false;
    }

    /// Enter the searching state; the previous results stay visible.
    pub(super) fn begin_search(&mut self) {
        self.is_searching = true;
    }

    /// Apply a resolved outcome for the current query. Failures arrive here
    /// as an empty set, so they render as "no results".
    pub(super) fn resolve(&mut self, results: Vec<ReportSummary>) {
        self.no_results = results.is_empty();
        self.results = results;
        self.is_searching = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReportKind;

    fn report(name: &str) -> ReportSummary {
        ReportSummary::new("1", name, ReportKind::Found)
    }

    #[test]
    fn begin_search_keeps_previous_results_visible() {
        let mut view = SearchView::default();
        view.resolve(vec![report("Black wallet")]);

        view.begin_search();
        assert!(view.is_searching);
        assert_eq!(view.results.len(), 1);
    }

    #[test]
    fn resolve_with_matches_clears_the_no_results_flag() {
        let mut view = SearchView::default();
        view.begin_search();
        view.resolve(vec![report("Black wallet")]);

        assert!(!view.no_results);
        assert!(!view.is_searching);
        assert_eq!(view.results.len(), 1);
    }

    #[test]
    fn resolve_empty_raises_the_no_results_flag() {
        let mut view = SearchView::default();
        view.begin_search();
        view.resolve(Vec::new());

        assert!(view.no_results);
        assert!(!view.is_searching);
        assert!(view.results.is_empty());
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut view = SearchView::default();
        view.resolve(Vec::new());
        assert!(view.no_results);

        view.reset();
        assert_eq!(view, SearchView::default());
    }
}
