//! Debounced search and pagination state machine.
//!
//! The controller never performs I/O and never touches a rendering surface.
//! Input events come in through `on_*` methods, fetch work goes out as
//! [`FetchRequest`] commands for the host to execute (see
//! [`fetch::worker`](crate::fetch::worker)), and completed fetches come back
//! through [`apply_outcome`](SearchController::apply_outcome). Every request
//! carries a sequence number; outcomes from a superseded query are discarded,
//! so a stale page-1 response can never clobber a fresh one.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::fetch::FetchError;
use crate::model::types::{IconRecord, PAGE_SIZE, Phase, SearchState};

/// Quiet period after the last keystroke before a search fires.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// A fetch the host should run. `seq` tags the query generation the request
/// was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub query: String,
    pub page: u32,
}

/// Completion of a [`FetchRequest`], echoing its tag.
#[derive(Debug)]
pub struct FetchOutcome {
    pub seq: u64,
    pub page: u32,
    pub result: Result<Vec<IconRecord>, FetchError>,
}

type Observer = Box<dyn FnMut(&SearchState)>;

pub struct SearchController {
    state: SearchState,
    seq: u64,
    /// Debounced input waiting to be committed: (query, last keystroke).
    pending: Option<(String, Instant)>,
    observer: Option<Observer>,
    dirty: bool,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchController {
    pub fn new() -> Self {
        Self { state: SearchState::default(), seq: 0, pending: None, observer: None, dirty: true }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// True once since the last state change; the TUI uses this to skip
    /// redraws.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Registers a callback invoked after every state change.
    pub fn set_observer(&mut self, observer: impl FnMut(&SearchState) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Keystroke-level input. Empty input drops back to `Idle` immediately;
    /// anything else waits out the debounce window.
    pub fn on_query_changed(&mut self, text: &str) -> Option<FetchRequest> {
        let query = text.trim();
        if query.is_empty() {
            self.pending = None;
            self.reset_idle();
            return None;
        }
        self.pending = Some((query.to_string(), Instant::now()));
        None
    }

    /// Explicit submit: commits the query without waiting for the debounce.
    pub fn on_submit(&mut self, text: &str) -> Option<FetchRequest> {
        let query = text.trim().to_string();
        self.pending = None;
        if query.is_empty() {
            self.reset_idle();
            return None;
        }
        Some(self.begin_search(&query))
    }

    /// Fires the pending debounced search once the quiet period has elapsed.
    /// Call this on every host tick.
    pub fn tick(&mut self, now: Instant) -> Option<FetchRequest> {
        let due = match &self.pending {
            Some((_, at)) => now.duration_since(*at) >= DEBOUNCE,
            None => false,
        };
        if !due {
            return None;
        }
        let (query, _) = self.pending.take().expect("pending checked above");
        Some(self.begin_search(&query))
    }

    /// Scroll proximity to the bottom of the rendered results. Ignored unless
    /// results are loaded, more are believed to remain, and no fetch is
    /// already outstanding.
    pub fn on_scroll_near_bottom(&mut self) -> Option<FetchRequest> {
        if self.state.phase != Phase::Loaded || !self.state.has_more || self.state.loading {
            return None;
        }
        self.state.loading = true;
        self.state.phase = Phase::LoadingMore;
        let request = FetchRequest {
            seq: self.seq,
            query: self.state.query.clone(),
            page: self.state.page + 1,
        };
        self.emit();
        Some(request)
    }

    /// Retry from the error state; restarts at page 1.
    pub fn on_retry(&mut self) -> Option<FetchRequest> {
        if self.state.phase != Phase::Error || self.state.query.is_empty() {
            return None;
        }
        let query = self.state.query.clone();
        Some(self.begin_search(&query))
    }

    /// Folds a completed fetch into the state. Outcomes tagged with a stale
    /// sequence number are dropped.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        if outcome.seq != self.seq {
            debug!(seq = outcome.seq, current = self.seq, "discarding superseded fetch outcome");
            return;
        }
        self.state.loading = false;
        match outcome.result {
            Ok(records) if outcome.page == 1 => {
                if records.is_empty() {
                    self.state.has_more = false;
                    self.state.phase = Phase::Empty;
                } else {
                    self.state.has_more = records.len() >= PAGE_SIZE;
                    self.state.accumulated = records;
                    self.state.page = 1;
                    self.state.phase = Phase::Loaded;
                }
            }
            Ok(records) => {
                if records.is_empty() {
                    self.state.has_more = false;
                } else {
                    self.state.has_more = records.len() >= PAGE_SIZE;
                    self.state.accumulated.extend(records);
                    self.state.page = outcome.page;
                }
                self.state.phase = Phase::Loaded;
            }
            Err(err) if outcome.page == 1 => {
                warn!(query = %self.state.query, "search failed: {err}");
                self.state.phase = Phase::Error;
            }
            Err(err) => {
                // Incremental pages fail silently; the grid stays as it is.
                debug!(page = outcome.page, "load-more failed: {err}");
                self.state.phase = Phase::Loaded;
            }
        }
        self.emit();
    }

    fn begin_search(&mut self, query: &str) -> FetchRequest {
        self.seq += 1;
        self.state = SearchState {
            query: query.to_string(),
            page: 1,
            accumulated: Vec::new(),
            has_more: true,
            loading: true,
            phase: Phase::Loading,
        };
        let request = FetchRequest { seq: self.seq, query: query.to_string(), page: 1 };
        self.emit();
        request
    }

    fn reset_idle(&mut self) {
        // Bump the sequence so any in-flight fetch lands stale.
        self.seq += 1;
        self.state = SearchState::default();
        self.emit();
    }

    fn emit(&mut self) {
        self.dirty = true;
        if let Some(observer) = &mut self.observer {
            observer(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{FlaticonFetcher, PageFetcher};

    fn ok(request: &FetchRequest, records: Vec<IconRecord>) -> FetchOutcome {
        FetchOutcome { seq: request.seq, page: request.page, result: Ok(records) }
    }

    fn run_offline(request: &FetchRequest) -> FetchOutcome {
        let fetcher = FlaticonFetcher::new(true).unwrap();
        FetchOutcome {
            seq: request.seq,
            page: request.page,
            result: fetcher.fetch_page(&request.query, request.page),
        }
    }

    #[test]
    fn debounce_waits_out_the_quiet_period() {
        let mut ctl = SearchController::new();
        let start = Instant::now();
        assert!(ctl.on_query_changed("ring").is_none());
        assert!(ctl.tick(start).is_none());
        let request = ctl.tick(start + DEBOUNCE + Duration::from_millis(50));
        let request = request.expect("debounce elapsed");
        assert_eq!(request.query, "ring");
        assert_eq!(request.page, 1);
        assert_eq!(ctl.state().phase, Phase::Loading);
    }

    #[test]
    fn new_keystrokes_restart_the_debounce() {
        let mut ctl = SearchController::new();
        ctl.on_query_changed("ri");
        ctl.on_query_changed("ring");
        // Only one commit happens, for the latest text.
        let request = ctl.tick(Instant::now() + DEBOUNCE).expect("due");
        assert_eq!(request.query, "ring");
        assert!(ctl.tick(Instant::now() + DEBOUNCE * 2).is_none());
    }

    #[test]
    fn ring_scroll_flow_exhausts_catalog_with_one_extra_round_trip() {
        let mut ctl = SearchController::new();
        let request = ctl.on_submit("ring").unwrap();
        ctl.apply_outcome(run_offline(&request));
        assert_eq!(ctl.state().phase, Phase::Loaded);
        assert_eq!(ctl.state().accumulated.len(), 20);
        assert!(ctl.state().has_more);

        let request = ctl.on_scroll_near_bottom().unwrap();
        assert_eq!(request.page, 2);
        assert_eq!(ctl.state().phase, Phase::LoadingMore);
        ctl.apply_outcome(run_offline(&request));
        assert_eq!(ctl.state().accumulated.len(), 40);
        assert_eq!(ctl.state().page, 2);
        // Page 2 was exactly full, so the len >= 20 heuristic still claims
        // more remain; it takes one empty fetch to learn otherwise.
        assert!(ctl.state().has_more);

        let request = ctl.on_scroll_near_bottom().unwrap();
        assert_eq!(request.page, 3);
        ctl.apply_outcome(run_offline(&request));
        assert_eq!(ctl.state().phase, Phase::Loaded);
        assert_eq!(ctl.state().accumulated.len(), 40);
        assert!(!ctl.state().has_more);
        assert!(ctl.on_scroll_near_bottom().is_none());
    }

    #[test]
    fn unrecognized_query_gets_default_category() {
        let mut ctl = SearchController::new();
        let request = ctl.on_submit("xyz123").unwrap();
        ctl.apply_outcome(run_offline(&request));
        assert_eq!(ctl.state().accumulated.len(), 20);
        assert_eq!(ctl.state().accumulated[0].title, "Search");
    }

    #[test]
    fn superseded_outcome_is_discarded() {
        let mut ctl = SearchController::new();
        let stale = ctl.on_submit("ring").unwrap();
        let fresh = ctl.on_submit("heart").unwrap();
        // The slow ring response arrives after heart was committed.
        ctl.apply_outcome(run_offline(&stale));
        assert_eq!(ctl.state().query, "heart");
        assert_eq!(ctl.state().phase, Phase::Loading);
        assert!(ctl.state().accumulated.is_empty());

        ctl.apply_outcome(run_offline(&fresh));
        assert_eq!(ctl.state().phase, Phase::Loaded);
        assert_eq!(ctl.state().accumulated[0].title, "Heart");
    }

    #[test]
    fn empty_input_returns_to_idle_and_clears_results() {
        let mut ctl = SearchController::new();
        let request = ctl.on_submit("star").unwrap();
        ctl.apply_outcome(run_offline(&request));
        assert!(!ctl.state().accumulated.is_empty());

        assert!(ctl.on_query_changed("   ").is_none());
        assert_eq!(ctl.state().phase, Phase::Idle);
        assert!(ctl.state().accumulated.is_empty());
        // The old page-1 result lands stale after the reset.
        ctl.apply_outcome(run_offline(&request));
        assert_eq!(ctl.state().phase, Phase::Idle);
    }

    #[test]
    fn empty_first_page_enters_empty_state() {
        let mut ctl = SearchController::new();
        let request = ctl.on_submit("ring").unwrap();
        ctl.apply_outcome(ok(&request, Vec::new()));
        assert_eq!(ctl.state().phase, Phase::Empty);
        assert!(!ctl.state().has_more);
    }

    #[test]
    fn page_one_failure_enters_error_and_retry_restarts() {
        let mut ctl = SearchController::new();
        let request = ctl.on_submit("ring").unwrap();
        ctl.apply_outcome(FetchOutcome {
            seq: request.seq,
            page: 1,
            result: Err(FetchError::Parse("bad body".into())),
        });
        assert_eq!(ctl.state().phase, Phase::Error);

        let retry = ctl.on_retry().expect("retry available");
        assert_eq!(retry.page, 1);
        assert_eq!(retry.query, "ring");
        assert_eq!(ctl.state().phase, Phase::Loading);
        ctl.apply_outcome(run_offline(&retry));
        assert_eq!(ctl.state().phase, Phase::Loaded);
    }

    #[test]
    fn load_more_failure_is_silent() {
        let mut ctl = SearchController::new();
        let request = ctl.on_submit("ring").unwrap();
        ctl.apply_outcome(run_offline(&request));
        let more = ctl.on_scroll_near_bottom().unwrap();
        ctl.apply_outcome(FetchOutcome {
            seq: more.seq,
            page: more.page,
            result: Err(FetchError::Parse("flaky".into())),
        });
        assert_eq!(ctl.state().phase, Phase::Loaded);
        assert_eq!(ctl.state().accumulated.len(), 20);
        assert!(ctl.state().has_more);
    }

    #[test]
    fn observer_sees_every_transition() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let phases: Rc<RefCell<Vec<Phase>>> = Rc::default();
        let seen = Rc::clone(&phases);
        let mut ctl = SearchController::new();
        ctl.set_observer(move |state| seen.borrow_mut().push(state.phase));

        let request = ctl.on_submit("ring").unwrap();
        ctl.apply_outcome(run_offline(&request));
        assert_eq!(&*phases.borrow(), &[Phase::Loading, Phase::Loaded]);
    }

    #[test]
    fn accumulated_never_shrinks_within_a_query() {
        let mut ctl = SearchController::new();
        let request = ctl.on_submit("ring").unwrap();
        ctl.apply_outcome(run_offline(&request));
        let mut last = ctl.state().accumulated.len();
        while let Some(more) = ctl.on_scroll_near_bottom() {
            ctl.apply_outcome(run_offline(&more));
            assert!(ctl.state().accumulated.len() >= last);
            last = ctl.state().accumulated.len();
        }
        assert_eq!(last, 40);
    }
}
