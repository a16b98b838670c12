//! Debounced search input.
//!
//! [`SearchController`] owns the query text. Keystrokes only arm a timer;
//! a search is started when the timer survives a full quiet period, when the
//! user submits, or when the query is cleared.
//!
//! ```text
//!            keystroke                 keystroke (re-arm)
//!   Idle ─────────────────► Pending ◄───────────────────┐
//!    ▲                        │  └──────────────────────┘
//!    │   timer_fired / submit │
//!    └────────────────────────┘  (commit term, search once)
//! ```

use crate::app::timers::{Scheduler, TimerHandle};
use std::time::Duration;

/// Default quiet period before a typed query is searched.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(600);

/// Debounce state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPhase {
    /// No search is waiting on the timer.
    Idle,
    /// `term` will be searched when `timer` fires.
    Pending { term: String, timer: TimerHandle },
}

/// Query text plus debounce state machine.
#[derive(Debug, Clone)]
pub struct SearchController {
    input: String,
    committed: String,
    phase: SearchPhase,
    quiet: Duration,
}

impl SearchController {
    /// Controller whose input starts as `initial`, already committed.
    #[must_use]
    pub fn new(initial: &str, quiet: Duration) -> Self {
        Self {
            input: initial.to_string(),
            committed: initial.to_string(),
            phase: SearchPhase::Idle,
            quiet,
        }
    }

    /// Replaces the query text and (re)arms the debounce timer.
    pub fn keystroke(&mut self, text: impl Into<String>, scheduler: &mut dyn Scheduler) {
        self.input = text.into();
        self.disarm(scheduler);
        let timer = scheduler.schedule(self.quiet);
        tracing::trace!(query = %self.input, %timer, "search debounced");
        self.phase = SearchPhase::Pending {
            term: self.input.clone(),
            timer,
        };
    }

    /// Appends `c` to the query.
    pub fn push_char(&mut self, c: char, scheduler: &mut dyn Scheduler) {
        let mut text = self.input.clone();
        text.push(c);
        self.keystroke(text, scheduler);
    }

    /// Deletes the last character. Returns `false` if the query was already
    /// empty, in which case nothing is scheduled.
    pub fn pop_char(&mut self, scheduler: &mut dyn Scheduler) -> bool {
        let mut text = self.input.clone();
        if text.pop().is_none() {
            return false;
        }
        self.keystroke(text, scheduler);
        true
    }

    /// Handles an elapsed timer.
    ///
    /// Returns the term to search if `handle` is the armed debounce timer.
    pub fn timer_fired(&mut self, handle: TimerHandle) -> Option<String> {
        let armed = matches!(&self.phase, SearchPhase::Pending { timer, .. } if *timer == handle);
        if !armed {
            tracing::trace!(%handle, "timer is not the armed debounce");
            return None;
        }
        let SearchPhase::Pending { term, .. } = std::mem::replace(&mut self.phase, SearchPhase::Idle)
        else {
            return None;
        };
        self.committed.clone_from(&term);
        tracing::debug!(query = %term, "debounced query committed");
        Some(term)
    }

    /// Commits the current text immediately and returns it for searching.
    pub fn submit(&mut self, scheduler: &mut dyn Scheduler) -> String {
        self.disarm(scheduler);
        self.committed.clone_from(&self.input);
        tracing::debug!(query = %self.committed, "query submitted");
        self.committed.clone()
    }

    /// Empties the query and commits the empty term.
    pub fn clear(&mut self, scheduler: &mut dyn Scheduler) -> String {
        self.input.clear();
        self.submit(scheduler)
    }

    /// Whether a typed query is waiting for the quiet period to end.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.phase, SearchPhase::Pending { .. })
    }

    /// Text currently in the search box.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Term of the most recent committed search.
    #[must_use]
    pub fn committed(&self) -> &str {
        &self.committed
    }

    #[must_use]
    pub const fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    fn disarm(&mut self, scheduler: &mut dyn Scheduler) {
        if let SearchPhase::Pending { timer, .. } = std::mem::replace(&mut self.phase, SearchPhase::Idle)
        {
            scheduler.cancel(timer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::timers::TimerQueue;

    fn controller() -> SearchController {
        SearchController::new("Avengers", DEFAULT_DEBOUNCE)
    }

    fn fire_all(search: &mut SearchController, timers: &mut TimerQueue) -> Vec<String> {
        let mut terms = Vec::new();
        while timers.in_flight() > 0 {
            if let Some(handle) = timers.fire_next() {
                terms.extend(search.timer_fired(handle));
            }
        }
        terms
    }

    #[test]
    fn rapid_keystrokes_collapse_into_one_search() {
        let mut search = controller();
        let mut timers = TimerQueue::new();

        search.keystroke("A", &mut timers);
        search.keystroke("Av", &mut timers);
        search.keystroke("Ave", &mut timers);
        assert!(search.is_pending());

        assert_eq!(fire_all(&mut search, &mut timers), vec!["Ave".to_string()]);
        assert_eq!(search.committed(), "Ave");
        assert!(!search.is_pending());
    }

    #[test]
    fn submit_cancels_pending_debounce() {
        let mut search = controller();
        let mut timers = TimerQueue::new();

        search.push_char('!', &mut timers);
        assert_eq!(search.submit(&mut timers), "Avengers!");
        assert!(fire_all(&mut search, &mut timers).is_empty());
    }

    #[test]
    fn clear_commits_empty_term() {
        let mut search = controller();
        let mut timers = TimerQueue::new();

        search.keystroke("Matrix", &mut timers);
        assert_eq!(search.clear(&mut timers), "");
        assert_eq!(search.input(), "");
        assert!(fire_all(&mut search, &mut timers).is_empty());
    }

    #[test]
    fn backspace_on_empty_query_schedules_nothing() {
        let mut search = SearchController::new("", DEFAULT_DEBOUNCE);
        let mut timers = TimerQueue::new();
        assert!(!search.pop_char(&mut timers));
        assert!(timers.drain_requests().is_empty());
    }
}
