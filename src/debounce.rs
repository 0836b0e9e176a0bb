//! Quiescence-window coalescing for the search boxes.
//!
//! The view feeds every keystroke into the debouncer; the committed value is
//! only released once the window elapses with no further input. Callers
//! supply the clock, so there are no timers or threads and the behavior is
//! fully deterministic under test.
use std::time::{Duration, Instant};

/// Default quiescence window, matching the original 300 ms keystroke timer.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Clone, Debug)]
struct Pending {
    value: String,
    deadline: Instant,
}

/// Coalesces rapid text input into a single committed value.
#[derive(Clone, Debug)]
pub struct SearchDebouncer {
    window: Duration,
    pending: Option<Pending>,
}

impl SearchDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Records a keystroke, restarting the quiescence window.
    pub fn input<S: Into<String>>(&mut self, value: S, now: Instant) {
        self.pending = Some(Pending {
            value: value.into(),
            deadline: now + self.window,
        });
    }

    /// Releases the pending value once the window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending.take().map(|p| p.value)
            }
            _ => None,
        }
    }

    /// Commits the pending value immediately, window or not.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEBOUNCE)
    }
}
