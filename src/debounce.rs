//! Time-based button debouncing.
//!
//! The raw level must hold steady for the debounce period before it is
//! reported as a new stable level. Timestamps are supplied by the caller.

use crate::dialogue::Millis;

/// Debounce state for one button.
pub struct Debouncer {
    debounce_ms: Millis,
    stable: bool,
    candidate: bool,
    candidate_since: Millis,
}

impl Debouncer {
    /// Create a debouncer whose stable level starts as released.
    pub const fn new(debounce_ms: Millis) -> Self {
        Self {
            debounce_ms,
            stable: false,
            candidate: false,
            candidate_since: 0,
        }
    }

    /// Feed the raw pressed level sampled at `now`.
    ///
    /// Returns `Some(level)` on the poll where a new stable level is
    /// established, `None` otherwise.
    pub fn update(&mut self, pressed: bool, now: Millis) -> Option<bool> {
        if pressed != self.candidate {
            self.candidate = pressed;
            self.candidate_since = now;
        }

        if self.candidate != self.stable
            && now.saturating_sub(self.candidate_since) >= self.debounce_ms
        {
            self.stable = self.candidate;
            return Some(self.stable);
        }

        None
    }

    /// Current debounced level.
    pub fn is_pressed(&self) -> bool {
        self.stable
    }
}
