//! Single-button operator dialogue.
//!
//! One button plus a byte-valued dial drive a small grammar:
//!
//! ```text
//!            tap (no address)                 dwell, address valid
//!   Idle ───────────────────▶ next mode   Idle ─────────────────────▶ AwaitingValue{a}
//!
//!                         tap: process_value(a, value)
//!   AwaitingValue{a} ──────────────────────────────────▶ Idle
//! ```
//!
//! A release is a *tap* when it is observed within
//! [`TAP_WINDOW_MS`](crate::config::TAP_WINDOW_MS) of the most recent
//! press, and a *dwell* otherwise. The window is measured from the last
//! recorded press to the current call, not from a press/release pair.
//!
//! The engine owns no clock: every call carries the caller's monotonic
//! millisecond timestamp.


use crate::config::TAP_WINDOW_MS;
use crate::error::Error;
use crate::handler::ModeHandler;

/// Monotonic milliseconds since start, supplied by the caller.
pub type Millis = u64;

/// Result of feeding one button observation into the dialogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// A press was recorded. Nothing else changed.
    PressObserved,
    /// The active mode advanced to the next handler.
    ModeChange,
    /// The dialled address was accepted and is now pending.
    AddressAccepted,
    /// The dialled address was rejected by the active handler.
    AddressRejected,
    /// The active handler applied the value at the pending address.
    ValueAccepted,
    /// The active handler refused the value at the pending address.
    ValueRejected,
}

/// Where the current dialogue cycle stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DialogueState {
    /// No address staged.
    #[default]
    Idle,
    /// An address was accepted; the next tap applies a value to it.
    AwaitingValue { address: u8 },
}

impl DialogueState {
    /// The staged address, if any.
    pub fn pending_address(&self) -> Option<u8> {
        match *self {
            DialogueState::Idle => None,
            DialogueState::AwaitingValue { address } => Some(address),
        }
    }
}

/// Dialogue state machine over a borrowed table of mode handlers.
pub struct DialogueEngine<'a> {
    handlers: &'a [&'a dyn ModeHandler],
    revert_interval_ms: Millis,
    current_mode: usize,
    state: DialogueState,
    last_press_at: Option<Millis>,
}

impl<'a> DialogueEngine<'a> {
    /// Create an engine in mode 0 with nothing pending.
    ///
    /// Fails with [`Error::EmptyHandlerTable`] if `handlers` is empty.
    pub fn new(handlers: &'a [&'a dyn ModeHandler], revert_interval_ms: Millis) -> Result<Self, Error> {
        if handlers.is_empty() {
            return Err(Error::EmptyHandlerTable);
        }
        Ok(Self {
            handlers,
            revert_interval_ms,
            current_mode: 0,
            state: DialogueState::Idle,
            last_press_at: None,
        })
    }

    /// Feed one button observation taken at `now`.
    ///
    /// `pressed` is the button level for this poll, `value` the dial byte
    /// sampled alongside it.
    pub fn handle_event(&mut self, pressed: bool, value: u8, now: Millis) -> Outcome {
        if pressed {
            self.last_press_at = Some(now);
            return Outcome::PressObserved;
        }

        if self.in_tap_window(now) {
            match self.state {
                DialogueState::AwaitingValue { address } => self.apply_value(address, value),
                DialogueState::Idle => self.advance_mode(),
            }
        } else {
            self.stage_address(value)
        }
    }

    /// Reset to mode 0 with nothing pending once `now` is more than the
    /// revert interval past the last press (or past start, if there has
    /// been none).
    ///
    /// Returns `true` if this call changed anything. `last_press_at` is
    /// left untouched, so repeated calls are no-ops.
    pub fn revert_if_idle(&mut self, now: Millis) -> bool {
        let since = self.last_press_at.unwrap_or(0);
        if now <= since.saturating_add(self.revert_interval_ms) {
            return false;
        }
        if self.current_mode == 0 && self.state == DialogueState::Idle {
            return false;
        }

        info!(
            "Dialogue: idle since {}ms, reverting from mode {}",
            since,
            self.current_mode
        );
        self.current_mode = 0;
        self.state = DialogueState::Idle;
        true
    }

    /// Index of the active mode handler. Always `< mode_count()`.
    pub fn current_mode(&self) -> usize {
        self.current_mode
    }

    /// Timestamp of the most recent press, `None` before the first one.
    pub fn last_press_at(&self) -> Option<Millis> {
        self.last_press_at
    }

    pub fn pending_address(&self) -> Option<u8> {
        self.state.pending_address()
    }

    pub fn state(&self) -> DialogueState {
        self.state
    }

    /// Number of modes in the handler table.
    pub fn mode_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn revert_interval_ms(&self) -> Millis {
        self.revert_interval_ms
    }

    fn in_tap_window(&self, now: Millis) -> bool {
        self.last_press_at
            .is_some_and(|pressed_at| now < pressed_at.saturating_add(TAP_WINDOW_MS))
    }

    fn active_handler(&self) -> &'a dyn ModeHandler {
        self.handlers[self.current_mode]
    }

    fn advance_mode(&mut self) -> Outcome {
        let from = self.current_mode;
        self.current_mode = (self.current_mode + 1) % self.handlers.len();
        debug!("Dialogue: mode {} -> {}", from, self.current_mode);
        Outcome::ModeChange
    }

    fn stage_address(&mut self, address: u8) -> Outcome {
        if self.active_handler().validate_address(address) {
            debug!("Dialogue: mode {} address {} accepted", self.current_mode, address);
            self.state = DialogueState::AwaitingValue { address };
            Outcome::AddressAccepted
        } else {
            warn!("Dialogue: mode {} address {} rejected", self.current_mode, address);
            self.state = DialogueState::Idle;
            Outcome::AddressRejected
        }
    }

    fn apply_value(&mut self, address: u8, value: u8) -> Outcome {
        self.state = DialogueState::Idle;
        if self.active_handler().process_value(address, value) {
            debug!("Dialogue: mode {} [{}] <- {}", self.current_mode, address, value);
            Outcome::ValueAccepted
        } else {
            warn!("Dialogue: mode {} [{}] <- {} rejected", self.current_mode, address, value);
            Outcome::ValueRejected
        }
    }
}
