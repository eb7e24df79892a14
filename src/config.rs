//! Application-wide constants and compile-time configuration.
//!
//! All timing parameters, pin assignments and queue sizes live here so
//! they can be tuned in one place.

// Dialogue

/// A release observed within this many milliseconds of the last press is
/// a "tap" (advance mode / apply value). Anything later is a "dwell"
/// (supply an address).
pub const TAP_WINDOW_MS: u64 = 1000;

/// Inactivity timeout before the dialogue reverts to mode 0 (ms).
pub const REVERT_INTERVAL_MS: u64 = 30_000;

/// How often the firmware asks the engine whether it has gone idle (ms).
pub const REVERT_CHECK_INTERVAL_MS: u64 = 250;

// Panel
//
// These are logical names; actual `embassy_nrf::peripherals::*` pins are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button          → P0.11 (nRF52840-DK button 1)
//   Dial bit 0..3   → P0.03, P0.04, P0.28, P0.29
//   Dial bit 4..7   → P0.30, P0.31, P1.01, P1.02
//
// All inputs are active-low with the internal pull-up enabled.

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Panel sampling period (ms).
pub const PANEL_POLL_INTERVAL_MS: u64 = 10;

/// Number of dial / DIP-switch inputs making up the value byte.
pub const DIAL_BITS: usize = 8;

/// Depth of the panel → dialogue event channel.
pub const PANEL_EVENT_QUEUE: usize = 4;

// Modes

/// Registers exposed by each reference mode handler.
pub const REGISTERS_PER_MODE: usize = 16;
