//! Library interface for module-operator.
//!
//! A single push button plus a byte-valued dial let an operator cycle
//! through the module's modes, dial in an address and apply a value to
//! it. Everything in this crate is pure logic that runs (and is tested)
//! on the host; no embedded hardware required.
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and is only built with `--features embedded`.
//!
//! # Features
//!
//! - **`defmt`**: derive `defmt::Format` on public types and log dialogue
//!   transitions
//! - **`embedded`**: build the nRF52840 firmware binary

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod debounce;
pub mod dialogue;
pub mod error;
pub mod handler;
pub mod modes;
pub mod panel;

pub use dialogue::{DialogueEngine, DialogueState, Millis, Outcome};
pub use error::Error;
pub use handler::ModeHandler;
pub use modes::RegisterBank;
pub use panel::{Panel, PanelEvent};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
