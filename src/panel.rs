//! Operator panel: one push button plus a byte-valued dial.
//!
//! The dial is a bank of [`DIAL_BITS`] active-low inputs (a DIP switch or
//! a binary-coded rotary switch). Input 0 is the least significant bit and
//! a closed contact reads as `1`.
//!
//! [`Panel::poll`] is meant to be called at a fixed rate. It debounces the
//! button and, whenever the debounced level changes, samples the dial and
//! reports both together as a [`PanelEvent`].

use embedded_hal::digital::InputPin;

use crate::config::DIAL_BITS;
use crate::debounce::Debouncer;
use crate::dialogue::Millis;
use crate::error::Error;

/// A debounced button transition with the dial value read alongside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelEvent {
    /// `true` on press, `false` on release.
    pub pressed: bool,
    /// Dial byte sampled on the same poll.
    pub value: u8,
}

/// Button and dial inputs of the operator panel.
pub struct Panel<B, D> {
    button: B,
    dial: [D; DIAL_BITS],
    debouncer: Debouncer,
}

impl<B: InputPin, D: InputPin> Panel<B, D> {
    /// Build a panel from an active-low button and the dial inputs.
    pub fn new(button: B, dial: [D; DIAL_BITS], debounce_ms: Millis) -> Self {
        Self {
            button,
            dial,
            debouncer: Debouncer::new(debounce_ms),
        }
    }

    /// Sample the panel at `now`.
    ///
    /// Returns `Ok(Some(_))` only on a debounced button transition.
    pub fn poll(&mut self, now: Millis) -> Result<Option<PanelEvent>, Error> {
        let level = self.button.is_low().map_err(|_| Error::Pin)?;

        match self.debouncer.update(level, now) {
            Some(pressed) => {
                let value = self.read_dial()?;
                Ok(Some(PanelEvent { pressed, value }))
            }
            None => Ok(None),
        }
    }

    /// Read the dial as a byte.
    pub fn read_dial(&mut self) -> Result<u8, Error> {
        let mut value = 0u8;
        for (bit, pin) in self.dial.iter_mut().enumerate() {
            if pin.is_low().map_err(|_| Error::Pin)? {
                value |= 1 << bit;
            }
        }
        Ok(value)
    }

    /// Debounced button level.
    pub fn is_pressed(&self) -> bool {
        self.debouncer.is_pressed()
    }
}
