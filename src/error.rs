//! Unified error type for module-operator.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Rejected addresses and values are *not* errors; they are ordinary
//! dialogue outcomes (see [`crate::dialogue::Outcome`]).

use core::fmt;

/// Top-level error type used across the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The dialogue was constructed with no mode handlers.
    EmptyHandlerTable,

    /// Reading a button or dial GPIO failed.
    Pin,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyHandlerTable => f.write_str("mode handler table is empty"),
            Error::Pin => f.write_str("panel pin read failed"),
        }
    }
}
