//! Mode handler capability.
//!
//! Each operating mode is backed by one [`ModeHandler`]. The dialogue
//! engine borrows an ordered table of them and only ever calls the two
//! methods below.

/// One operating mode reachable through the operator dialogue.
///
/// Methods take `&self`: the table is read-only to the engine. Handlers
/// that keep state of their own use interior mutability.
pub trait ModeHandler {
    /// Check an address supplied by the operator.
    ///
    /// Called as soon as an address has been dialled in, before any value
    /// for it is accepted. Returning `false` cancels the dialogue.
    fn validate_address(&self, address: u8) -> bool;

    /// Apply `value` at a previously validated `address`.
    ///
    /// Returns `false` if the value, the address/value combination or the
    /// operation itself failed. The engine does not distinguish why.
    fn process_value(&self, address: u8, value: u8) -> bool;
}
