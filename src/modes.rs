//! Register-bank mode handler.
//!
//! The simplest useful mode: `N` byte registers, addressed `0..N`. Values
//! above an optional limit are refused.

use core::cell::Cell;

use crate::handler::ModeHandler;

/// A bank of `N` byte-wide registers.
pub struct RegisterBank<const N: usize> {
    registers: [Cell<u8>; N],
    limit: u8,
}

impl<const N: usize> RegisterBank<N> {
    /// All registers zeroed, any value accepted.
    pub fn new() -> Self {
        Self::with_limit(u8::MAX)
    }

    /// All registers zeroed, values above `limit` rejected.
    pub fn with_limit(limit: u8) -> Self {
        Self {
            registers: core::array::from_fn(|_| Cell::new(0)),
            limit,
        }
    }

    /// Current content of register `address`, `None` if out of range.
    pub fn get(&self, address: u8) -> Option<u8> {
        self.registers.get(usize::from(address)).map(Cell::get)
    }
}

impl<const N: usize> Default for RegisterBank<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ModeHandler for RegisterBank<N> {
    fn validate_address(&self, address: u8) -> bool {
        usize::from(address) < N
    }

    fn process_value(&self, address: u8, value: u8) -> bool {
        if value > self.limit {
            return false;
        }
        match self.registers.get(usize::from(address)) {
            Some(register) => {
                register.set(value);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_past_the_bank_are_invalid() {
        let bank = RegisterBank::<4>::new();
        assert!(bank.validate_address(0));
        assert!(bank.validate_address(3));
        assert!(!bank.validate_address(4));
        assert!(!bank.validate_address(255));
    }

    #[test]
    fn process_value_stores_in_range() {
        let bank = RegisterBank::<4>::new();
        assert!(bank.process_value(2, 200));
        assert_eq!(bank.get(2), Some(200));
        assert_eq!(bank.get(0), Some(0));
        assert_eq!(bank.get(4), None);
        assert!(!bank.process_value(9, 1));
    }

    #[test]
    fn limit_rejects_large_values_and_keeps_old_content() {
        let bank = RegisterBank::<2>::with_limit(100);
        assert!(bank.process_value(1, 100));
        assert!(!bank.process_value(1, 101));
        assert_eq!(bank.get(1), Some(100));
    }
}
