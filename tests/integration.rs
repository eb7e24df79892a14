//! Integration tests for module-operator host-testable logic.
//!
//! These drive the public API the way the firmware does: panel events in,
//! dialogue outcomes out.

use core::cell::Cell;
use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin};
use module_operator::config::{BUTTON_DEBOUNCE_MS, DIAL_BITS, TAP_WINDOW_MS};
use module_operator::{DialogueEngine, ModeHandler, Outcome, Panel, RegisterBank};

struct Contact<'a>(&'a Cell<bool>);

impl ErrorType for Contact<'_> {
    type Error = Infallible;
}

impl InputPin for Contact<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }
}

/// Simulated operator panel driven at a 10 ms poll rate.
struct Bench<'a> {
    button: &'a Cell<bool>,
    dial: &'a [Cell<bool>; DIAL_BITS],
    panel: Panel<Contact<'a>, Contact<'a>>,
    now: u64,
}

impl<'a> Bench<'a> {
    fn new(button: &'a Cell<bool>, dial: &'a [Cell<bool>; DIAL_BITS]) -> Self {
        let panel = Panel::new(Contact(button), dial.each_ref().map(Contact), BUTTON_DEBOUNCE_MS);
        Self {
            button,
            dial,
            panel,
            now: 0,
        }
    }

    fn set_dial(&self, value: u8) {
        for (i, bit) in self.dial.iter().enumerate() {
            bit.set(value & (1 << i) != 0);
        }
    }

    /// Hold the button at `pressed` for `ms`, feeding every transition to
    /// the engine. Returns the outcomes produced.
    fn hold(&mut self, engine: &mut DialogueEngine<'_>, pressed: bool, ms: u64) -> Vec<Outcome> {
        self.button.set(pressed);
        let mut outcomes = Vec::new();
        let end = self.now + ms;
        while self.now < end {
            if let Some(event) = self.panel.poll(self.now).unwrap() {
                outcomes.push(engine.handle_event(event.pressed, event.value, self.now));
            }
            self.now += 10;
        }
        outcomes
    }
}

#[test]
fn tap_cycles_modes_through_the_panel() {
    let button = Cell::new(false);
    let dial: [Cell<bool>; DIAL_BITS] = Default::default();
    let mut bench = Bench::new(&button, &dial);

    let a = RegisterBank::<4>::new();
    let b = RegisterBank::<4>::new();
    let table: [&dyn ModeHandler; 2] = [&a, &b];
    let mut engine = DialogueEngine::new(&table, 30_000).unwrap();

    assert_eq!(bench.hold(&mut engine, true, 150), vec![Outcome::PressObserved]);
    assert_eq!(bench.hold(&mut engine, false, 150), vec![Outcome::ModeChange]);
    assert_eq!(engine.current_mode(), 1);

    bench.hold(&mut engine, true, 150);
    bench.hold(&mut engine, false, 150);
    assert_eq!(engine.current_mode(), 0);
}

#[test]
fn hold_then_tap_writes_a_register() {
    let button = Cell::new(false);
    let dial: [Cell<bool>; DIAL_BITS] = Default::default();
    let mut bench = Bench::new(&button, &dial);

    let bank = RegisterBank::<8>::new();
    let table: [&dyn ModeHandler; 1] = [&bank];
    let mut engine = DialogueEngine::new(&table, 30_000).unwrap();

    // Long hold with the dial at 5: address 5.
    bench.set_dial(5);
    bench.hold(&mut engine, true, TAP_WINDOW_MS + 200);
    assert_eq!(
        bench.hold(&mut engine, false, 100),
        vec![Outcome::AddressAccepted]
    );
    assert_eq!(engine.pending_address(), Some(5));

    // Quick tap with the dial at 0xA5: value.
    bench.set_dial(0xA5);
    bench.hold(&mut engine, true, 100);
    assert_eq!(
        bench.hold(&mut engine, false, 100),
        vec![Outcome::ValueAccepted]
    );
    assert_eq!(bank.get(5), Some(0xA5));
    assert_eq!(engine.pending_address(), None);
}

#[test]
fn out_of_range_address_is_rejected() {
    let button = Cell::new(false);
    let dial: [Cell<bool>; DIAL_BITS] = Default::default();
    let mut bench = Bench::new(&button, &dial);

    let bank = RegisterBank::<8>::new();
    let table: [&dyn ModeHandler; 1] = [&bank];
    let mut engine = DialogueEngine::new(&table, 30_000).unwrap();

    bench.set_dial(200);
    bench.hold(&mut engine, true, 1500);
    assert_eq!(
        bench.hold(&mut engine, false, 100),
        vec![Outcome::AddressRejected]
    );
    assert_eq!(engine.pending_address(), None);
}

#[test]
fn idle_operator_falls_back_to_first_mode() {
    let button = Cell::new(false);
    let dial: [Cell<bool>; DIAL_BITS] = Default::default();
    let mut bench = Bench::new(&button, &dial);

    let a = RegisterBank::<4>::new();
    let b = RegisterBank::<4>::new();
    let table: [&dyn ModeHandler; 2] = [&a, &b];
    let mut engine = DialogueEngine::new(&table, 2000).unwrap();

    bench.hold(&mut engine, true, 100);
    bench.hold(&mut engine, false, 100);
    assert_eq!(engine.current_mode(), 1);

    let pressed_at = engine.last_press_at().unwrap();
    assert!(!engine.revert_if_idle(pressed_at + 2000));
    assert!(engine.revert_if_idle(pressed_at + 2001));
    assert_eq!(engine.current_mode(), 0);
    assert!(!engine.revert_if_idle(pressed_at + 10_000));
}
