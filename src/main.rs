//! module-operator firmware - single-button operator dialogue on nRF52840.
//!
//! Architecture:
//!   - `panel_task` polls the button and dial, sending debounced events
//!   - `main` owns the dialogue engine: it feeds panel events into it and
//!     periodically lets it revert to mode 0 once the operator goes idle
//!
//! Outcomes are logged over RTT; rendering feedback is left to the
//! application built on top.

#![no_std]
#![no_main]

mod buttons;

use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Instant, Ticker};
use module_operator::config::{
    BUTTON_DEBOUNCE_MS, PANEL_EVENT_QUEUE, REGISTERS_PER_MODE, REVERT_CHECK_INTERVAL_MS,
    REVERT_INTERVAL_MS,
};
use module_operator::{DialogueEngine, ModeHandler, Outcome, Panel, PanelEvent, RegisterBank};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

/// Number of operating modes.
const MODE_COUNT: usize = 3;

type Mode = RegisterBank<REGISTERS_PER_MODE>;

static PANEL_EVENTS: Channel<CriticalSectionRawMutex, PanelEvent, PANEL_EVENT_QUEUE> =
    Channel::new();

static MODES: StaticCell<[Mode; MODE_COUNT]> = StaticCell::new();
static MODE_TABLE: StaticCell<[&'static dyn ModeHandler; MODE_COUNT]> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("module-operator starting");

    let p = embassy_nrf::init(Default::default());

    // Panel: button 1 of the nRF52840-DK plus an 8-way DIP switch.
    let button = Input::new(p.P0_11, Pull::Up);
    let dial = [
        Input::new(p.P0_03, Pull::Up),
        Input::new(p.P0_04, Pull::Up),
        Input::new(p.P0_28, Pull::Up),
        Input::new(p.P0_29, Pull::Up),
        Input::new(p.P0_30, Pull::Up),
        Input::new(p.P0_31, Pull::Up),
        Input::new(p.P1_01, Pull::Up),
        Input::new(p.P1_02, Pull::Up),
    ];
    let panel = Panel::new(button, dial, BUTTON_DEBOUNCE_MS);
    unwrap!(spawner.spawn(buttons::panel_task(panel, PANEL_EVENTS.sender())));

    let modes: &'static [Mode; MODE_COUNT] =
        MODES.init([Mode::new(), Mode::new(), Mode::with_limit(100)]);
    let table: &'static [&'static dyn ModeHandler] =
        MODE_TABLE.init([&modes[0], &modes[1], &modes[2]]);
    let mut engine = unwrap!(DialogueEngine::new(table, REVERT_INTERVAL_MS));

    let mut revert_ticker = Ticker::every(Duration::from_millis(REVERT_CHECK_INTERVAL_MS));

    info!("Dialogue: {} modes, ready", engine.mode_count());

    loop {
        match select(PANEL_EVENTS.receive(), revert_ticker.next()).await {
            Either::First(event) => {
                let now = Instant::now().as_millis();
                let outcome = engine.handle_event(event.pressed, event.value, now);
                report(&engine, outcome);
            }
            Either::Second(()) => {
                if engine.revert_if_idle(Instant::now().as_millis()) {
                    info!("Dialogue: idle, back to mode 0");
                }
            }
        }
    }
}

fn report(engine: &DialogueEngine<'_>, outcome: Outcome) {
    match outcome {
        Outcome::PressObserved => {}
        Outcome::ModeChange => info!("Mode {}", engine.current_mode()),
        Outcome::AddressAccepted => info!(
            "Mode {}: address {} selected",
            engine.current_mode(),
            engine.pending_address()
        ),
        Outcome::AddressRejected => warn!("Mode {}: address rejected", engine.current_mode()),
        Outcome::ValueAccepted => info!("Mode {}: value stored", engine.current_mode()),
        Outcome::ValueRejected => warn!("Mode {}: value rejected", engine.current_mode()),
    }
}
