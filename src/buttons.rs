//! GPIO panel polling task.
//!
//! Samples the operator button and dial at a fixed rate, debounces the
//! button and forwards every stable transition, together with the dial
//! value read at that moment, to the dialogue channel.

use defmt::{error, trace};
use embassy_nrf::gpio::Input;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Instant, Ticker};
use module_operator::config::{PANEL_EVENT_QUEUE, PANEL_POLL_INTERVAL_MS};
use module_operator::{Panel, PanelEvent};

/// Panel wired to nRF GPIO inputs.
pub type GpioPanel = Panel<Input<'static>, Input<'static>>;

/// Run the panel polling loop.
#[embassy_executor::task]
pub async fn panel_task(
    mut panel: GpioPanel,
    tx: Sender<'static, CriticalSectionRawMutex, PanelEvent, PANEL_EVENT_QUEUE>,
) -> ! {
    let mut ticker = Ticker::every(Duration::from_millis(PANEL_POLL_INTERVAL_MS));

    loop {
        match panel.poll(Instant::now().as_millis()) {
            Ok(Some(event)) => {
                trace!("Panel: {}", event);
                tx.send(event).await;
            }
            Ok(None) => {}
            Err(e) => error!("Panel: {}", e),
        }
        ticker.next().await;
    }
}
