// Serial Color Loop - Farb-Befehle vom Host empfangen und anzeigen
use defmt::info;
use embedded_hal::delay::DelayNs;

use crate::{PollOutcome, SerialChannel, SerialRgbController, StripDriver};

/// Hauptschleife der Firmware - kehrt nie zurück
///
/// 1. Connection Gate: LED aus, dann alle `poll_interval_ms` auf den Host prüfen
/// 2. Endlos: `controller.poll()` - liest, dekodiert und setzt die LED
///
/// Die Schleife blockiert nie; ohne Daten ist jeder Durchlauf ein No-op.
/// Beenden nur durch Reset/Power-Cycle.
///
/// # Parameter
/// - `controller`: Controller mit serieller Schnittstelle und Strip Driver
/// - `delay`: Delay für das Connection Gate (esp_hal::delay::Delay)
/// - `poll_interval_ms`: Prüf-Intervall beim Warten auf den Host
pub fn run_serial_color_loop<S, D, Dl>(
    mut controller: SerialRgbController<S, D>,
    delay: &mut Dl,
    poll_interval_ms: u32,
) -> !
where
    S: SerialChannel,
    D: StripDriver,
    Dl: DelayNs,
{
    info!("Serial: {} - waiting for host...", controller.state());
    let waits = controller.wait_for_host(delay, poll_interval_ms);
    info!(
        "Serial: {} after {} ms",
        controller.state(),
        u64::from(waits) * u64::from(poll_interval_ms)
    );

    // Erster Zyklus separat: loggt den Übergang nach Polling
    log_outcome(controller.poll());
    info!("Serial: {} - ready for RRGGBB commands", controller.state());

    loop {
        log_outcome(controller.poll());
    }
}

fn log_outcome(outcome: PollOutcome) {
    // Idle-Zyklen nicht loggen (laufen ohne Pause)
    if let PollOutcome::Applied { .. } = outcome {
        info!("Serial: {}", outcome);
    }
}
