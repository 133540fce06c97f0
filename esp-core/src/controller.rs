//! Serial RGB Controller - Empfangs-/Dekodier-/Ausgabe-Zyklus
//!
//! Ablauf:
//! 1. `wait_for_host()` einmalig beim Start (LED aus, dann auf Host warten)
//! 2. `poll()` endlos: Daten prüfen → lesen → dekodieren → LED setzen
//!
//! Single-threaded und ohne Locks: Puffer, Token und LED gehören
//! ausschließlich diesem Controller.

use embedded_hal::delay::DelayNs;
use rgb::RGB8;

use crate::logic::decode_color;
use crate::output::OutputUpdater;
use crate::traits::{SerialChannel, StripDriver};
use crate::types::{ColorToken, CommandBuffer, LinkState, PollOutcome};

pub struct SerialRgbController<S: SerialChannel, D: StripDriver> {
    serial: S,
    updater: OutputUpdater<D>,
    buffer: CommandBuffer,
    token: ColorToken,
    state: LinkState,
}

impl<S: SerialChannel, D: StripDriver> SerialRgbController<S, D> {
    pub fn new(serial: S, strip: D) -> Self {
        Self {
            serial,
            updater: OutputUpdater::new(strip),
            buffer: CommandBuffer::new(),
            token: ColorToken::new(),
            state: LinkState::Disconnected,
        }
    }

    /// Connection Gate: blockiert bis der Host verbunden ist
    ///
    /// Schaltet vorher die LED aus, damit der Startzustand definiert ist.
    /// Prüft alle `interval_ms` Millisekunden, ohne Timeout.
    /// Gibt die Anzahl der Warte-Intervalle zurück.
    pub fn wait_for_host<Dl: DelayNs>(&mut self, delay: &mut Dl, interval_ms: u32) -> u32 {
        self.updater.blank();

        let mut waits: u32 = 0;
        while !self.serial.is_connected() {
            delay.delay_ms(interval_ms);
            waits = waits.saturating_add(1);
        }

        self.state = LinkState::Connected;
        waits
    }

    /// Ein Poll-Zyklus (non-blocking)
    ///
    /// Ohne verfügbare Daten passiert nichts. Sonst wird einmal gelesen,
    /// der Rest des Empfangs verworfen, das Token aus den ersten 6 Bytes
    /// dekodiert und die Farbe auf die LED geschrieben.
    ///
    /// Der Zustand wechselt nur von `Connected` nach `Polling`; ohne
    /// vorheriges `wait_for_host()` bleibt er `Disconnected`.
    pub fn poll(&mut self) -> PollOutcome {
        if self.state == LinkState::Connected {
            self.state = LinkState::Polling;
        }

        if !self.serial.bytes_available() {
            return PollOutcome::Idle;
        }

        let raw = self.buffer.fill_from(&mut self.serial);
        self.serial.flush_rx();

        self.token.load(self.buffer.as_bytes());
        let color = decode_color(self.token.as_bytes());
        self.token.clear();

        self.updater.apply(color);
        PollOutcome::Applied { raw, color }
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    /// Aktuelle Farbe der LED
    pub fn current_color(&self) -> RGB8 {
        self.updater.current()
    }

    pub fn token(&self) -> &ColorToken {
        &self.token
    }

    pub fn updater(&self) -> &OutputUpdater<D> {
        &self.updater
    }

    pub fn serial(&self) -> &S {
        &self.serial
    }

    pub fn serial_mut(&mut self) -> &mut S {
        &mut self.serial
    }
}
