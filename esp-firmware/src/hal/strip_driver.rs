// SmartLED Strip Driver - WS2812 über das RMT Peripheral
//
// Farben werden mit set() vorgemerkt und erst bei commit()
// gemeinsam an den Strip gesendet.

use defmt::{error, warn};
use esp_hal::Blocking;
use esp_hal::rmt::{PulseCode, Rmt};
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use crate::config::LED_COUNT;
use crate::{StripDriver, scale_brightness};

// Buffer-Größe: 3 Farben * 8 Bits pro LED + 1 Reset
pub const LED_BUFFER_SIZE: usize = LED_COUNT * 24 + 1;

/// Real Hardware Strip Driver
///
/// Hinweis: Der RMT-Buffer muss länger leben als der Driver, daher wird er
/// in main() erstellt (smart_led_buffer! Macro) und als Parameter übergeben.
pub struct RmtStripDriver<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
    staged: [RGB8; LED_COUNT],
    brightness: u8,
}

impl<'a> RmtStripDriver<'a> {
    /// Erstellt einen neuen RmtStripDriver
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer! Macro)
    /// - `brightness`: Globale Helligkeit, wird bei commit() angewendet
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [PulseCode; LED_BUFFER_SIZE],
        brightness: u8,
    ) -> Self {
        // RMT initialisieren - ohne RMT gibt es keine LED, daher Panic
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .expect("Failed to initialize RMT");

        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Self {
            led,
            staged: [RGB8::default(); LED_COUNT],
            brightness,
        }
    }
}

impl StripDriver for RmtStripDriver<'_> {
    fn set(&mut self, index: usize, color: RGB8) {
        match self.staged.get_mut(index) {
            Some(slot) => *slot = color,
            None => warn!("Strip: index {} out of range (LED_COUNT = {})", index, LED_COUNT),
        }
    }

    fn commit(&mut self) {
        let brightness = self.brightness;
        let pixels = self
            .staged
            .iter()
            .map(|color| scale_brightness(*color, brightness));

        // Fehler werden nur geloggt - der Aufrufer hat keinen Fehlerkanal
        if self.led.write(pixels).is_err() {
            error!("Strip: failed to write to LED");
        }
    }
}
