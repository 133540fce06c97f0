// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_hal::main bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use defmt::info;

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal_smartled::smart_led_buffer;

// Backtrace bei Panic und defmt-Ausgabe über UART0
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_serial_rgb::SerialRgbController;
use esp_serial_rgb::config::{
    CONNECTION_POLL_INTERVAL_MS, LED_BRIGHTNESS, LED_COUNT, LED_GPIO_PIN, RMT_CLOCK_MHZ,
};
use esp_serial_rgb::hal::{RmtStripDriver, UsbSerialJtagChannel};
use esp_serial_rgb::tasks::run_serial_color_loop;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware und übergibt an die Hauptschleife.
/// Single-threaded, kein Executor: die einzige Warte-Stelle ist das
/// Connection Gate beim Start.
#[esp_hal::main]
fn main() -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!(
        "Serial RGB: {} LED(s) on GPIO{}, brightness {}",
        LED_COUNT, LED_GPIO_PIN, LED_BRIGHTNESS
    );

    // Buffer für SmartLED Daten erstellen
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(LED_COUNT);
    let strip = RmtStripDriver::new(
        peripherals.GPIO8,
        peripherals.RMT,
        RMT_CLOCK_MHZ,
        &mut rmt_buffer,
        LED_BRIGHTNESS,
    );

    // USB-Serial-JTAG als Host-Verbindung
    let serial = UsbSerialJtagChannel::new(peripherals.USB_DEVICE);

    let mut delay = Delay::new();
    let controller = SerialRgbController::new(serial, strip);

    run_serial_color_loop(controller, &mut delay, CONNECTION_POLL_INTERVAL_MS)
}
