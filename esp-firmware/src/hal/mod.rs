// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus esp-core für die ESP32-C6 Hardware:
// RMT → WS2812 LED, USB-Serial-JTAG → serielle Host-Verbindung.

pub mod strip_driver;
pub mod usb_serial;

pub use strip_driver::RmtStripDriver;
pub use usb_serial::UsbSerialJtagChannel;
