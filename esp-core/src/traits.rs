//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

/// Trait für die host-seitige serielle Schnittstelle
///
/// Alle Methoden sind non-blocking. Die einzige Warte-Stelle im System
/// ist das Connection Gate beim Start (siehe `SerialRgbController::wait_for_host`).
///
/// # Implementierungen
/// - **Production:** UsbSerialJtagChannel (ESP32-C6 USB-Serial-JTAG)
/// - **Testing:** MockSerial (in-memory Mock)
pub trait SerialChannel {
    /// Meldet ob der Host aktuell verbunden ist
    fn is_connected(&mut self) -> bool;

    /// Prüft ob Bytes zum Lesen bereitstehen (non-blocking)
    fn bytes_available(&mut self) -> bool;

    /// Liest höchstens `buf.len()` Bytes und gibt die Anzahl zurück
    fn read(&mut self, buf: &mut [u8]) -> usize;

    /// Verwirft nicht gelesene Empfangsdaten
    ///
    /// Danach meldet `bytes_available()` nur noch neu eintreffende Daten.
    fn flush_rx(&mut self);
}

/// Trait für SmartLED Strip-Zugriff
///
/// Abstrahiert einen WS2812/Neopixel Strip mit gestaffeltem Update:
/// `set()` merkt einen Wert vor, `commit()` macht alle vorgemerkten
/// Werte gleichzeitig sichtbar.
///
/// # Fehlerbehandlung
/// Keine - Hardware-Fehler werden von der Implementierung selbst geloggt.
pub trait StripDriver {
    /// Merkt eine RGB-Farbe für die LED an Position `index` vor
    fn set(&mut self, index: usize, color: RGB8);

    /// Schreibt alle vorgemerkten Farben auf die Hardware
    fn commit(&mut self);
}
