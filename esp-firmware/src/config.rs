// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Keine Laufzeit-Konfiguration: alle Werte werden zur Compile-Zeit eingebacken.
// Protokoll-Konstanten (Puffergröße, Token-Länge, LED-Index) liegen in esp-core.

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die RGB LED (WS2812/Neopixel)
/// Onboard-LED des ESP32-C6-DevKitC-1
pub const LED_GPIO_PIN: u8 = 8;

/// Globale Helligkeit für die LED (0-255)
/// 255 = Farben werden unverändert ausgegeben
pub const LED_BRIGHTNESS: u8 = 255;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Anzahl der LEDs im Strip
pub const LED_COUNT: usize = 1;

// ============================================================================
// Serielle Schnittstelle
// ============================================================================

/// Prüf-Intervall beim Warten auf den Host in Millisekunden
pub const CONNECTION_POLL_INTERVAL_MS: u32 = 100;

/// Größe des USB-Serial-JTAG Empfangs-FIFOs in Bytes
pub const USB_RX_FIFO_SIZE: usize = 64;
