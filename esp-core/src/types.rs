//! Core Types für die serielle Farbsteuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

use crate::traits::SerialChannel;

/// Kapazität des Empfangspuffers in Bytes
pub const COMMAND_BUFFER_CAPACITY: usize = 1024;

/// Anzahl Hex-Zeichen eines Farb-Tokens (`RRGGBB`)
pub const COLOR_TOKEN_LEN: usize = 6;

/// Die einzige angesteuerte LED-Position
pub const OUTPUT_SLOT: usize = 0;

/// Empfangspuffer für einen Poll-Zyklus
///
/// Speicher und gültige Länge werden explizit getrennt geführt.
/// Der Speicher wird zwischen Zyklen nicht gelöscht, nach außen sichtbar
/// ist aber immer nur der Teil, den der letzte Lesevorgang geschrieben hat.
pub struct CommandBuffer {
    data: [u8; COMMAND_BUFFER_CAPACITY],
    len: usize,
}

impl CommandBuffer {
    pub const fn new() -> Self {
        Self {
            data: [0; COMMAND_BUFFER_CAPACITY],
            len: 0,
        }
    }

    /// Liest einmal von der Schnittstelle in den Puffer
    ///
    /// Gibt die Anzahl gültiger Bytes zurück (höchstens `COMMAND_BUFFER_CAPACITY`).
    pub fn fill_from<S: SerialChannel>(&mut self, serial: &mut S) -> usize {
        let read = serial.read(&mut self.data);
        self.len = read.min(COMMAND_BUFFER_CAPACITY);
        self.len
    }

    /// Gültige Bytes des letzten Lesevorgangs
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for CommandBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Farb-Token: bis zu 6 Hex-Zeichen plus Terminator-Slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorToken {
    data: [u8; COLOR_TOKEN_LEN + 1],
    len: usize,
}

impl ColorToken {
    pub const fn new() -> Self {
        Self {
            data: [0; COLOR_TOKEN_LEN + 1],
            len: 0,
        }
    }

    /// Kopiert den Anfang von `src` in das Token
    ///
    /// Kopiert höchstens `COLOR_TOKEN_LEN` Bytes und stoppt am ersten
    /// NUL-Byte. Der Rest des Speichers wird mit Nullen aufgefüllt.
    pub fn load(&mut self, src: &[u8]) {
        self.data = [0; COLOR_TOKEN_LEN + 1];
        self.len = 0;

        for (slot, &byte) in self.data[..COLOR_TOKEN_LEN].iter_mut().zip(src) {
            if byte == 0 {
                break;
            }
            *slot = byte;
            self.len += 1;
        }
    }

    /// Überschreibt das Token komplett mit Nullen
    pub fn clear(&mut self) {
        self.data = [0; COLOR_TOKEN_LEN + 1];
        self.len = 0;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Roher Speicher inklusive Terminator-Slot
    pub fn raw(&self) -> &[u8; COLOR_TOKEN_LEN + 1] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Verbindungs-Zustand des Controllers
///
/// Übergänge sind einseitig: `Disconnected → Connected → Polling`.
/// `Polling` wird bis zum Power-Cycle nicht mehr verlassen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkState {
    #[default]
    Disconnected,
    Connected,
    Polling,
}

/// Ergebnis eines Poll-Zyklus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Keine Daten verfügbar, nichts passiert
    Idle,
    /// Daten gelesen, dekodiert und auf die LED geschrieben
    Applied {
        /// Anzahl gelesener Bytes
        raw: usize,
        color: RGB8,
    },
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LinkState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LinkState::Disconnected => defmt::write!(fmt, "Disconnected"),
            LinkState::Connected => defmt::write!(fmt, "Connected"),
            LinkState::Polling => defmt::write!(fmt, "Polling"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PollOutcome {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PollOutcome::Idle => defmt::write!(fmt, "Idle"),
            PollOutcome::Applied { raw, color } => defmt::write!(
                fmt,
                "Applied {{ raw: {}, rgb: ({}, {}, {}) }}",
                raw,
                color.r,
                color.g,
                color.b
            ),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ColorToken {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "ColorToken {{ {=[u8]:a} }}", self.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_load_exact() {
        let mut token = ColorToken::new();
        token.load(b"FF8000");
        assert_eq!(token.as_bytes(), b"FF8000");
        assert_eq!(token.raw()[COLOR_TOKEN_LEN], 0);
    }

    #[test]
    fn test_token_load_truncates_to_six() {
        let mut token = ColorToken::new();
        token.load(b"00FF00\r\nFFFFFF");
        assert_eq!(token.len(), COLOR_TOKEN_LEN);
        assert_eq!(token.as_bytes(), b"00FF00");
        // Terminator-Slot bleibt immer frei
        assert_eq!(token.raw()[COLOR_TOKEN_LEN], 0);
    }

    #[test]
    fn test_token_load_short_input() {
        let mut token = ColorToken::new();
        token.load(b"FF");
        assert_eq!(token.as_bytes(), b"FF");
        assert_eq!(token.raw(), &[b'F', b'F', 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_token_load_stops_at_nul() {
        let mut token = ColorToken::new();
        token.load(b"AB\0CDEF");
        assert_eq!(token.as_bytes(), b"AB");
    }

    #[test]
    fn test_token_reload_does_not_keep_old_digits() {
        let mut token = ColorToken::new();
        token.load(b"123456");
        token.load(b"7");
        assert_eq!(token.as_bytes(), b"7");
        assert_eq!(token.raw(), &[b'7', 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_token_clear() {
        let mut token = ColorToken::new();
        token.load(b"ABCDEF");
        token.clear();
        assert!(token.is_empty());
        assert_eq!(token.raw(), &[0; COLOR_TOKEN_LEN + 1]);
    }

    #[test]
    fn test_buffer_starts_empty() {
        let buffer = CommandBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.as_bytes(), b"");
    }

    #[test]
    fn test_link_state_default() {
        assert_eq!(LinkState::default(), LinkState::Disconnected);
    }
}
