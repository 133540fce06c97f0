// Library-Root: Hardware-Anbindung und Hauptschleife
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{
    LinkState, PollOutcome, SerialChannel, SerialRgbController, StripDriver, decode_color,
    scale_brightness,
};
