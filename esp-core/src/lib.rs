//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die Traits für serielle Schnittstelle und LED-Strip,
//! das Datenmodell und den kompletten Empfangs-/Dekodier-/Ausgabe-Zyklus.

#![no_std]

pub mod controller;
pub mod logic;
pub mod output;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use controller::SerialRgbController;
pub use logic::{decode_color, parse_hex_prefix, scale_brightness, split_rgb};
pub use output::OutputUpdater;
pub use traits::{SerialChannel, StripDriver};
pub use types::{
    COLOR_TOKEN_LEN, COMMAND_BUFFER_CAPACITY, ColorToken, CommandBuffer, LinkState, OUTPUT_SLOT,
    PollOutcome,
};
