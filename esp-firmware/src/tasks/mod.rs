// Task-Modul: Enthält die Hauptschleife der Firmware
//
// Es gibt genau einen Kontrollfluss: einmaliges Warten auf den Host,
// danach eine endlose, nie blockierende Poll-Schleife.

pub mod serial_color;

// Re-export für einfachen Import
pub use serial_color::run_serial_color_loop;
