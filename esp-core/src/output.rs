//! Output Updater - schreibt dekodierte Farben auf die LED
//!
//! Besitzt den Strip-Treiber exklusiv. Der Zustand der einzigen
//! LED-Position wird nur über `set()` + `commit()` verändert.

use rgb::RGB8;

use crate::traits::StripDriver;
use crate::types::OUTPUT_SLOT;

/// Besitzer des Strip-Treibers und der aktuellen Ausgabe-Farbe
pub struct OutputUpdater<D: StripDriver> {
    driver: D,
    current: RGB8,
}

impl<D: StripDriver> OutputUpdater<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            current: RGB8::default(),
        }
    }

    /// Schaltet die LED aus (Schwarz + Commit)
    pub fn blank(&mut self) {
        self.apply(RGB8::default());
    }

    /// Setzt die Farbe der LED und macht sie sofort sichtbar
    pub fn apply(&mut self, color: RGB8) {
        self.driver.set(OUTPUT_SLOT, color);
        self.driver.commit();
        self.current = color;
    }

    /// Zuletzt geschriebene Farbe
    pub fn current(&self) -> RGB8 {
        self.current
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }
}
