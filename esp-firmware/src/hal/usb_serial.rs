// USB-Serial-JTAG Channel - serielle Host-Verbindung des ESP32-C6
//
// Der eingebaute USB-Serial-JTAG Controller erscheint am Host als
// CDC-ACM Gerät. Alle Zugriffe sind non-blocking.

use esp_hal::Blocking;
use esp_hal::peripherals::USB_DEVICE;
use esp_hal::usb_serial_jtag::{UsbSerialJtag, UsbSerialJtagRx};

use crate::SerialChannel;
use crate::config::USB_RX_FIFO_SIZE;

/// SerialChannel-Implementierung für den USB-Serial-JTAG Controller
///
/// Der Empfangs-FIFO lässt sich nicht "anschauen" ohne zu lesen,
/// daher landen Bytes aus `bytes_available()` in einem kleinen
/// Zwischenspeicher und werden beim nächsten `read()` zuerst ausgeliefert.
pub struct UsbSerialJtagChannel<'d> {
    rx: UsbSerialJtagRx<'d, Blocking>,
    staged: [u8; USB_RX_FIFO_SIZE],
    staged_len: usize,
}

impl<'d> UsbSerialJtagChannel<'d> {
    pub fn new(usb_device: USB_DEVICE<'d>) -> Self {
        // TX wird nicht gebraucht: das Gerät antwortet dem Host nie
        let (rx, _tx) = UsbSerialJtag::new(usb_device).split();

        Self {
            rx,
            staged: [0; USB_RX_FIFO_SIZE],
            staged_len: 0,
        }
    }
}

impl SerialChannel for UsbSerialJtagChannel<'_> {
    /// Host gilt als verbunden, sobald er Start-of-Frame Pakete sendet
    ///
    /// Ein enumerierter Host schickt jede Millisekunde ein SOF.
    fn is_connected(&mut self) -> bool {
        let regs = USB_DEVICE::regs();
        let sof_seen = regs.int_raw().read().sof().bit_is_set();
        if sof_seen {
            regs.int_clr().write(|w| w.sof().clear_bit_by_one());
        }
        sof_seen
    }

    fn bytes_available(&mut self) -> bool {
        if self.staged_len == 0 {
            self.staged_len = self.rx.drain_rx_fifo(&mut self.staged);
        }
        self.staged_len > 0
    }

    fn read(&mut self, buf: &mut [u8]) -> usize {
        let from_staged = self.staged_len.min(buf.len());
        buf[..from_staged].copy_from_slice(&self.staged[..from_staged]);
        self.staged.copy_within(from_staged..self.staged_len, 0);
        self.staged_len -= from_staged;

        if from_staged < buf.len() {
            from_staged + self.rx.drain_rx_fifo(&mut buf[from_staged..])
        } else {
            from_staged
        }
    }

    fn flush_rx(&mut self) {
        self.staged_len = 0;
        let mut scratch = [0u8; USB_RX_FIFO_SIZE];
        self.rx.drain_rx_fifo(&mut scratch);
    }
}
