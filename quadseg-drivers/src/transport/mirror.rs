//! In-memory mirror of a display controller
//!
//! Holds the same state a TM1637 keeps: six grid registers (the 4-digit
//! module wires up the first four), brightness and the on/off flag. Every
//! segment write is also appended to a bounded log so callers can check
//! exactly what would have gone over the wire.

use heapless::Vec;
use quadseg_core::traits::{Brightness, DisplayControl, SegmentTransport};
use quadseg_core::DIGIT_COUNT;

/// Number of grid registers in the controller
pub const REGISTER_COUNT: usize = 6;

/// Default number of writes kept in the log
pub const DEFAULT_LOG_CAPACITY: usize = 32;

/// Mirror transport errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MirrorError {
    /// Write was empty or ran past the last register
    OutOfRange,
}

/// One recorded segment write
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentWrite {
    /// First register written
    pub offset: u8,
    /// Bytes written, in register order
    pub data: Vec<u8, REGISTER_COUNT>,
}

/// In-memory display controller
///
/// `N` is the log capacity. Once the log is full, writes still update the
/// registers and are counted in [`MirrorTransport::dropped`].
#[derive(Debug, Clone)]
pub struct MirrorTransport<const N: usize = DEFAULT_LOG_CAPACITY> {
    registers: [u8; REGISTER_COUNT],
    brightness: Brightness,
    display_on: bool,
    log: Vec<SegmentWrite, N>,
    dropped: usize,
}

impl MirrorTransport {
    /// Create a mirror with the default log capacity
    pub fn new() -> Self {
        Self::with_log_capacity()
    }
}

impl<const N: usize> Default for MirrorTransport<N> {
    fn default() -> Self {
        Self::with_log_capacity()
    }
}

impl<const N: usize> MirrorTransport<N> {
    /// Create a mirror keeping up to `N` writes
    ///
    /// Starts in the controller's power-on state: registers cleared,
    /// display off.
    pub fn with_log_capacity() -> Self {
        Self {
            registers: [0; REGISTER_COUNT],
            brightness: Brightness::default(),
            display_on: false,
            log: Vec::new(),
            dropped: 0,
        }
    }

    /// All grid registers
    pub fn registers(&self) -> &[u8; REGISTER_COUNT] {
        &self.registers
    }

    /// Registers wired to the four digits, leftmost first
    pub fn digits(&self) -> &[u8] {
        &self.registers[..DIGIT_COUNT]
    }

    /// Current brightness
    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Check if the display is switched on
    pub fn is_on(&self) -> bool {
        self.display_on
    }

    /// Recorded writes, oldest first
    pub fn writes(&self) -> &[SegmentWrite] {
        &self.log
    }

    /// Most recent recorded write
    pub fn last_write(&self) -> Option<&SegmentWrite> {
        self.log.last()
    }

    /// Number of writes that did not fit in the log
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Forget recorded writes, keeping register state
    pub fn clear_log(&mut self) {
        self.log.clear();
        self.dropped = 0;
    }
}

impl<const N: usize> SegmentTransport for MirrorTransport<N> {
    type Error = MirrorError;

    fn write_segments(&mut self, offset: u8, data: &[u8]) -> Result<(), MirrorError> {
        let start = offset as usize;
        let end = start + data.len();
        if data.is_empty() || end > REGISTER_COUNT {
            return Err(MirrorError::OutOfRange);
        }

        self.registers[start..end].copy_from_slice(data);

        let mut bytes = Vec::new();
        // Cannot fail: length was checked against REGISTER_COUNT above
        let _ = bytes.extend_from_slice(data);
        if self.log.push(SegmentWrite { offset, data: bytes }).is_err() {
            self.dropped += 1;
        }

        Ok(())
    }
}

impl<const N: usize> DisplayControl for MirrorTransport<N> {
    fn set_brightness(&mut self, brightness: Brightness) -> Result<(), MirrorError> {
        self.brightness = brightness;
        Ok(())
    }

    fn set_display_on(&mut self, on: bool) -> Result<(), MirrorError> {
        self.display_on = on;
        Ok(())
    }
}
