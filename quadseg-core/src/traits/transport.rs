//! Segment transport traits
//!
//! The display controller (TM1637 or compatible) keeps one segment register
//! per digit. Boards provide the signalling; the encoder only ever asks for
//! "write these bytes starting at digit N".

/// Display brightness level (0-7)
///
/// The controller supports eight PWM duty steps. Level 0 is dimmest but
/// still lit; use [`DisplayControl::set_display_on`] to blank the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u8);

impl Brightness {
    /// Dimmest level
    pub const MIN: Self = Self(0);

    /// Brightest level
    pub const MAX: Self = Self(7);

    /// Create a brightness level, rejecting values above 7
    pub const fn new(level: u8) -> Option<Self> {
        if level <= Self::MAX.0 {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Create a brightness level, saturating at 7
    pub const fn clamped(level: u8) -> Self {
        if level <= Self::MAX.0 {
            Self(level)
        } else {
            Self::MAX
        }
    }

    /// Raw level (0-7)
    pub const fn level(self) -> u8 {
        self.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self(5)
    }
}

/// Segment data sink
///
/// Implementations transmit segment bytes to the display controller using
/// whatever physical protocol it requires. Writes are blocking: when
/// `write_segments` returns, the controller has latched the data.
pub trait SegmentTransport {
    /// Error type for transport operations
    type Error;

    /// Write segment bytes to consecutive digit registers
    ///
    /// # Arguments
    /// * `offset` - First digit register to write (0 = leftmost)
    /// * `data` - Segment patterns, one byte per digit
    fn write_segments(&mut self, offset: u8, data: &[u8]) -> Result<(), Self::Error>;
}

/// Controller-level display controls
///
/// Brightness and power live in the controller, not in the digit
/// registers, so they sit next to the segment writes.
pub trait DisplayControl: SegmentTransport {
    /// Set the display brightness
    fn set_brightness(&mut self, brightness: Brightness) -> Result<(), Self::Error>;

    /// Turn the display on or off
    ///
    /// Digit registers keep their contents while the display is off.
    fn set_display_on(&mut self, on: bool) -> Result<(), Self::Error>;
}

impl<T: SegmentTransport + ?Sized> SegmentTransport for &mut T {
    type Error = T::Error;

    fn write_segments(&mut self, offset: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write_segments(offset, data)
    }
}

impl<T: DisplayControl + ?Sized> DisplayControl for &mut T {
    fn set_brightness(&mut self, brightness: Brightness) -> Result<(), Self::Error> {
        (**self).set_brightness(brightness)
    }

    fn set_display_on(&mut self, on: bool) -> Result<(), Self::Error> {
        (**self).set_display_on(on)
    }
}
