//! Demo sequence for checking a display module by eye
//!
//! [`run_intro`] walks through brightness levels, raw patterns, decimal
//! and hex values once. [`ClockDemo`] then counts minutes and seconds with
//! a blinking colon, one [`ClockDemo::step`] per second.
//!
//! ```ignore
//! let mut display = FourDigitDisplay::new(transport);
//! demo::run_intro(&mut display, &mut delay)?;
//!
//! let mut clock = ClockDemo::new();
//! loop {
//!     clock.step(&mut display, &mut delay)?;
//! }
//! ```

use embedded_hal::delay::DelayNs;
use quadseg_core::segments::{CELSIUS, DEGREE, MINUS};
use quadseg_core::traits::{Brightness, DisplayControl, SegmentTransport};

use crate::display::FourDigitDisplay;

/// Pause between intro stages
pub const STAGE_DELAY_MS: u32 = 800;

/// Half of one clock tick (colon on, then colon off)
pub const TICK_HALF_MS: u32 = 500;

/// Brightness used once the sweep has finished
const INTRO_BRIGHTNESS: u8 = 3;

/// Raw pattern screens: -1°C, 28°C, "Err ", rectangle
const PATTERN_SCREENS: [[u8; 4]; 4] = [
    [MINUS, 0b0000_0110, DEGREE, CELSIUS],
    [0b0101_1011, 0b0111_1111, DEGREE, CELSIUS],
    [0b0111_1001, 0b0101_0000, 0b0101_0000, 0b0000_0000],
    [0b0011_1001, 0b0000_1001, 0b0000_1001, 0b0000_1111],
];

/// Decimal sweep as (value, pad), ending in overflow
const DECIMAL_SWEEP: [(i32, u8); 9] = [
    (0, 1),
    (1, 1),
    (34, 3),
    (9999, 1),
    (-1, 1),
    (-10, 1),
    (-99, 1),
    (-999, 1),
    (10000, 1),
];

/// Hex sweep as (value, pad), ending in overflow
const HEX_SWEEP: [(u32, u8); 9] = [
    (0, 4),
    (0x1, 2),
    (0x34, 3),
    (0x9999, 4),
    (0x1234, 4),
    (0xABCD, 4),
    (0xBEEF, 4),
    (0xFFFF, 4),
    (0x1_0000, 4),
];

/// Run the one-shot part of the demo
///
/// Initializes the display from its configuration, then shows each stage
/// for [`STAGE_DELAY_MS`].
pub fn run_intro<T, D>(display: &mut FourDigitDisplay<T>, delay: &mut D) -> Result<(), T::Error>
where
    T: DisplayControl,
    D: DelayNs,
{
    display.init()?;

    #[cfg(feature = "defmt")]
    defmt::info!("demo: brightness sweep");

    display.set_brightness(Brightness::MIN)?;
    display.set_time_with(12, 0, true, true)?;
    delay.delay_ms(STAGE_DELAY_MS);

    for level in 1..=Brightness::MAX.level() {
        display.set_brightness(Brightness::clamped(level))?;
        delay.delay_ms(STAGE_DELAY_MS);
    }
    display.set_brightness(Brightness::clamped(INTRO_BRIGHTNESS))?;

    #[cfg(feature = "defmt")]
    defmt::info!("demo: digits and patterns");

    for (position, value) in (0u8..).zip([1u8, 2, 3, 4]) {
        display.set_digit(position, value)?;
    }
    delay.delay_ms(STAGE_DELAY_MS);

    display.overflow()?;
    delay.delay_ms(STAGE_DELAY_MS);

    for screen in PATTERN_SCREENS {
        for (position, pattern) in (0u8..).zip(screen) {
            display.set_raw_digit(position, pattern)?;
        }
        delay.delay_ms(STAGE_DELAY_MS);
    }

    #[cfg(feature = "defmt")]
    defmt::info!("demo: decimal sweep");

    for (value, pad) in DECIMAL_SWEEP {
        display.set_decimal_padded(value, pad)?;
        delay.delay_ms(STAGE_DELAY_MS);
    }

    #[cfg(feature = "defmt")]
    defmt::info!("demo: hex sweep");

    for (value, pad) in HEX_SWEEP {
        display.set_hex_padded(value, pad)?;
        delay.delay_ms(STAGE_DELAY_MS);
    }

    Ok(())
}

/// Minutes:seconds counter with a blinking colon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockDemo {
    minute: u8,
    second: u8,
}

impl ClockDemo {
    /// Start at 00:00
    pub const fn new() -> Self {
        Self {
            minute: 0,
            second: 0,
        }
    }

    /// Start at a given time
    ///
    /// Values above 59 are accepted and wrap on the next advance.
    pub const fn at(minute: u8, second: u8) -> Self {
        Self { minute, second }
    }

    /// Current minute
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Current second
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Move forward one second, wrapping at 59:59
    pub fn advance(&mut self) {
        if self.second >= 59 {
            self.second = 0;
            if self.minute >= 59 {
                self.minute = 0;
            } else {
                self.minute += 1;
            }
        } else {
            self.second += 1;
        }
    }

    /// Show the current time for one second, then advance
    ///
    /// The colon is lit for the first half of the second. Minutes are not
    /// zero padded.
    pub fn step<T, D>(
        &mut self,
        display: &mut FourDigitDisplay<T>,
        delay: &mut D,
    ) -> Result<(), T::Error>
    where
        T: SegmentTransport,
        D: DelayNs,
    {
        display.set_time_with(self.minute, self.second, true, false)?;
        delay.delay_ms(TICK_HALF_MS);

        display.set_double_dots(false)?;
        delay.delay_ms(TICK_HALF_MS);

        self.advance();
        Ok(())
    }
}
