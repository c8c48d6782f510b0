//! Four-digit 7-segment display encoder
//!
//! Keeps a shadow buffer of the four digit registers and turns values into
//! segment patterns:
//! - Single digits (raw patterns or hex glyphs)
//! - Decimal values from -999 to 9999 with optional zero padding
//! - Hex values up to 0xFFFF
//! - Clock times with the colon indicator
//! - An overflow indicator (`----`) for values that do not fit
//!
//! Out-of-range positions and glyphs are ignored. Values that cannot be
//! shown switch the display to the overflow indicator. Neither case is an
//! error; only transport failures are returned.
//!
//! # Usage
//!
//! ```ignore
//! let mut display = FourDigitDisplay::new(transport);
//! display.init()?;
//! display.set_decimal(-42)?;   // _ - 4 2
//! display.set_time(9, 5)?;     // 0 9 : 0 5
//! display.set_double_dots(false)?;
//! ```

use quadseg_core::config::DisplayConfig;
use quadseg_core::segments::{glyph, glyph_wrapping, with_dp, BLANK, GLYPHS, MINUS};
use quadseg_core::traits::{Brightness, DisplayControl, SegmentTransport};
use quadseg_core::DIGIT_COUNT;

/// Digit whose auxiliary bit drives the colon
pub const COLON_POSITION: u8 = 1;

/// Smallest decimal value that fits (one digit is taken by the sign)
pub const DECIMAL_MIN: i32 = -999;

/// Largest decimal value that fits
pub const DECIMAL_MAX: i32 = 9999;

/// Largest hex value that fits
pub const HEX_MAX: u32 = 0xFFFF;

/// Four-digit display encoder
///
/// Owns the transport and the display buffer. Index 0 of the buffer is the
/// leftmost digit. Every operation makes exactly one transport write, or
/// none if the request was ignored.
pub struct FourDigitDisplay<T> {
    transport: T,
    config: DisplayConfig,
    buffer: [u8; DIGIT_COUNT],
}

impl<T: SegmentTransport> FourDigitDisplay<T> {
    /// Create an encoder with the default configuration
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, DisplayConfig::default())
    }

    /// Create an encoder with a specific configuration
    ///
    /// The buffer starts blank. Nothing is sent until the first operation.
    pub fn with_config(transport: T, config: DisplayConfig) -> Self {
        Self {
            transport,
            config,
            buffer: [BLANK; DIGIT_COUNT],
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Current segment patterns, leftmost digit first
    pub fn buffer(&self) -> &[u8; DIGIT_COUNT] {
        &self.buffer
    }

    /// Borrow the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consume the encoder and return the transport
    pub fn release(self) -> T {
        self.transport
    }

    /// Show a raw segment pattern on one digit
    ///
    /// - `position`: 0 (left) to 3 (right); other values are ignored
    /// - `pattern`: segment bits, see [`quadseg_core::segments`]
    pub fn set_raw_digit(&mut self, position: u8, pattern: u8) -> Result<(), T::Error> {
        let Some(slot) = self.buffer.get_mut(position as usize) else {
            return Ok(());
        };
        *slot = pattern;
        self.write_digit(position)
    }

    /// Show a hex glyph (0x0-0xF) on one digit
    ///
    /// Glyph values above 0xF and positions above 3 are ignored.
    pub fn set_digit(&mut self, position: u8, value: u8) -> Result<(), T::Error> {
        match glyph(value) {
            Some(pattern) => self.set_raw_digit(position, pattern),
            None => Ok(()),
        }
    }

    /// Turn the colon on or off
    ///
    /// Only the auxiliary bit of the second digit changes.
    pub fn set_double_dots(&mut self, on: bool) -> Result<(), T::Error> {
        let index = COLON_POSITION as usize;
        self.buffer[index] = with_dp(self.buffer[index], on);
        self.write_digit(COLON_POSITION)
    }

    /// Show a clock time using the configured colon and hour padding
    pub fn set_time(&mut self, hour: u8, minute: u8) -> Result<(), T::Error> {
        self.set_time_with(hour, minute, self.config.double_dots, self.config.pad_hour)
    }

    /// Show a clock time as `HH:MM`
    ///
    /// Hours and minutes are not range checked. Tens digits above 0xF wrap
    /// around the glyph table instead of failing.
    ///
    /// - `double_dots`: show the colon
    /// - `pad_hour`: show a leading zero for hours below 10, otherwise blank it
    pub fn set_time_with(
        &mut self,
        hour: u8,
        minute: u8,
        double_dots: bool,
        pad_hour: bool,
    ) -> Result<(), T::Error> {
        self.buffer[0] = if pad_hour || hour >= 10 {
            glyph_wrapping(hour / 10)
        } else {
            BLANK
        };
        self.buffer[1] = with_dp(glyph_wrapping(hour % 10), double_dots);
        self.buffer[2] = glyph_wrapping(minute / 10);
        self.buffer[3] = glyph_wrapping(minute % 10);
        self.write_all()
    }

    /// Show a decimal value using the configured padding
    pub fn set_decimal(&mut self, value: i32) -> Result<(), T::Error> {
        self.set_decimal_padded(value, self.config.decimal_pad)
    }

    /// Show a decimal value from -999 to 9999
    ///
    /// `pad` is the number of rightmost digits that show `0` instead of
    /// blank when the value has run out of digits. Negative values put the
    /// minus sign directly left of the most significant digit and are never
    /// padded. Values outside the range show the overflow indicator.
    pub fn set_decimal_padded(&mut self, value: i32, pad: u8) -> Result<(), T::Error> {
        if !(DECIMAL_MIN..=DECIMAL_MAX).contains(&value) {
            #[cfg(feature = "defmt")]
            defmt::debug!("decimal {} does not fit, showing overflow", value);
            return self.overflow();
        }

        self.fill_digits(value.unsigned_abs(), 10, pad, value < 0);
        self.write_all()
    }

    /// Show a hex value using the configured padding
    pub fn set_hex(&mut self, value: u32) -> Result<(), T::Error> {
        self.set_hex_padded(value, self.config.hex_pad)
    }

    /// Show a hex value from 0x0000 to 0xFFFF
    ///
    /// Padding works as for [`Self::set_decimal_padded`]. Values above
    /// 0xFFFF show the overflow indicator.
    pub fn set_hex_padded(&mut self, value: u32, pad: u8) -> Result<(), T::Error> {
        if value > HEX_MAX {
            #[cfg(feature = "defmt")]
            defmt::debug!("hex {:#x} does not fit, showing overflow", value);
            return self.overflow();
        }

        self.fill_digits(value, 16, pad, false);
        self.write_all()
    }

    /// Show `----` to signal a value that cannot be displayed
    pub fn overflow(&mut self) -> Result<(), T::Error> {
        self.buffer = [MINUS; DIGIT_COUNT];
        self.write_all()
    }

    /// Blank all digits, including the colon
    pub fn clear(&mut self) -> Result<(), T::Error> {
        self.buffer = [BLANK; DIGIT_COUNT];
        self.write_all()
    }

    /// Render `magnitude` right to left into the buffer
    ///
    /// Once the magnitude runs out, the remaining digits are zero within
    /// `pad` digits of the right edge and blank beyond. A pending sign goes
    /// left of the last extracted digit and stops rendering.
    fn fill_digits(&mut self, mut magnitude: u32, radix: u32, pad: u8, negative: bool) {
        self.buffer = [BLANK; DIGIT_COUNT];

        for i in 0..DIGIT_COUNT {
            let position = DIGIT_COUNT - 1 - i;

            self.buffer[position] = if magnitude == 0 {
                if (pad as usize) > i {
                    GLYPHS[0]
                } else {
                    BLANK
                }
            } else {
                GLYPHS[(magnitude % radix) as usize]
            };

            magnitude /= radix;

            if magnitude == 0 && negative {
                if let Some(sign) = position.checked_sub(1) {
                    self.buffer[sign] = MINUS;
                }
                break;
            }
        }
    }

    fn write_digit(&mut self, position: u8) -> Result<(), T::Error> {
        let index = position as usize;
        self.send(position, index..index + 1)
    }

    fn write_all(&mut self) -> Result<(), T::Error> {
        self.send(0, 0..DIGIT_COUNT)
    }

    fn send(&mut self, offset: u8, range: core::ops::Range<usize>) -> Result<(), T::Error> {
        let data = &self.buffer[range];

        #[cfg(feature = "defmt")]
        defmt::trace!("segments @{}: {}", offset, data);

        self.transport.write_segments(offset, data)
    }
}

impl<T: DisplayControl> FourDigitDisplay<T> {
    /// Bring the display up from the configuration
    ///
    /// Applies power and brightness, then blanks all digits.
    pub fn init(&mut self) -> Result<(), T::Error> {
        #[cfg(feature = "defmt")]
        defmt::info!(
            "display init: on={}, brightness={}",
            self.config.display_on,
            self.config.brightness
        );

        self.transport.set_display_on(self.config.display_on)?;
        self.transport.set_brightness(self.config.brightness())?;
        self.clear()
    }

    /// Set the display brightness
    pub fn set_brightness(&mut self, brightness: Brightness) -> Result<(), T::Error> {
        self.transport.set_brightness(brightness)
    }

    /// Turn the display on or off without touching the digits
    pub fn set_display_on(&mut self, on: bool) -> Result<(), T::Error> {
        self.transport.set_display_on(on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{MirrorError, MirrorTransport};
    use quadseg_core::segments::{CELSIUS, DEGREE, SEG_DP};

    fn g(value: usize) -> u8 {
        GLYPHS[value]
    }

    fn display() -> FourDigitDisplay<MirrorTransport> {
        FourDigitDisplay::new(MirrorTransport::new())
    }

    /// Assert the buffer, the mirrored registers and the last write all agree
    fn assert_full_write(display: &FourDigitDisplay<MirrorTransport>, expected: [u8; 4]) {
        assert_eq!(display.buffer(), &expected);
        assert_eq!(display.transport().digits(), &expected);

        let last = display.transport().last_write().unwrap();
        assert_eq!(last.offset, 0);
        assert_eq!(last.data.as_slice(), &expected);
    }

    #[test]
    fn test_starts_blank_without_writing() {
        let display = display();

        assert_eq!(display.buffer(), &[BLANK; 4]);
        assert!(display.transport().writes().is_empty());
    }

    #[test]
    fn test_raw_digit_writes_one_byte() {
        let mut display = display();

        display.set_raw_digit(2, DEGREE).unwrap();

        assert_eq!(display.buffer(), &[0, 0, DEGREE, 0]);
        let writes = display.transport().writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].offset, 2);
        assert_eq!(writes[0].data.as_slice(), &[DEGREE]);
    }

    #[test]
    fn test_raw_digit_out_of_range_ignored() {
        let mut display = display();
        display.set_raw_digit(3, CELSIUS).unwrap();

        display.set_raw_digit(4, 0xFF).unwrap();
        display.set_raw_digit(255, 0xFF).unwrap();

        assert_eq!(display.buffer(), &[0, 0, 0, CELSIUS]);
        assert_eq!(display.transport().writes().len(), 1);
    }

    #[test]
    fn test_digit_uses_glyph_table() {
        let mut display = display();

        display.set_digit(0, 1).unwrap();
        display.set_digit(1, 2).unwrap();
        display.set_digit(2, 0xB).unwrap();
        display.set_digit(3, 0xF).unwrap();

        assert_eq!(display.buffer(), &[g(1), g(2), g(0xB), g(0xF)]);
        assert_eq!(display.transport().writes().len(), 4);
    }

    #[test]
    fn test_digit_out_of_range_ignored() {
        let mut display = display();

        display.set_digit(0, 16).unwrap();
        display.set_digit(4, 1).unwrap();

        assert_eq!(display.buffer(), &[BLANK; 4]);
        assert!(display.transport().writes().is_empty());
    }

    #[test]
    fn test_double_dots_only_touch_bit7() {
        let mut display = display();
        display.set_digit(1, 7).unwrap();

        display.set_double_dots(true).unwrap();
        assert_eq!(display.buffer()[1], g(7) | SEG_DP);
        let last = display.transport().last_write().unwrap();
        assert_eq!(last.offset, 1);
        assert_eq!(last.data.as_slice(), &[g(7) | SEG_DP]);

        display.set_double_dots(false).unwrap();
        assert_eq!(display.buffer(), &[0, g(7), 0, 0]);
    }

    #[test]
    fn test_time_padded() {
        let mut display = display();

        display.set_time_with(12, 0, true, true).unwrap();

        assert_full_write(&display, [g(1), g(2) | SEG_DP, g(0), g(0)]);
    }

    #[test]
    fn test_time_unpadded_hour() {
        let mut display = display();

        display.set_time_with(5, 30, true, false).unwrap();

        assert_full_write(&display, [BLANK, g(5) | SEG_DP, g(3), g(0)]);
    }

    #[test]
    fn test_time_pad_only_applies_below_ten() {
        let mut display = display();

        display.set_time_with(10, 7, false, false).unwrap();

        assert_full_write(&display, [g(1), g(0), g(0), g(7)]);
    }

    #[test]
    fn test_time_uses_config_defaults() {
        let config = DisplayConfig {
            double_dots: false,
            pad_hour: false,
            ..Default::default()
        };
        let mut display = FourDigitDisplay::with_config(MirrorTransport::new(), config);

        display.set_time(9, 41).unwrap();

        assert_full_write(&display, [BLANK, g(9), g(4), g(1)]);
    }

    #[test]
    fn test_time_unchecked_values_do_not_panic() {
        let mut display = display();

        display.set_time_with(123, 255, true, true).unwrap();

        // 12 -> C, 25 wraps to 9
        assert_full_write(&display, [g(0xC), g(3) | SEG_DP, g(9), g(5)]);
    }

    #[test]
    fn test_decimal_zero() {
        let mut display = display();

        display.set_decimal(0).unwrap();

        assert_full_write(&display, [BLANK, BLANK, BLANK, g(0)]);
    }

    #[test]
    fn test_decimal_padding() {
        let mut display = display();

        display.set_decimal_padded(34, 3).unwrap();
        assert_full_write(&display, [BLANK, g(0), g(3), g(4)]);

        display.set_decimal_padded(7, 0).unwrap();
        assert_full_write(&display, [BLANK, BLANK, BLANK, g(7)]);

        display.set_decimal_padded(0, 0).unwrap();
        assert_full_write(&display, [BLANK; 4]);

        display.set_decimal_padded(5, 200).unwrap();
        assert_full_write(&display, [g(0), g(0), g(0), g(5)]);
    }

    #[test]
    fn test_decimal_limits() {
        let mut display = display();

        display.set_decimal(9999).unwrap();
        assert_full_write(&display, [g(9); 4]);

        display.set_decimal(10000).unwrap();
        assert_full_write(&display, [MINUS; 4]);
    }

    #[test]
    fn test_decimal_negative() {
        let mut display = display();

        display.set_decimal(-1).unwrap();
        assert_full_write(&display, [BLANK, BLANK, MINUS, g(1)]);

        display.set_decimal(-10).unwrap();
        assert_full_write(&display, [BLANK, MINUS, g(1), g(0)]);

        display.set_decimal(-99).unwrap();
        assert_full_write(&display, [BLANK, MINUS, g(9), g(9)]);

        display.set_decimal(-999).unwrap();
        assert_full_write(&display, [MINUS, g(9), g(9), g(9)]);
    }

    #[test]
    fn test_decimal_negative_ignores_padding() {
        let mut display = display();

        display.set_decimal_padded(-5, 4).unwrap();

        assert_full_write(&display, [BLANK, BLANK, MINUS, g(5)]);
    }

    #[test]
    fn test_decimal_negative_overflow() {
        let mut display = display();

        display.set_decimal(-1000).unwrap();
        assert_full_write(&display, [MINUS; 4]);

        display.set_decimal(i32::MIN).unwrap();
        assert_full_write(&display, [MINUS; 4]);
    }

    #[test]
    fn test_decimal_clears_colon() {
        let mut display = display();
        display.set_time_with(12, 34, true, true).unwrap();

        display.set_decimal(1234).unwrap();

        assert_full_write(&display, [g(1), g(2), g(3), g(4)]);
    }

    #[test]
    fn test_hex_values() {
        let mut display = display();

        display.set_hex(0x9999).unwrap();
        assert_full_write(&display, [g(9); 4]);

        display.set_hex(0xBEEF).unwrap();
        assert_full_write(&display, [g(0xB), g(0xE), g(0xE), g(0xF)]);

        display.set_hex(0).unwrap();
        assert_full_write(&display, [g(0); 4]);
    }

    #[test]
    fn test_hex_padding() {
        let mut display = display();

        display.set_hex_padded(1, 2).unwrap();
        assert_full_write(&display, [BLANK, BLANK, g(0), g(1)]);

        display.set_hex_padded(0x34, 3).unwrap();
        assert_full_write(&display, [BLANK, g(0), g(3), g(4)]);
    }

    #[test]
    fn test_hex_overflow() {
        let mut display = display();

        display.set_hex(0xFFFF).unwrap();
        assert_full_write(&display, [g(0xF); 4]);

        display.set_hex(0x1_0000).unwrap();
        assert_full_write(&display, [MINUS; 4]);
    }

    #[test]
    fn test_overflow_idempotent() {
        let mut display = display();

        display.overflow().unwrap();
        let once = *display.buffer();
        display.overflow().unwrap();

        assert_eq!(display.buffer(), &once);
        assert_eq!(display.transport().writes().len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut display = display();
        display.set_decimal(8888).unwrap();

        display.clear().unwrap();

        assert_full_write(&display, [BLANK; 4]);
    }

    #[test]
    fn test_init_applies_config() {
        let config = DisplayConfig {
            brightness: 2,
            display_on: false,
            ..Default::default()
        };
        let mut display = FourDigitDisplay::with_config(MirrorTransport::new(), config);

        display.init().unwrap();

        let transport = display.transport();
        assert_eq!(transport.brightness().level(), 2);
        assert!(!transport.is_on());
        assert_eq!(transport.writes().len(), 1);
        assert_eq!(transport.digits(), &[BLANK; 4]);
    }

    #[test]
    fn test_brightness_passthrough() {
        let mut display = display();

        display.set_brightness(Brightness::MAX).unwrap();
        display.set_display_on(false).unwrap();

        assert_eq!(display.transport().brightness(), Brightness::MAX);
        assert!(!display.transport().is_on());
        assert!(display.transport().writes().is_empty());
    }

    #[test]
    fn test_borrowed_transport() {
        let mut transport = MirrorTransport::new();
        {
            let mut display = FourDigitDisplay::new(&mut transport);
            display.set_decimal(42).unwrap();
        }

        assert_eq!(transport.digits(), &[BLANK, BLANK, g(4), g(2)]);
    }

    /// Transport that fails every write
    struct BrokenTransport;

    impl SegmentTransport for BrokenTransport {
        type Error = MirrorError;

        fn write_segments(&mut self, _offset: u8, _data: &[u8]) -> Result<(), MirrorError> {
            Err(MirrorError::OutOfRange)
        }
    }

    #[test]
    fn test_transport_error_propagates() {
        let mut display = FourDigitDisplay::new(BrokenTransport);

        assert_eq!(display.set_decimal(12), Err(MirrorError::OutOfRange));
        // Buffer keeps the intended contents for the next write
        assert_eq!(display.buffer(), &[BLANK, BLANK, g(1), g(2)]);

        // Ignored requests never reach the transport
        assert_eq!(display.set_digit(0, 99), Ok(()));
        assert_eq!(display.set_raw_digit(9, 0), Ok(()));
    }
}
