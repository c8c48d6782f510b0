//! Display configuration type definitions

use crate::traits::Brightness;
use crate::DIGIT_COUNT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Brightness above 7
    InvalidBrightness,
    /// Zero-padding wider than the display
    InvalidPad,
}

/// Display configuration
///
/// The padding and time fields are the defaults used by the formatting
/// calls that do not take them explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Brightness level applied at init (0-7)
    pub brightness: u8,
    /// Whether the display is switched on at init
    pub display_on: bool,
    /// Number of rightmost digits zero-padded for decimal values
    pub decimal_pad: u8,
    /// Number of rightmost digits zero-padded for hex values
    pub hex_pad: u8,
    /// Show the colon with clock times
    pub double_dots: bool,
    /// Show a leading zero for hours below 10
    pub pad_hour: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            brightness: 5,
            display_on: true,
            decimal_pad: 1,
            hex_pad: DIGIT_COUNT as u8,
            double_dots: true,
            pad_hour: true,
        }
    }
}

impl DisplayConfig {
    /// Check that all fields are in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if Brightness::new(self.brightness).is_none() {
            return Err(ConfigError::InvalidBrightness);
        }

        if self.decimal_pad as usize > DIGIT_COUNT || self.hex_pad as usize > DIGIT_COUNT {
            return Err(ConfigError::InvalidPad);
        }

        Ok(())
    }

    /// Configured brightness, saturated to the controller range
    pub fn brightness(&self) -> Brightness {
        Brightness::clamped(self.brightness)
    }
}
