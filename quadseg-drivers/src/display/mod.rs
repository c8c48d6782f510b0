//! Display encoder implementations
//!
//! - Four-digit modules with a colon after the second digit

pub mod four_digit;

pub use four_digit::{FourDigitDisplay, COLON_POSITION, DECIMAL_MAX, DECIMAL_MIN, HEX_MAX};
