//! Board-agnostic core for 4-digit 7-segment display modules
//!
//! This crate contains everything that does not depend on how segment
//! bytes reach the display controller:
//!
//! - Transport traits (segment writes, brightness and power control)
//! - Segment bit layout, the hex glyph table and special symbols
//! - Display configuration types

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod segments;
pub mod traits;

/// Number of digit positions on the display module
pub const DIGIT_COUNT: usize = 4;
