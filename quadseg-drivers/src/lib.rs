//! Display driver implementations
//!
//! This crate provides concrete implementations on top of the traits
//! defined in quadseg-core:
//!
//! - Four-digit encoder (digits, decimal, hex, clock time, overflow)
//! - In-memory mirror transport for host tests and simulation
//! - Demo sequence for checking a module on real hardware

#![no_std]
#![deny(unsafe_code)]

pub mod demo;
pub mod display;
pub mod transport;

pub use display::FourDigitDisplay;
pub use transport::MirrorTransport;
