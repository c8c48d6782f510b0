//! Segment transport implementations
//!
//! Board transports (bit-banged or peripheral-backed TM1637 links) live with
//! the board support code. This module only carries transports that need no
//! hardware.

pub mod mirror;

pub use mirror::{MirrorError, MirrorTransport, SegmentWrite, REGISTER_COUNT};
