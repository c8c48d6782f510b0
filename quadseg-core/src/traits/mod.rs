//! Hardware abstraction traits
//!
//! These traits define the interface between the digit formatting logic
//! and whatever drives the display controller on a given board.

pub mod transport;

pub use transport::{Brightness, DisplayControl, SegmentTransport};
