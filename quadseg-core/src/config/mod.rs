//! Configuration types
//!
//! Board-agnostic display settings. With the `serde` feature enabled they
//! can be embedded in a board's configuration file.

pub mod types;

pub use types::*;
