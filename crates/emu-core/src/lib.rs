//! Core traits and types shared by the emulator cores.
//!
//! Every core exposes its internal state for inspection through
//! [`Observable`]. Queries never affect emulation state.

mod observable;

pub use observable::{Observable, Value};
