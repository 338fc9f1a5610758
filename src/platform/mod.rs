//! Platform abstraction layer
//!
//! Glue between host events and the simulation:
//! - Input: raw key codes and pointer positions to paddle intents
//! - Clock: variable frame deltas to fixed simulation ticks

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{InputAdapter, Intent, Key};
