//! Presentation module
//!
//! The simulation never rasterizes. This module turns a world snapshot into a
//! flat list of draw commands (shape, position, size, colour) that any 2D
//! backend can paint in order.

pub mod command;
pub mod shapes;

pub use command::{Color, DrawCommand, colors};
pub use shapes::draw_frame;
