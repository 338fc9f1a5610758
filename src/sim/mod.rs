//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only (autopilot)
//! - Stable iteration order (brick scan order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod bricks;
pub mod collision;
pub mod game;
pub mod round;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use bricks::{Brick, BrickGrid, BrickStatus};
pub use game::{BallView, BrickView, Game, PaddleView};
pub use round::{GameEvent, RoundState};
pub use state::{Ball, Paddle, WorldState};
pub use tick::{TickInput, tick};
