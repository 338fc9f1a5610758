//! Brick Breaker - a single-screen ball-and-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, round state)
//! - `renderer`: Draw-command emission for an external rasterizer
//! - `platform`: Input intent adapter and fixed-timestep frame clock
//! - `settings`: Data-driven game constants

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};
pub use sim::Game;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (the original game is locked to display refresh)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the clock will accept (tab switches, debugger pauses)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Arena dimensions (canvas pixels)
    pub const ARENA_WIDTH: f32 = 480.0;
    pub const ARENA_HEIGHT: f32 = 320.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-tick velocity at game start
    pub const BALL_START_VEL: (f32, f32) = (2.0, 2.0);
    /// Per-tick velocity after a life is lost
    pub const BALL_RESTART_VEL: (f32, f32) = (3.0, -3.0);
    /// Distance of the restart point from the bottom edge
    pub const BALL_RESTART_OFFSET_BOTTOM: f32 = 30.0;

    /// Paddle size as a fraction of the arena
    pub const PADDLE_WIDTH_FRACTION: f32 = 0.1;
    pub const PADDLE_HEIGHT_FRACTION: f32 = 0.02;
    /// Paddle step per tick while a direction is held
    pub const PADDLE_MOVE: f32 = 7.0;
    /// Horizontal deflection scale for off-centre paddle hits
    pub const PADDLE_BOUNCE_FACTOR: f32 = 0.3;

    /// Brick grid
    pub const BRICK_ROWS: usize = 3;
    pub const BRICK_COLUMNS: usize = 5;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;

    pub const START_LIVES: u32 = 3;
}
