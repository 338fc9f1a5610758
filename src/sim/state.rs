//! World state and core simulation types
//!
//! One owned aggregate holds everything the simulation mutates. Hosts read it
//! between ticks and never write to it directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bricks::BrickGrid;
use super::round::{GameEvent, RoundState};
use crate::settings::Settings;

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Centre position
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Position after one more tick at the current velocity
    #[inline]
    pub fn next_pos(&self) -> Vec2 {
        self.pos + self.vel
    }

    /// Serve from a fixed point with a fixed velocity
    pub fn place(&mut self, pos: Vec2, vel: Vec2) {
        self.pos = pos;
        self.vel = vel;
    }

    /// Advance one tick
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed)
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Largest allowed `x` (arena width minus paddle width)
    max_x: f32,
}

impl Paddle {
    /// Paddle centred horizontally at its fixed vertical offset
    pub fn new(settings: &Settings) -> Self {
        let mut paddle = Self {
            x: 0.0,
            y: settings.arena_height - settings.paddle_height - settings.paddle_offset_bottom,
            width: settings.paddle_width,
            height: settings.paddle_height,
            max_x: settings.paddle_max_x().max(0.0),
        };
        paddle.recenter();
        paddle
    }

    pub fn max_x(&self) -> f32 {
        self.max_x
    }

    /// Horizontal centre
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Whether `x` lies strictly inside the paddle's horizontal span
    #[inline]
    pub fn spans(&self, x: f32) -> bool {
        x > self.x && x < self.x + self.width
    }

    /// Set the left edge, clamped to the arena
    pub fn set_x(&mut self, x: f32) {
        // NaN from a broken pointer adapter keeps the paddle where it is
        if x.is_nan() {
            return;
        }
        self.x = x.clamp(0.0, self.max_x);
    }

    /// Centre the paddle on `x`, clamped to the arena
    pub fn center_on(&mut self, x: f32) {
        self.set_x(x - self.width / 2.0);
    }

    /// Shift by `delta`, clamped to the arena
    pub fn nudge(&mut self, delta: f32) {
        self.set_x(self.x + delta);
    }

    pub fn recenter(&mut self) {
        self.x = self.max_x / 2.0;
    }
}

/// Complete world state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    /// Constants this world was built from
    pub settings: Settings,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    /// Bricks destroyed this game
    pub score: u32,
    pub lives: u32,
    pub round: RoundState,
    /// Ticks simulated since the last reset
    pub ticks: u64,
    /// Sum of `dt` passed to the ticks since the last reset
    pub elapsed: f32,
    /// Events raised since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl WorldState {
    /// Build the initial configuration for the given settings
    pub fn new(settings: Settings) -> Self {
        let ball = Ball::new(
            Self::start_pos(&settings),
            Vec2::from(settings.ball_start_vel),
            settings.ball_radius,
        );
        let paddle = Paddle::new(&settings);
        let bricks = BrickGrid::new(&settings.bricks);
        let lives = settings.start_lives;

        Self {
            settings,
            ball,
            paddle,
            bricks,
            score: 0,
            lives,
            round: RoundState::Playing,
            ticks: 0,
            elapsed: 0.0,
            events: Vec::new(),
        }
    }

    /// Reinitialize every field to the starting configuration
    pub fn reset(&mut self) {
        let settings = std::mem::take(&mut self.settings);
        *self = Self::new(settings);
        log::info!(
            "World reset: {} bricks, {} lives",
            self.bricks.len(),
            self.lives
        );
    }

    /// Arena centre
    fn start_pos(settings: &Settings) -> Vec2 {
        Vec2::new(settings.arena_width / 2.0, settings.arena_height / 2.0)
    }

    /// Where the ball is served after a lost life
    pub fn restart_pos(&self) -> Vec2 {
        Vec2::new(
            self.settings.arena_width / 2.0,
            self.settings.arena_height - self.settings.ball_restart_offset_bottom,
        )
    }

    pub fn arena_size(&self) -> Vec2 {
        Vec2::new(self.settings.arena_width, self.settings.arena_height)
    }

    /// Bricks that must be destroyed to win
    pub fn brick_total(&self) -> u32 {
        self.bricks.len() as u32
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_configuration() {
        let state = WorldState::default();
        assert_eq!(state.ball.pos, Vec2::new(240.0, 160.0));
        assert_eq!(state.ball.vel, Vec2::new(2.0, 2.0));
        assert_eq!(state.ball.radius, 10.0);
        assert!((state.paddle.x - 216.0).abs() < 0.001);
        assert!((state.paddle.y - (320.0 - 6.4)).abs() < 0.001);
        assert_eq!(state.bricks.alive_count(), 15);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.round, RoundState::Playing);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = WorldState::default();
        state.score = 4;
        state.lives = 1;
        state.ball.pos = Vec2::new(1.0, 2.0);
        state.round = RoundState::Lost;
        state.bricks.destroy(3);

        state.reset();
        let first = state.clone();
        state.reset();
        assert_eq!(first, state);
        assert_eq!(state, WorldState::default());
    }

    #[test]
    fn test_reset_keeps_settings() {
        let mut settings = Settings::default();
        settings.start_lives = 7;
        let mut state = WorldState::new(settings.clone());
        state.lives = 2;
        state.reset();
        assert_eq!(state.lives, 7);
        assert_eq!(state.settings, settings);
    }

    #[test]
    fn test_paddle_clamps() {
        let mut paddle = Paddle::new(&Settings::default());
        paddle.set_x(-50.0);
        assert_eq!(paddle.x, 0.0);
        paddle.set_x(1000.0);
        assert_eq!(paddle.x, paddle.max_x());
        assert!((paddle.x - 432.0).abs() < 0.001);
        paddle.nudge(7.0);
        assert_eq!(paddle.x, paddle.max_x());
        paddle.center_on(100.0);
        assert!((paddle.x - 76.0).abs() < 0.001);
        let before = paddle.x;
        paddle.set_x(f32::NAN);
        assert_eq!(paddle.x, before);
    }

    #[test]
    fn test_paddle_span_is_open() {
        let mut paddle = Paddle::new(&Settings::default());
        paddle.set_x(100.0);
        assert!(paddle.spans(120.0));
        assert!(!paddle.spans(100.0));
        assert!(!paddle.spans(100.0 + paddle.width));
        assert!(!paddle.spans(99.0));
    }
}
