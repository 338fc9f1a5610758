//! Simulation object exposed to hosts
//!
//! Owns the world and the input intent buffer. Hosts set intents whenever
//! device events arrive, call `advance` once per tick, and read the world
//! between ticks.

use glam::Vec2;
use serde::Serialize;

use super::bricks::BrickStatus;
use super::round::{GameEvent, RoundState};
use super::state::WorldState;
use super::tick::{TickInput, tick};
use crate::settings::Settings;

/// Ball as seen by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Paddle as seen by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Brick slot as seen by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrickView {
    pub x: f32,
    pub y: f32,
    pub alive: bool,
}

/// A single game session
#[derive(Debug, Clone)]
pub struct Game {
    world: WorldState,
    intent: TickInput,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Game {
    /// A ready-to-play game; `advance` is valid immediately
    pub fn new(settings: Settings) -> Self {
        Self {
            world: WorldState::new(settings),
            intent: TickInput::default(),
        }
    }

    /// Reinitialize every entity. Held intents are kept: keys still held
    /// across a restart keep steering.
    pub fn reset(&mut self) {
        self.world.reset();
    }

    /// Run one tick. No-op once the round is over.
    pub fn advance(&mut self, dt: f32) {
        tick(&mut self.world, &self.intent, dt);
    }

    /// Record held directions, sampled at the start of each tick
    pub fn set_paddle_intent(&mut self, left: bool, right: bool) {
        self.intent = TickInput::new(left, right);
    }

    /// Centre the paddle on an absolute arena x, applied immediately.
    /// Out-of-arena targets are clamped.
    pub fn set_paddle_pointer_target(&mut self, x: f32) {
        if self.world.round.is_terminal() {
            return;
        }
        self.world.paddle.center_on(x);
    }

    pub fn intent(&self) -> TickInput {
        self.intent
    }

    pub fn ball(&self) -> BallView {
        let ball = &self.world.ball;
        BallView {
            x: ball.pos.x,
            y: ball.pos.y,
            radius: ball.radius,
        }
    }

    pub fn ball_velocity(&self) -> Vec2 {
        self.world.ball.vel
    }

    pub fn paddle(&self) -> PaddleView {
        let paddle = &self.world.paddle;
        PaddleView {
            x: paddle.x,
            y: paddle.y,
            width: paddle.width,
            height: paddle.height,
        }
    }

    /// Every slot in scan order, destroyed ones included
    pub fn bricks(&self) -> Vec<BrickView> {
        self.world
            .bricks
            .iter()
            .map(|b| BrickView {
                x: b.pos.x,
                y: b.pos.y,
                alive: b.status == BrickStatus::Alive,
            })
            .collect()
    }

    pub fn score(&self) -> u32 {
        self.world.score
    }

    pub fn lives(&self) -> u32 {
        self.world.lives
    }

    pub fn round_state(&self) -> RoundState {
        self.world.round
    }

    /// "YOU WIN, CONGRATS!" / "GAME OVER" once the round is over
    pub fn terminal_message(&self) -> Option<&'static str> {
        self.world.round.message()
    }

    pub fn settings(&self) -> &Settings {
        &self.world.settings
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    /// Direct world access for scripted setups and tests
    pub fn world_mut(&mut self) -> &mut WorldState {
        &mut self.world
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.world.drain_events()
    }
}
