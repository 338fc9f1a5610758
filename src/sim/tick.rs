//! Simulation tick
//!
//! One call advances the world by exactly one step, in a fixed order:
//! paddle from held intents, brick pass, side walls, top wall or bottom edge
//! (paddle return or lost life), then integration. The order is part of the
//! game's behaviour and must not be rearranged.

use glam::Vec2;

use super::collision::{Boundary, crosses_side_wall, paddle_english, vertical_crossing};
use super::round::{GameEvent, RoundState, finish};
use super::state::WorldState;

/// Input intents for a single tick (last write wins, sampled not consumed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move-left is held
    pub move_left: bool,
    /// Move-right is held
    pub move_right: bool,
}

impl TickInput {
    pub fn new(move_left: bool, move_right: bool) -> Self {
        Self {
            move_left,
            move_right,
        }
    }
}

/// Advance the world by one tick. A no-op once the round is over.
///
/// `dt` is accumulated into `state.elapsed`; motion is per tick.
pub fn tick(state: &mut WorldState, input: &TickInput, dt: f32) {
    if state.round.is_terminal() {
        return;
    }

    state.ticks += 1;
    state.elapsed += dt;

    move_paddle(state, input);

    if resolve_bricks(state) {
        return;
    }

    let next = state.ball.next_pos();
    let radius = state.ball.radius;

    if crosses_side_wall(next, radius, state.settings.arena_width) {
        state.ball.vel.x = -state.ball.vel.x;
        state.events.push(GameEvent::WallBounce);
    }

    match vertical_crossing(next, radius, state.settings.arena_height) {
        Some(Boundary::Top) => {
            state.ball.vel.y = -state.ball.vel.y;
            state.events.push(GameEvent::WallBounce);
        }
        Some(Boundary::Bottom) => {
            if state.paddle.spans(state.ball.pos.x) {
                paddle_return(state);
            } else {
                // Ball is either respawned or the round is over; neither moves this tick
                lose_life(state);
                return;
            }
        }
        None => {}
    }

    state.ball.integrate();
}

/// Paddle Controller: step while a direction is held. Right wins if both are.
fn move_paddle(state: &mut WorldState, input: &TickInput) {
    let step = state.settings.paddle_move;
    if input.move_right {
        state.paddle.nudge(step);
    } else if input.move_left {
        state.paddle.nudge(-step);
    }
}

/// Destroy at most one brick containing the ball centre.
/// Returns true if that brick was the last one and the round is won.
fn resolve_bricks(state: &mut WorldState) -> bool {
    let Some(index) = state.bricks.first_hit(state.ball.pos) else {
        return false;
    };

    state.ball.vel.y = -state.ball.vel.y;
    state.bricks.destroy(index);
    state.score += 1;
    state.events.push(GameEvent::BrickDestroyed { index });
    log::debug!("Brick {} destroyed, score {}", index, state.score);

    if state.score >= state.brick_total() {
        finish(&mut state.round, RoundState::Won, &mut state.events);
        return true;
    }
    false
}

fn paddle_return(state: &mut WorldState) {
    let ball = &mut state.ball;
    if state.settings.paddle_english {
        let half = state.paddle.width / 2.0;
        let offset = (ball.pos.x - state.paddle.center_x()) / half;
        ball.vel.x = paddle_english(
            ball.vel,
            offset,
            state.settings.paddle_bounce_factor,
            state.settings.max_ball_speed(),
        );
        // The side walls were checked against the old dx
        if crosses_side_wall(ball.next_pos(), ball.radius, state.settings.arena_width) {
            ball.vel.x = -ball.vel.x;
        }
    }
    ball.vel.y = -ball.vel.y;
    state.events.push(GameEvent::PaddleBounce);
}

fn lose_life(state: &mut WorldState) {
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::LifeLost {
        remaining: state.lives,
    });
    log::debug!("Life lost, {} remaining", state.lives);

    if state.lives == 0 {
        finish(&mut state.round, RoundState::Lost, &mut state.events);
        return;
    }

    let restart = state.restart_pos();
    state
        .ball
        .place(restart, Vec2::from(state.settings.ball_restart_vel));
    state.paddle.recenter();
}
