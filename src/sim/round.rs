//! Round state machine and simulation events
//!
//! Playing -> Won when the last brick falls, Playing -> Lost when the last life
//! is spent. Terminal states only leave through an explicit reset; the
//! presentation layer decides what to show and when to reset.

use serde::{Deserialize, Serialize};

/// Current state of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundState {
    /// Active gameplay
    #[default]
    Playing,
    /// Every brick destroyed
    Won,
    /// Every life spent
    Lost,
}

impl RoundState {
    /// Won or Lost: the simulation is frozen until reset
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundState::Playing)
    }

    /// Banner for the presentation layer to show on a terminal state
    pub fn message(self) -> Option<&'static str> {
        match self {
            RoundState::Playing => None,
            RoundState::Won => Some("YOU WIN, CONGRATS!"),
            RoundState::Lost => Some("GAME OVER"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoundState::Playing => "Playing",
            RoundState::Won => "Won",
            RoundState::Lost => "Lost",
        }
    }
}

/// Something the host may want to react to (sound, flashes, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Brick at grid index destroyed
    BrickDestroyed { index: usize },
    /// Ball reflected off a side or the top wall
    WallBounce,
    /// Ball returned by the paddle
    PaddleBounce,
    /// Ball missed the paddle; `remaining` lives left
    LifeLost { remaining: u32 },
    /// Round entered a terminal state (raised exactly once per round)
    RoundOver(RoundState),
}

/// Transition to a terminal state. No-op unless currently playing.
pub(crate) fn finish(round: &mut RoundState, outcome: RoundState, events: &mut Vec<GameEvent>) {
    debug_assert!(outcome.is_terminal());
    if *round != RoundState::Playing {
        return;
    }
    *round = outcome;
    events.push(GameEvent::RoundOver(outcome));
    log::info!("Round over: {}", outcome.as_str());
}
