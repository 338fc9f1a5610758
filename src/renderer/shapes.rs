//! Frame composition from world state

use glam::Vec2;

use super::command::{DrawCommand, colors};
use crate::sim::WorldState;

/// HUD score position
const SCORE_POS: Vec2 = Vec2::new(8.0, 20.0);
/// HUD lives position, measured from the right edge
const LIVES_INSET: f32 = 65.0;
const HUD_BASELINE: f32 = 20.0;

/// Build the draw list for one frame, in paint order: bricks, ball, paddle,
/// HUD, then the terminal banner if the round is over.
pub fn draw_frame(state: &WorldState) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(state.bricks.len() + 5);

    commands.extend(
        state
            .bricks
            .iter()
            .filter(|b| b.is_alive())
            .map(|b| DrawCommand::Rect {
                pos: b.pos,
                size: b.size,
                color: colors::BRICK,
            }),
    );

    commands.push(DrawCommand::Circle {
        center: state.ball.pos,
        radius: state.ball.radius,
        color: colors::BALL,
    });

    let paddle = &state.paddle;
    commands.push(DrawCommand::Rect {
        pos: Vec2::new(paddle.x, paddle.y),
        size: Vec2::new(paddle.width, paddle.height),
        color: colors::PADDLE,
    });

    commands.push(DrawCommand::Text {
        pos: SCORE_POS,
        text: format!("Score: {}", state.score),
        color: colors::HUD_TEXT,
        centered: false,
    });
    commands.push(DrawCommand::Text {
        pos: Vec2::new(state.settings.arena_width - LIVES_INSET, HUD_BASELINE),
        text: format!("Lives: {}", state.lives),
        color: colors::HUD_TEXT,
        centered: false,
    });

    if let Some(message) = state.round.message() {
        commands.push(DrawCommand::Text {
            pos: state.arena_size() / 2.0,
            text: message.to_string(),
            color: colors::BANNER_TEXT,
            centered: true,
        });
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::RoundState;

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_fresh_frame() {
        let state = WorldState::default();
        let commands = draw_frame(&state);

        // 15 bricks + ball + paddle + 2 HUD lines
        assert_eq!(commands.len(), 19);
        assert!(matches!(commands[15], DrawCommand::Circle { radius, .. } if radius == 10.0));
        assert_eq!(texts(&commands), vec!["Score: 0", "Lives: 3"]);
    }

    #[test]
    fn test_destroyed_bricks_not_drawn() {
        let mut state = WorldState::default();
        state.bricks.destroy(0);
        state.bricks.destroy(14);
        let rects = draw_frame(&state)
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        // 13 bricks + paddle
        assert_eq!(rects, 14);
    }

    #[test]
    fn test_banner_on_terminal_state() {
        let mut state = WorldState::default();
        state.round = RoundState::Won;
        let commands = draw_frame(&state);
        assert!(texts(&commands).contains(&"YOU WIN, CONGRATS!"));

        let Some(DrawCommand::Text { pos, centered, .. }) = commands.last() else {
            panic!("banner should be painted last");
        };
        assert!(*centered);
        assert_eq!(*pos, Vec2::new(240.0, 160.0));
    }

    #[test]
    fn test_lives_anchored_to_right_edge() {
        let state = WorldState::default();
        let lives = draw_frame(&state)
            .into_iter()
            .find_map(|c| match c {
                DrawCommand::Text { pos, text, .. } if text.starts_with("Lives") => Some(pos),
                _ => None,
            })
            .unwrap();
        assert_eq!(lives, Vec2::new(415.0, 20.0));
    }
}
