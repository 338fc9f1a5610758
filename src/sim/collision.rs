//! Collision predicates for the rectangular arena
//!
//! All tests look one tick ahead: the ball's velocity is reflected before it
//! would cross a boundary, so it never leaves the arena at the given speed.
//! Brick hits use the ball centre only (a coarse point-in-rectangle test, not
//! a circle/rectangle intersection).

use glam::Vec2;

/// Which arena boundary the ball is about to cross
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Top,
    Bottom,
}

/// Would the next position cross the left or right wall?
#[inline]
pub fn crosses_side_wall(next: Vec2, radius: f32, arena_width: f32) -> bool {
    next.x > arena_width - radius || next.x < radius
}

/// Top wall takes precedence; the bottom edge is only checked when the top
/// wall is not being crossed.
#[inline]
pub fn vertical_crossing(next: Vec2, radius: f32, arena_height: f32) -> Option<Boundary> {
    if next.y < radius {
        Some(Boundary::Top)
    } else if next.y > arena_height - radius {
        Some(Boundary::Bottom)
    } else {
        None
    }
}

/// Horizontal velocity after an off-centre paddle hit
///
/// `offset` is the ball's distance from the paddle centre, normalized to
/// [-1, 1]. The deflection is scaled by the ball's vertical speed so it stays
/// proportional to the current pace, and capped at `max_speed` so repeated
/// hits cannot build up a speed that skips past a wall.
pub fn paddle_english(vel: Vec2, offset: f32, factor: f32, max_speed: f32) -> f32 {
    let offset = offset.clamp(-1.0, 1.0);
    (vel.x + offset * factor * vel.y.abs()).clamp(-max_speed, max_speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_walls() {
        // Ball moving left, about to cross x = radius
        assert!(crosses_side_wall(Vec2::new(9.0, 100.0), 10.0, 480.0));
        assert!(crosses_side_wall(Vec2::new(471.0, 100.0), 10.0, 480.0));
        assert!(!crosses_side_wall(Vec2::new(10.0, 100.0), 10.0, 480.0));
        assert!(!crosses_side_wall(Vec2::new(470.0, 100.0), 10.0, 480.0));
    }

    #[test]
    fn test_vertical_crossing() {
        assert_eq!(
            vertical_crossing(Vec2::new(50.0, 9.5), 10.0, 320.0),
            Some(Boundary::Top)
        );
        assert_eq!(
            vertical_crossing(Vec2::new(50.0, 311.0), 10.0, 320.0),
            Some(Boundary::Bottom)
        );
        assert_eq!(vertical_crossing(Vec2::new(50.0, 160.0), 10.0, 320.0), None);
        assert_eq!(vertical_crossing(Vec2::new(50.0, 310.0), 10.0, 320.0), None);
    }

    #[test]
    fn test_paddle_english() {
        let vel = Vec2::new(2.0, 4.0);
        assert_eq!(paddle_english(vel, 0.0, 0.3, 150.0), 2.0);
        assert!((paddle_english(vel, 1.0, 0.3, 150.0) - 3.2).abs() < 0.0001);
        assert!((paddle_english(vel, -1.0, 0.3, 150.0) - 0.8).abs() < 0.0001);
        // Offsets beyond the paddle edge are clamped
        assert_eq!(
            paddle_english(vel, 5.0, 0.3, 150.0),
            paddle_english(vel, 1.0, 0.3, 150.0)
        );
    }

    #[test]
    fn test_paddle_english_speed_cap() {
        let vel = Vec2::new(149.0, 100.0);
        assert_eq!(paddle_english(vel, 1.0, 0.3, 150.0), 150.0);
        let vel = Vec2::new(-149.0, 100.0);
        assert_eq!(paddle_english(vel, -1.0, 0.3, 150.0), -150.0);
    }
}
