//! Draw command types

use glam::Vec2;
use serde::Serialize;

/// Linear RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0])
    }

    /// CSS `#rrggbb` form for canvas backends (alpha dropped)
    pub fn to_css(self) -> String {
        let [r, g, b, _] = self.0;
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02X}{:02X}{:02X}", byte(r), byte(g), byte(b))
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BALL: Color = Color::rgb(0x00, 0x95, 0xDD);
    pub const PADDLE: Color = Color::rgb(0x00, 0x95, 0xDD);
    pub const BRICK: Color = Color::rgb(0x00, 0x95, 0xDD);
    pub const HUD_TEXT: Color = Color::rgb(0x00, 0x95, 0xDD);
    pub const BANNER_TEXT: Color = Color::rgb(0xDD, 0x33, 0x00);
}

/// HUD font
pub const FONT: &str = "16px Arial";

/// One primitive to paint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    /// Filled circle
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Filled axis-aligned rectangle, `pos` is the top-left corner
    Rect { pos: Vec2, size: Vec2, color: Color },
    /// Text with its baseline starting at `pos`
    Text {
        pos: Vec2,
        text: String,
        color: Color,
        centered: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_color() {
        assert_eq!(colors::BALL.to_css(), "#0095DD");
        assert_eq!(Color([2.0, -1.0, 0.5, 1.0]).to_css(), "#FF0080");
    }
}
