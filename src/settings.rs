//! Game settings
//!
//! Every tunable constant of the game lives here so a host can reshape the
//! arena or brick layout without touching the simulation. Loaded from a JSON
//! file on native, from LocalStorage in the browser.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Settings loading/validation errors
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Settings file could not be read
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    /// Settings JSON is malformed
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    /// Settings parsed but describe an unplayable arena
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Brick grid layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickLayout {
    /// Horizontal lines of bricks, top to bottom
    pub rows: usize,
    /// Bricks per line, left to right
    pub columns: usize,
    pub width: f32,
    pub height: f32,
    /// Gap between neighbouring bricks
    pub padding: f32,
    pub offset_top: f32,
    pub offset_left: f32,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            columns: BRICK_COLUMNS,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            padding: BRICK_PADDING,
            offset_top: BRICK_OFFSET_TOP,
            offset_left: BRICK_OFFSET_LEFT,
        }
    }
}

impl BrickLayout {
    pub fn count(&self) -> usize {
        self.rows * self.columns
    }

    /// Right edge of the rightmost column
    pub fn extent_x(&self) -> f32 {
        self.offset_left + self.columns as f32 * (self.width + self.padding) - self.padding
    }

    /// Bottom edge of the lowest row
    pub fn extent_y(&self) -> f32 {
        self.offset_top + self.rows as f32 * (self.height + self.padding) - self.padding
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Velocity at game start (per tick)
    pub ball_start_vel: (f32, f32),
    /// Velocity after a lost life (per tick)
    pub ball_restart_vel: (f32, f32),
    /// Restart point distance from the bottom edge
    pub ball_restart_offset_bottom: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between the paddle and the bottom edge
    pub paddle_offset_bottom: f32,
    /// Step per tick while a direction intent is held
    pub paddle_move: f32,
    /// Horizontal deflection scale for off-centre paddle hits
    pub paddle_bounce_factor: f32,
    /// Apply `paddle_bounce_factor` on paddle hits (plain reflection when off)
    pub paddle_english: bool,

    // === Bricks ===
    pub bricks: BrickLayout,

    // === Round ===
    pub start_lives: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_start_vel: BALL_START_VEL,
            ball_restart_vel: BALL_RESTART_VEL,
            ball_restart_offset_bottom: BALL_RESTART_OFFSET_BOTTOM,

            paddle_width: ARENA_WIDTH * PADDLE_WIDTH_FRACTION,
            paddle_height: ARENA_HEIGHT * PADDLE_HEIGHT_FRACTION,
            paddle_offset_bottom: 0.0,
            paddle_move: PADDLE_MOVE,
            paddle_bounce_factor: PADDLE_BOUNCE_FACTOR,
            paddle_english: false,

            bricks: BrickLayout::default(),

            start_lives: START_LIVES,
        }
    }
}

impl Settings {
    /// Default settings for a differently sized arena (paddle scales with it)
    pub fn for_arena(width: f32, height: f32) -> Self {
        Self {
            arena_width: width,
            arena_height: height,
            paddle_width: width * PADDLE_WIDTH_FRACTION,
            paddle_height: height * PADDLE_HEIGHT_FRACTION,
            ..Self::default()
        }
    }

    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject settings the simulation cannot play
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("ball_radius", self.ball_radius),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("bricks.width", self.bricks.width),
            ("bricks.height", self.bricks.height),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.paddle_width > self.arena_width {
            return Err(SettingsError::Invalid(format!(
                "paddle_width {} exceeds arena_width {}",
                self.paddle_width, self.arena_width
            )));
        }
        if self.ball_radius * 2.0 >= self.arena_width.min(self.arena_height) {
            return Err(SettingsError::Invalid(format!(
                "ball_radius {} does not fit the arena",
                self.ball_radius
            )));
        }
        if !(self.ball_radius..=self.arena_height - self.ball_radius)
            .contains(&self.ball_restart_offset_bottom)
        {
            return Err(SettingsError::Invalid(format!(
                "ball_restart_offset_bottom {} puts the restart point outside the arena",
                self.ball_restart_offset_bottom
            )));
        }
        let max_speed = self.max_ball_speed();
        let velocities = [
            ("ball_start_vel", self.ball_start_vel),
            ("ball_restart_vel", self.ball_restart_vel),
        ];
        for (name, (dx, dy)) in velocities {
            for v in [dx, dy] {
                if !v.is_finite() || v.abs() > max_speed {
                    return Err(SettingsError::Invalid(format!(
                        "{name} component {v} exceeds the arena speed limit {max_speed}"
                    )));
                }
            }
        }
        if !self.paddle_offset_bottom.is_finite()
            || self.paddle_offset_bottom < 0.0
            || self.paddle_offset_bottom + self.paddle_height > self.arena_height
        {
            return Err(SettingsError::Invalid(format!(
                "paddle_offset_bottom {} puts the paddle outside the arena",
                self.paddle_offset_bottom
            )));
        }
        if self.paddle_move < 0.0 || self.bricks.padding < 0.0 {
            return Err(SettingsError::Invalid(
                "paddle_move and bricks.padding must not be negative".into(),
            ));
        }
        if self.bricks.count() == 0 {
            return Err(SettingsError::Invalid("brick grid is empty".into()));
        }
        if self.bricks.extent_x() > self.arena_width || self.bricks.extent_y() > self.arena_height
        {
            return Err(SettingsError::Invalid(format!(
                "brick grid {}x{} does not fit the {}x{} arena",
                self.bricks.extent_x(),
                self.bricks.extent_y(),
                self.arena_width,
                self.arena_height
            )));
        }
        if self.start_lives == 0 {
            return Err(SettingsError::Invalid("start_lives must be at least 1".into()));
        }
        Ok(())
    }

    /// Largest per-tick velocity component a ball may have. One reflected
    /// step from anywhere inside `[radius, extent - radius]` lands back inside.
    pub fn max_ball_speed(&self) -> f32 {
        (self.arena_width.min(self.arena_height) - 2.0 * self.ball_radius) / 2.0
    }

    /// Horizontal range the paddle's left edge may occupy
    pub fn paddle_max_x(&self) -> f32 {
        self.arena_width - self.paddle_width
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "brick_breaker_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load_stored() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}
