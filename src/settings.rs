//! Match tuning
//!
//! Every number the simulation reads lives here so a front end can ship a
//! JSON file instead of recompiling. Missing keys fall back to the reference
//! values in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Failure to load a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Keyboard/gamepad movement per tick
    pub human_paddle_speed: f32,
    pub stick_dead_zone: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_base_speed: f32,
    pub ball_initial_velocity: (f32, f32),
    pub ball_speed_increment: f32,

    // === Computer paddle ===
    pub ai_speed: f32,
    pub ai_deadband: f32,

    // === Rules / timing ===
    pub win_score: u32,
    pub tick_hz: u32,
    pub serve_delay_ms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            human_paddle_speed: HUMAN_PADDLE_SPEED,
            stick_dead_zone: STICK_DEAD_ZONE,

            ball_radius: BALL_RADIUS,
            ball_base_speed: BALL_BASE_SPEED,
            ball_initial_velocity: BALL_INITIAL_VELOCITY,
            ball_speed_increment: BALL_SPEED_INCREMENT,

            ai_speed: AI_SPEED,
            ai_deadband: AI_DEADBAND,

            win_score: WIN_SCORE,
            tick_hz: TICK_HZ,
            serve_delay_ms: SERVE_DELAY_MS,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Load tuning, falling back to defaults if the file is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Using default tuning: {}", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject geometry the simulation invariants cannot hold in
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("ball_base_speed", self.ball_base_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("human_paddle_speed", self.human_paddle_speed),
            ("stick_dead_zone", self.stick_dead_zone),
            ("ball_speed_increment", self.ball_speed_increment),
            ("ai_speed", self.ai_speed),
            ("ai_deadband", self.ai_deadband),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TuningError::Invalid(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        if self.paddle_height > self.field_height {
            return Err(TuningError::Invalid(format!(
                "paddle_height {} exceeds field_height {}",
                self.paddle_height, self.field_height
            )));
        }
        if self.field_width <= 2.0 * self.ball_radius {
            return Err(TuningError::Invalid(
                "field must be wider than the ball".to_string(),
            ));
        }
        if self.field_height <= 2.0 * self.ball_radius {
            return Err(TuningError::Invalid(
                "field must be taller than the ball".to_string(),
            ));
        }
        if self.win_score == 0 {
            return Err(TuningError::Invalid("win_score must be at least 1".to_string()));
        }
        if self.tick_hz == 0 {
            return Err(TuningError::Invalid("tick_hz must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Length of one logical tick in seconds
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_hz as f32
    }

    /// Serve delay converted to whole ticks (rounded up)
    pub fn serve_delay_ticks(&self) -> u32 {
        let ticks = (u64::from(self.serve_delay_ms) * u64::from(self.tick_hz)).div_ceil(1000);
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }
}
