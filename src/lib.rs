//! Paddle Volley - a two-paddle ball-volley simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, collisions, AI, match state)
//! - `input`: Device capabilities resolved to one paddle displacement
//! - `driver`: Fixed-rate simulation loop and notification fan-out
//! - `settings`: Data-driven tuning loaded from JSON

pub mod driver;
pub mod input;
pub mod settings;
pub mod sim;

pub use driver::{EventLog, Notifications, SimulationLoop};
pub use settings::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Logical tick rate (ticks per second)
    pub const TICK_HZ: u32 = 50;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the loop will try to catch up on (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Keyboard/gamepad paddle speed (units per tick)
    pub const HUMAN_PADDLE_SPEED: f32 = 8.0;
    /// Analog stick/trigger dead zone
    pub const STICK_DEAD_ZONE: f32 = 0.3;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Speed every serve starts from (units per tick)
    pub const BALL_BASE_SPEED: f32 = 7.0;
    /// Velocity of the very first ball of a session
    pub const BALL_INITIAL_VELOCITY: (f32, f32) = (5.0, 5.0);
    /// Added to the ball speed on every paddle contact
    pub const BALL_SPEED_INCREMENT: f32 = 0.1;
    /// Deflection at the paddle edge (45 degrees)
    pub const MAX_DEFLECTION: f32 = std::f32::consts::FRAC_PI_4;

    /// Computer paddle
    pub const AI_SPEED: f32 = 5.5;
    pub const AI_DEADBAND: f32 = 10.0;

    /// Match rules
    pub const WIN_SCORE: u32 = 11;
    /// Pause before the first ball of a restarted match
    pub const SERVE_DELAY_MS: u32 = 1200;
}
