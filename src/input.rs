//! Human paddle input
//!
//! Each device class reduces to the same capability: a signed vertical
//! displacement for this tick, or nothing. Raw device polling stays with the
//! platform layer; it only feeds the latest device state in here.

use crate::settings::Tuning;
use crate::sim::{Paddle, Playfield};

/// Something that can steer the human paddle
pub trait InputSource {
    /// Displacement for the coming tick (positive = down), or `None` if the
    /// device has nothing to say.
    fn displacement(&mut self, paddle: &Paddle, field: &Playfield) -> Option<f32>;
}

/// Absolute pointer (mouse or touch) position
#[derive(Debug, Clone, Default)]
pub struct PointerInput {
    pending_y: Option<f32>,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer moved to `y` in field coordinates
    pub fn move_to(&mut self, y: f32) {
        self.pending_y = Some(y);
    }
}

impl InputSource for PointerInput {
    fn displacement(&mut self, paddle: &Paddle, _field: &Playfield) -> Option<f32> {
        // Center the paddle on the pointer; consumed once per move
        let y = self.pending_y.take()?;
        Some(y - paddle.height / 2.0 - paddle.y)
    }
}

/// Hold-to-move keyboard control
#[derive(Debug, Clone)]
pub struct KeyboardInput {
    up: bool,
    down: bool,
    speed: f32,
}

impl KeyboardInput {
    pub fn new(speed: f32) -> Self {
        Self {
            up: false,
            down: false,
            speed,
        }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(tuning.human_paddle_speed)
    }

    /// Handle a key press. Returns true if the key steers the paddle.
    pub fn key_down(&mut self, key: &str) -> bool {
        match key {
            "ArrowUp" | "w" | "W" => self.up = true,
            "ArrowDown" | "s" | "S" => self.down = true,
            _ => return false,
        }
        true
    }

    /// Handle a key release. Returns true if the key steers the paddle.
    pub fn key_up(&mut self, key: &str) -> bool {
        match key {
            "ArrowUp" | "w" | "W" => self.up = false,
            "ArrowDown" | "s" | "S" => self.down = false,
            _ => return false,
        }
        true
    }
}

impl InputSource for KeyboardInput {
    fn displacement(&mut self, _paddle: &Paddle, _field: &Playfield) -> Option<f32> {
        match (self.up, self.down) {
            (true, false) => Some(-self.speed),
            (false, true) => Some(self.speed),
            _ => None,
        }
    }
}

/// Standard-mapping gamepad snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamepadState {
    pub axes: Vec<f32>,
    pub buttons: Vec<bool>,
}

impl GamepadState {
    fn axis(&self, index: usize) -> f32 {
        self.axes.get(index).copied().unwrap_or(0.0)
    }

    fn pressed(&self, index: usize) -> bool {
        self.buttons.get(index).copied().unwrap_or(false)
    }
}

/// Gamepad control: left stick, then d-pad, then analog triggers
#[derive(Debug, Clone)]
pub struct GamepadInput {
    state: Option<GamepadState>,
    speed: f32,
    dead_zone: f32,
}

impl GamepadInput {
    const STICK_Y: usize = 1;
    const TRIGGER_UP: usize = 2;
    const TRIGGER_DOWN: usize = 3;
    const DPAD_UP: usize = 12;
    const DPAD_DOWN: usize = 13;
    /// Smaller button sets do not carry analog triggers
    const MIN_TRIGGER_BUTTONS: usize = 6;

    pub fn new(speed: f32, dead_zone: f32) -> Self {
        Self {
            state: None,
            speed,
            dead_zone,
        }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(tuning.human_paddle_speed, tuning.stick_dead_zone)
    }

    pub fn connect(&mut self, state: GamepadState) {
        if self.state.is_none() {
            log::info!(
                "Gamepad connected ({} axes, {} buttons)",
                state.axes.len(),
                state.buttons.len()
            );
        }
        self.state = Some(state);
    }

    pub fn disconnect(&mut self) {
        if self.state.take().is_some() {
            log::info!("Gamepad disconnected");
        }
    }

    pub fn is_connected(&self) -> bool {
        self.state.is_some()
    }

    /// Any button down; front ends use this as the start/restart gesture
    pub fn any_button_pressed(&self) -> bool {
        self.state
            .as_ref()
            .is_some_and(|pad| pad.buttons.iter().any(|b| *b))
    }
}

impl InputSource for GamepadInput {
    fn displacement(&mut self, _paddle: &Paddle, _field: &Playfield) -> Option<f32> {
        let pad = self.state.as_ref()?;

        let stick = pad.axis(Self::STICK_Y);
        if pad.axes.len() > Self::STICK_Y && stick.abs() > self.dead_zone {
            return Some(stick * self.speed);
        }

        if pad.buttons.len() > Self::DPAD_DOWN {
            if pad.pressed(Self::DPAD_UP) {
                return Some(-self.speed);
            }
            if pad.pressed(Self::DPAD_DOWN) {
                return Some(self.speed);
            }
            return None;
        }

        // Pads without a d-pad may expose triggers as axes
        if pad.buttons.len() > Self::MIN_TRIGGER_BUTTONS && pad.axes.len() > Self::TRIGGER_DOWN {
            if pad.axis(Self::TRIGGER_UP) > self.dead_zone {
                return Some(-self.speed);
            }
            if pad.axis(Self::TRIGGER_DOWN) > self.dead_zone {
                return Some(self.speed);
            }
        }
        None
    }
}

/// Several devices, asked in priority order; the first answer wins
#[derive(Default)]
pub struct InputMixer {
    sources: Vec<Box<dyn InputSource>>,
}

impl InputMixer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: impl InputSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn push(&mut self, source: Box<dyn InputSource>) {
        self.sources.push(source);
    }
}

impl InputSource for InputMixer {
    fn displacement(&mut self, paddle: &Paddle, field: &Playfield) -> Option<f32> {
        self.sources
            .iter_mut()
            .find_map(|source| source.displacement(paddle, field))
    }
}

/// Source that never moves the paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn displacement(&mut self, _paddle: &Paddle, _field: &Playfield) -> Option<f32> {
        None
    }
}
