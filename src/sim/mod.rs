//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed logical tick only (no delta time)
//! - One owner (`MatchState`) for the ball and both paddles
//! - No rendering, audio or platform dependencies

pub mod ai;
pub mod ball;
pub mod collision;
pub mod field;
pub mod state;
pub mod tick;

pub use ai::AiController;
pub use ball::Ball;
pub use collision::{Contact, apply_contact, candidate_side, check_contact, resolve_paddle_collision};
pub use field::{Playfield, Rect};
pub use state::{GameEvent, MatchPhase, MatchState, Paddle, RenderSnapshot, Side};
pub use tick::{Signals, TickInput, check_scoring, tick};
