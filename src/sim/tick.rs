//! Fixed-tick simulation step
//!
//! Order within a tick is part of the contract:
//! 1. lifecycle signals (restart, start)
//! 2. human paddle displacement (in every phase)
//! 3. computer paddle (from here on only while `Playing`)
//! 4. deferred serve countdown (the ball is held while it runs)
//! 5. scoring, checked on the position the previous tick left behind;
//!    a point ends the tick
//! 6. ball integration
//! 7. wall bounce
//! 8. paddle contact

use super::ai::AiController;
use super::collision::resolve_paddle_collision;
use super::state::{GameEvent, MatchPhase, MatchState, Side};
use crate::settings::Tuning;

/// Edge-triggered lifecycle signals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Signals {
    /// Leave `Idle`
    pub start: bool,
    /// Reset the scores and re-serve
    pub restart: bool,
}

/// Input sampled once for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Signed vertical displacement for the human paddle (positive = down)
    pub displacement: Option<f32>,
    pub signals: Signals,
}

impl TickInput {
    pub fn moving(displacement: f32) -> Self {
        Self {
            displacement: Some(displacement),
            ..Default::default()
        }
    }

    pub fn start() -> Self {
        Self {
            signals: Signals {
                start: true,
                restart: false,
            },
            ..Default::default()
        }
    }

    pub fn restart() -> Self {
        Self {
            signals: Signals {
                start: false,
                restart: true,
            },
            ..Default::default()
        }
    }
}

/// Advance the match by one logical tick.
///
/// Outside `Playing` this only processes lifecycle signals and the human
/// paddle; a tick during `GameOver` leaves the ball, the computer paddle and
/// the scores exactly where they are. Events are appended to `state.events`
/// and stay there until drained.
pub fn tick(state: &mut MatchState, input: &TickInput, tuning: &Tuning) {
    if input.signals.restart {
        state.restart(tuning);
    }
    if input.signals.start {
        state.start();
    }

    if let Some(dy) = input.displacement {
        let field = state.field;
        state.left.move_by(dy, &field);
    }

    if state.phase != MatchPhase::Playing {
        return;
    }

    state.time_ticks += 1;

    AiController::from_tuning(tuning).update(&mut state.right, &state.ball, &state.field);

    if let Some(remaining) = state.serve_in_ticks {
        let remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            state.serve_in_ticks = None;
            state.serve(tuning);
        } else {
            state.serve_in_ticks = Some(remaining);
        }
        return;
    }

    if check_scoring(state, tuning) {
        return;
    }

    state.ball.advance();

    if state.ball.resolve_wall_bounce(state.field.height) {
        state.events.push(GameEvent::WallBounce);
    }

    if let Some(contact) = resolve_paddle_collision(
        &mut state.ball,
        &state.left,
        &state.right,
        &state.field,
        tuning.ball_speed_increment,
    ) {
        state.events.push(GameEvent::PaddleHit(contact.side));
    }
}

/// Award a point if the ball has crossed a goal line. Returns true if scored.
pub fn check_scoring(state: &mut MatchState, tuning: &Tuning) -> bool {
    let scorer = if state.ball.out_left() {
        Side::Right
    } else if state.ball.out_right(state.field.width) {
        Side::Left
    } else {
        return false;
    };

    state.award_point(scorer, tuning);
    true
}
