//! Match state and core simulation types
//!
//! `MatchState` is the single owner of the ball and both paddles. Everything
//! else borrows pieces of it for the duration of one call.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::field::{Playfield, Rect};
use crate::settings::Tuning;

/// Which half of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Human-controlled paddle
    Left,
    /// Computer-controlled paddle
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal direction a ball travels after bouncing off this side
    pub fn rebound_direction(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// One paddle (position, size, score)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Left edge, fixed per side
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub score: u32,
}

impl Paddle {
    /// Paddle flush against its goal line, vertically centered
    pub fn new(side: Side, field: &Playfield, width: f32, height: f32) -> Self {
        let x = match side {
            Side::Left => 0.0,
            Side::Right => field.width - width,
        };
        Self {
            side,
            x,
            y: (field.height - height) / 2.0,
            width,
            height,
            score: 0,
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Lowest legal `y`
    #[inline]
    pub fn max_y(&self, field: &Playfield) -> f32 {
        (field.height - self.height).max(0.0)
    }

    /// Set the top edge, clamped to the field
    pub fn set_y(&mut self, y: f32, field: &Playfield) {
        self.y = y.min(self.max_y(field)).max(0.0);
    }

    /// Move by a signed vertical displacement, clamped to the field
    pub fn move_by(&mut self, dy: f32, field: &Playfield) {
        self.set_y(self.y + dy, field);
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Waiting for the start signal
    Idle,
    /// Active gameplay
    Playing,
    /// A paddle reached the win score; frozen until restart
    GameOver,
}

/// Things that happened during a tick, for audio/visual collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Restarted,
    WallBounce,
    PaddleHit(Side),
    Scored(Side),
    Served,
    GameOver { winner: Side },
}

/// Read-only view handed to the renderer once per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub phase: MatchPhase,
    pub winner: Option<Side>,
    /// True while the ball is held for the post-restart serve
    pub serve_pending: bool,
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub phase: MatchPhase,
    pub field: Playfield,
    /// Human paddle
    pub left: Paddle,
    /// Computer paddle
    pub right: Paddle,
    pub ball: Ball,
    pub win_score: u32,
    pub winner: Option<Side>,
    /// Ticks until the deferred serve fires (None = nothing scheduled)
    pub serve_in_ticks: Option<u32>,
    /// Ticks simulated while playing
    pub time_ticks: u64,
    /// Events produced by the most recent tick or lifecycle signal
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl MatchState {
    /// Fresh match in the `Idle` phase
    pub fn new(tuning: &Tuning) -> Self {
        let field = Playfield::from_tuning(tuning);
        Self {
            phase: MatchPhase::Idle,
            field,
            left: Paddle::new(Side::Left, &field, tuning.paddle_width, tuning.paddle_height),
            right: Paddle::new(
                Side::Right,
                &field,
                tuning.paddle_width,
                tuning.paddle_height,
            ),
            ball: Ball::at_center(&field, tuning),
            win_score: tuning.win_score,
            winner: None,
            serve_in_ticks: None,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == MatchPhase::GameOver
    }

    pub fn serve_pending(&self) -> bool {
        self.serve_in_ticks.is_some()
    }

    /// `Idle -> Playing`. Returns false (and changes nothing) in any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != MatchPhase::Idle {
            log::warn!("Ignoring start signal in {:?}", self.phase);
            return false;
        }
        self.phase = MatchPhase::Playing;
        self.serve_in_ticks = None;
        self.events.push(GameEvent::Started);
        log::info!("Match started");
        true
    }

    /// Reset scores and schedule a deferred serve.
    ///
    /// Accepted while playing or after game over. A serve that is still
    /// pending from an earlier restart is replaced, never doubled.
    pub fn restart(&mut self, tuning: &Tuning) -> bool {
        if self.phase == MatchPhase::Idle {
            log::warn!("Ignoring restart signal before the match started");
            return false;
        }
        if self.serve_in_ticks.is_some() {
            log::debug!("Restart replaces a pending serve");
        }

        self.left.score = 0;
        self.right.score = 0;
        self.winner = None;
        self.phase = MatchPhase::Playing;
        self.events.push(GameEvent::Restarted);

        let delay = tuning.serve_delay_ticks();
        if delay == 0 {
            self.serve_in_ticks = None;
            self.serve(tuning);
        } else {
            self.serve_in_ticks = Some(delay);
        }
        log::info!("Match restarted, serving in {} ticks", delay);
        true
    }

    /// Re-center the ball and send it back the other way
    pub fn serve(&mut self, tuning: &Tuning) {
        let previous_vel_x = self.ball.vel.x;
        self.ball.serve(&self.field, previous_vel_x, tuning.ball_base_speed);
        self.events.push(GameEvent::Served);
        log::debug!("Served, vel = {:?}", self.ball.vel);
    }

    /// Credit a point; ends the match or re-serves
    pub fn award_point(&mut self, scorer: Side, tuning: &Tuning) {
        let paddle = self.paddle_mut(scorer);
        paddle.score += 1;
        let score = paddle.score;
        self.events.push(GameEvent::Scored(scorer));
        log::debug!(
            "{:?} scores ({} - {})",
            scorer,
            self.left.score,
            self.right.score
        );

        if score >= self.win_score {
            self.end_match(scorer);
        } else {
            self.serve(tuning);
        }
    }

    /// Debug helper: hand the match to `side` immediately
    pub fn force_win(&mut self, side: Side) {
        self.paddle_mut(side).score = self.win_score;
        self.end_match(side);
    }

    fn end_match(&mut self, winner: Side) {
        self.phase = MatchPhase::GameOver;
        self.winner = Some(winner);
        self.serve_in_ticks = None;
        self.events.push(GameEvent::GameOver { winner });
        log::info!(
            "Game over, {:?} wins {} - {}",
            winner,
            self.left.score,
            self.right.score
        );
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            ball: self.ball,
            left: self.left,
            right: self.right,
            phase: self.phase,
            winner: self.winner,
            serve_pending: self.serve_pending(),
        }
    }
}
