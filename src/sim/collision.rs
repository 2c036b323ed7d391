//! Ball vs. paddle collision and angle-based reflection
//!
//! Only the paddle on the ball's half of the field is ever tested, so the ball
//! can touch at most one paddle per tick. The bounce angle depends only on
//! where along the paddle the ball struck, not on the incoming velocity.

use super::ball::Ball;
use super::field::Playfield;
use super::state::{Paddle, Side};
use crate::consts::MAX_DEFLECTION;

/// Result of a successful contact check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Paddle that was struck
    pub side: Side,
    /// Ball offset from paddle center in half-heights (about -1..1, not clamped)
    pub normalized_offset: f32,
    /// Outgoing angle from horizontal (radians)
    pub angle: f32,
}

/// Paddle the ball can reach this tick
pub fn candidate_side(ball: &Ball, field: &Playfield) -> Side {
    if ball.pos.x + ball.radius < field.midline() {
        Side::Left
    } else {
        Side::Right
    }
}

/// Check whether the ball overlaps `paddle` and, if so, where it struck.
///
/// Pure: neither the ball nor the paddle is modified.
pub fn check_contact(ball: &Ball, paddle: &Paddle) -> Option<Contact> {
    if !paddle.bounds().overlaps(&ball.bounds()) {
        return None;
    }

    let half_height = paddle.height / 2.0;
    let normalized_offset = (ball.pos.y - paddle.center_y()) / half_height;
    Some(Contact {
        side: paddle.side,
        normalized_offset,
        angle: MAX_DEFLECTION * normalized_offset,
    })
}

/// Apply a contact: place the ball flush on the paddle face, send it away
/// at the contact angle, then speed it up.
pub fn apply_contact(ball: &mut Ball, paddle: &Paddle, contact: &Contact, speed_increment: f32) {
    let direction = contact.side.rebound_direction();

    ball.pos.x = match contact.side {
        Side::Left => paddle.x + paddle.width + ball.radius,
        Side::Right => paddle.x - ball.radius,
    };

    ball.vel.x = direction * ball.speed * contact.angle.cos();
    ball.vel.y = ball.speed * contact.angle.sin();

    ball.speed += speed_increment;
}

/// Test the ball against whichever paddle is on its side and reflect it
pub fn resolve_paddle_collision(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    field: &Playfield,
    speed_increment: f32,
) -> Option<Contact> {
    let paddle = match candidate_side(ball, field) {
        Side::Left => left,
        Side::Right => right,
    };

    let contact = check_contact(ball, paddle)?;
    apply_contact(ball, paddle, &contact, speed_increment);
    log::trace!(
        "{:?} paddle hit at offset {:.3}, speed now {:.2}",
        contact.side,
        contact.normalized_offset,
        ball.speed
    );
    Some(contact)
}
