//! Ball kinematics
//!
//! Integration is one velocity step per tick; there is no delta time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::field::{Playfield, Rect};
use crate::settings::Tuning;

/// The volley ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
    /// Scalar speed used by the next paddle reflection
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed,
        }
    }

    /// Ball for a fresh session: centered, moving with the initial velocity
    pub fn at_center(field: &Playfield, tuning: &Tuning) -> Self {
        let (vx, vy) = tuning.ball_initial_velocity;
        Self::new(
            field.center(),
            Vec2::new(vx, vy),
            tuning.ball_radius,
            tuning.ball_base_speed,
        )
    }

    /// Enclosing square used for paddle contact
    pub fn bounds(&self) -> Rect {
        Rect::around(self.pos, self.radius)
    }

    /// Move one tick along the current velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Bounce off the top or bottom wall. Returns true if a bounce happened.
    pub fn resolve_wall_bounce(&mut self, field_height: f32) -> bool {
        if self.pos.y - self.radius < 0.0 {
            self.pos.y = self.radius;
            self.vel.y = -self.vel.y;
            true
        } else if self.pos.y + self.radius > field_height {
            self.pos.y = field_height - self.radius;
            self.vel.y = -self.vel.y;
            true
        } else {
            false
        }
    }

    /// Re-center the ball and send it back toward the side that just conceded.
    ///
    /// Vertical velocity is carried over from the previous rally.
    pub fn serve(&mut self, field: &Playfield, previous_vel_x: f32, base_speed: f32) {
        self.pos = field.center();
        self.vel.x = -previous_vel_x;
        self.speed = base_speed;
    }

    /// Past the left goal line
    #[inline]
    pub fn out_left(&self) -> bool {
        self.pos.x - self.radius < 0.0
    }

    /// Past the right goal line
    #[inline]
    pub fn out_right(&self, field_width: f32) -> bool {
        self.pos.x + self.radius > field_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Playfield {
        Playfield::new(800.0, 400.0)
    }

    #[test]
    fn test_advance() {
        let mut ball = Ball::new(Vec2::new(100.0, 100.0), Vec2::new(5.0, -3.0), 10.0, 7.0);
        ball.advance();
        assert_eq!(ball.pos, Vec2::new(105.0, 97.0));
        assert_eq!(ball.vel, Vec2::new(5.0, -3.0));
    }

    #[test]
    fn test_bounce_top() {
        let mut ball = Ball::new(Vec2::new(100.0, 4.0), Vec2::new(5.0, -5.0), 10.0, 7.0);
        assert!(ball.resolve_wall_bounce(400.0));
        assert_eq!(ball.pos.y, 10.0);
        assert_eq!(ball.vel, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_bounce_bottom() {
        let mut ball = Ball::new(Vec2::new(100.0, 395.0), Vec2::new(5.0, 5.0), 10.0, 7.0);
        assert!(ball.resolve_wall_bounce(400.0));
        assert_eq!(ball.pos.y, 390.0);
        assert_eq!(ball.vel.y, -5.0);
    }

    #[test]
    fn test_no_bounce_when_touching() {
        // Exactly resting on the wall is not a bounce
        let mut ball = Ball::new(Vec2::new(100.0, 10.0), Vec2::new(5.0, -5.0), 10.0, 7.0);
        assert!(!ball.resolve_wall_bounce(400.0));
        assert_eq!(ball.vel.y, -5.0);
    }

    #[test]
    fn test_serve_recenters_and_flips() {
        let mut ball = Ball::new(Vec2::new(-3.0, 57.0), Vec2::new(-6.2, 1.5), 10.0, 8.3);
        ball.serve(&field(), ball.vel.x, 7.0);
        assert_eq!(ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(ball.vel.x, 6.2);
        assert_eq!(ball.vel.y, 1.5, "vertical velocity is carried over");
        assert_eq!(ball.speed, 7.0);
        assert_eq!(ball.radius, 10.0);
    }

    #[test]
    fn test_goal_lines() {
        let ball = Ball::new(Vec2::new(5.0, 200.0), Vec2::ZERO, 10.0, 7.0);
        assert!(ball.out_left());
        assert!(!ball.out_right(800.0));

        let ball = Ball::new(Vec2::new(15.0, 200.0), Vec2::ZERO, 10.0, 7.0);
        assert!(!ball.out_left());

        let ball = Ball::new(Vec2::new(795.0, 200.0), Vec2::ZERO, 10.0, 7.0);
        assert!(ball.out_right(800.0));
    }
}
