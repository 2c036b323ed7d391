//! Computer paddle
//!
//! A proportional tracker with a deadband: it chases the ball's current
//! height at a fixed speed and never predicts where the ball is going.

use super::ball::Ball;
use super::field::Playfield;
use super::state::Paddle;
use crate::settings::Tuning;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiController {
    /// Movement per tick
    pub speed: f32,
    /// Half-width of the window around the ball where the paddle holds still
    pub deadband: f32,
}

impl AiController {
    pub fn new(speed: f32, deadband: f32) -> Self {
        Self { speed, deadband }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(tuning.ai_speed, tuning.ai_deadband)
    }

    /// Signed displacement toward the ball (positive = down)
    pub fn displacement(&self, paddle: &Paddle, ball: &Ball) -> f32 {
        let center = paddle.center_y();
        if center < ball.pos.y - self.deadband {
            self.speed
        } else if center > ball.pos.y + self.deadband {
            -self.speed
        } else {
            0.0
        }
    }

    /// Move the paddle one tick toward the ball
    pub fn update(&self, paddle: &mut Paddle, ball: &Ball, field: &Playfield) {
        let dy = self.displacement(paddle, ball);
        paddle.move_by(dy, field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Side;
    use glam::Vec2;

    fn setup(paddle_center: f32, ball_y: f32) -> (Paddle, Ball, Playfield) {
        let field = Playfield::new(800.0, 400.0);
        let mut paddle = Paddle::new(Side::Right, &field, 10.0, 100.0);
        paddle.y = paddle_center - 50.0;
        let ball = Ball::new(Vec2::new(600.0, ball_y), Vec2::ZERO, 10.0, 7.0);
        (paddle, ball, field)
    }

    #[test]
    fn test_moves_up_toward_ball_above() {
        let ai = AiController::new(5.5, 10.0);
        let (mut paddle, ball, field) = setup(150.0, 100.0);
        // 150 > 100 + 10
        assert_eq!(ai.displacement(&paddle, &ball), -5.5);
        ai.update(&mut paddle, &ball, &field);
        assert_eq!(paddle.y, 94.5);
    }

    #[test]
    fn test_moves_down_toward_ball_below() {
        let ai = AiController::new(5.5, 10.0);
        let (mut paddle, ball, field) = setup(150.0, 200.0);
        ai.update(&mut paddle, &ball, &field);
        assert_eq!(paddle.y, 105.5);
    }

    #[test]
    fn test_holds_inside_deadband() {
        let ai = AiController::new(5.5, 10.0);
        for ball_y in [140.0, 145.0, 150.0, 155.0, 160.0] {
            let (paddle, ball, _) = setup(150.0, ball_y);
            assert_eq!(ai.displacement(&paddle, &ball), 0.0, "ball_y = {ball_y}");
        }
    }

    #[test]
    fn test_clamped_at_bottom() {
        let ai = AiController::new(5.5, 10.0);
        let (mut paddle, ball, field) = setup(348.0, 395.0);
        ai.update(&mut paddle, &ball, &field);
        assert_eq!(paddle.y, 300.0);
    }

    #[test]
    fn test_clamped_at_top() {
        let ai = AiController::new(5.5, 10.0);
        let (mut paddle, ball, field) = setup(52.0, 5.0);
        ai.update(&mut paddle, &ball, &field);
        assert_eq!(paddle.y, 0.0);
    }
}
