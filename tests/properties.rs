use glam::Vec2;
use paddle_volley::sim::{AiController, Ball, Paddle, Playfield, Side, resolve_paddle_collision};
use proptest::prelude::*;

fn field() -> Playfield {
    Playfield::new(800.0, 400.0)
}

proptest! {
    #[test]
    fn paddle_always_within_field(start in 0.0f32..=300.0, moves in prop::collection::vec(-2000.0f32..2000.0, 1..50)) {
        let field = field();
        let mut paddle = Paddle::new(Side::Left, &field, 10.0, 100.0);
        paddle.y = start;
        for dy in moves {
            paddle.move_by(dy, &field);
            prop_assert!(paddle.y >= 0.0 && paddle.y <= 300.0);
        }
    }

    #[test]
    fn ai_moves_toward_ball_and_stays_clamped(paddle_y in 0.0f32..=300.0, ball_y in 0.0f32..=400.0, speed in 2.8f32..=5.5) {
        let field = field();
        let ai = AiController::new(speed, 10.0);
        let mut paddle = Paddle::new(Side::Right, &field, 10.0, 100.0);
        paddle.y = paddle_y;
        let ball = Ball::new(Vec2::new(600.0, ball_y), Vec2::ZERO, 10.0, 7.0);

        let center = paddle.center_y();
        ai.update(&mut paddle, &ball, &field);

        prop_assert!(paddle.y >= 0.0 && paddle.y <= 300.0);
        if center < ball_y - 10.0 {
            prop_assert!(paddle.y >= paddle_y);
        } else if center > ball_y + 10.0 {
            prop_assert!(paddle.y <= paddle_y);
        } else {
            prop_assert_eq!(paddle.y, paddle_y);
        }
    }

    #[test]
    fn speed_grows_by_fixed_step_per_contact(offsets in prop::collection::vec(-1.0f32..=1.0, 0..40)) {
        let field = field();
        let left = Paddle::new(Side::Left, &field, 10.0, 100.0);
        let right = Paddle::new(Side::Right, &field, 10.0, 100.0);
        let mut ball = Ball::new(Vec2::new(15.0, 200.0), Vec2::new(-7.0, 0.0), 10.0, 7.0);

        for (n, offset) in offsets.iter().enumerate() {
            ball.pos = Vec2::new(15.0, left.center_y() + offset * 50.0);
            let speed = ball.speed;
            let contact = resolve_paddle_collision(&mut ball, &left, &right, &field, 0.1);
            prop_assert!(contact.is_some());

            // Outgoing velocity has the pre-contact speed as its magnitude
            prop_assert!((ball.vel.length() - speed).abs() < 1e-3);
            prop_assert!(ball.vel.x > 0.0);
            prop_assert!((ball.speed - (7.0 + 0.1 * (n + 1) as f32)).abs() < 1e-3);
        }
    }

    #[test]
    fn serve_resets_regardless_of_state(x in -50.0f32..850.0, y in 0.0f32..400.0, vx in -20.0f32..20.0, vy in -20.0f32..20.0, speed in 7.0f32..30.0) {
        let field = field();
        let mut ball = Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), 10.0, speed);
        ball.serve(&field, vx, 7.0);
        prop_assert_eq!(ball.pos, Vec2::new(400.0, 200.0));
        prop_assert_eq!(ball.speed, 7.0);
        prop_assert_eq!(ball.vel.x, -vx);
        prop_assert_eq!(ball.vel.y, vy);
    }
}
