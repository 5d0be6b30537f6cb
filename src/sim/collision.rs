//! Wall and paddle collision for the rectangular field
//!
//! Every response snaps the ball flush to the contact surface before flipping
//! velocity, so the same contact cannot trigger twice across ticks.

use crate::consts::BALL_SPEED;

use super::state::{Ball, Field, Paddle, Side};

/// Bounce off the top/bottom rails. Returns true if a wall was hit.
///
/// After resolution the ball's y is always within [0, field.height - size].
pub fn collide_walls(ball: &mut Ball, field: &Field) -> bool {
    if ball.pos.y <= 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
        true
    } else if ball.bottom() >= field.height {
        ball.pos.y = field.height - ball.size;
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Check one paddle and reflect the ball off its face. Returns true on hit.
///
/// The overlap test is one-sided on x (no far bound behind the paddle) and
/// ignores the ball's travel direction; overlap alone fires the response.
/// On hit: snap the ball to the paddle face, flip vel.x, then set vel.y from
/// the contact offset.
pub fn collide_paddle(ball: &mut Ball, paddle: &Paddle, side: Side) -> bool {
    if !(ball.bottom() > paddle.y && ball.top() < paddle.bottom()) {
        return false;
    }

    match side {
        Side::Left => {
            if ball.left() > paddle.right() {
                return false;
            }
            ball.pos.x = paddle.right();
        }
        Side::Right => {
            if ball.right() < paddle.x {
                return false;
            }
            ball.pos.x = paddle.x - ball.size;
        }
    }

    ball.vel.x = -ball.vel.x;
    ball.vel.y = BALL_SPEED * deflection(ball, paddle);
    true
}

/// Normalized contact offset: 0 at the paddle center, ±1 with the ball
/// centered on a paddle edge. Deliberately unclamped - contacts past the
/// nominal edges deflect slightly harder.
#[inline]
pub fn deflection(ball: &Ball, paddle: &Paddle) -> f32 {
    (ball.center_y() - paddle.center_y()) / (paddle.height / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            size: BALL_SIZE,
        }
    }

    fn paddle_at(side: Side, y: f32) -> Paddle {
        let mut paddle = Paddle::new(side, &Field::default());
        paddle.y = y;
        paddle
    }

    #[test]
    fn test_top_wall_snaps_and_flips() {
        let field = Field::default();
        let mut ball = ball_at(400.0, -3.0, 6.0, -6.0);

        assert!(collide_walls(&mut ball, &field));
        assert_eq!(ball.pos.y, 0.0);
        assert_eq!(ball.vel.y, 6.0);
        assert_eq!(ball.vel.x, 6.0);
    }

    #[test]
    fn test_bottom_wall_snaps_and_flips() {
        let field = Field::default();
        // Bottom edge at 405, past the 400 rail
        let mut ball = ball_at(400.0, 390.0, 6.0, 3.0);

        assert!(collide_walls(&mut ball, &field));
        assert_eq!(ball.pos.y, field.height - BALL_SIZE);
        assert_eq!(ball.vel.y, -3.0);
    }

    #[test]
    fn test_wall_miss_leaves_ball_alone() {
        let field = Field::default();
        let mut ball = ball_at(400.0, 200.0, 6.0, 3.0);

        assert!(!collide_walls(&mut ball, &field));
        assert_eq!(ball.pos.y, 200.0);
        assert_eq!(ball.vel.y, 3.0);
    }

    #[test]
    fn test_right_paddle_hit_snaps_flips_and_spins() {
        // Worked example: right paddle at x=770, y=160; ball one step past
        // the face with flat velocity
        let mut ball = ball_at(791.0, 190.0, 6.0, 0.0);
        let paddle = paddle_at(Side::Right, 160.0);

        assert!(collide_paddle(&mut ball, &paddle, Side::Right));
        assert_eq!(ball.pos.x, 755.0);
        assert_eq!(ball.vel.x, -6.0);
        assert!((ball.vel.y + 0.375).abs() < 1e-3);
    }

    #[test]
    fn test_left_paddle_hit_snaps_and_flips() {
        // Left paddle face is at x = 18 + 12 = 30
        let mut ball = ball_at(25.0, 180.0, -6.0, 2.0);
        let paddle = paddle_at(Side::Left, 160.0);

        assert!(collide_paddle(&mut ball, &paddle, Side::Left));
        assert_eq!(ball.pos.x, paddle.right());
        assert_eq!(ball.vel.x, 6.0);
        // Ball center 187.5 against paddle center 200
        assert!((ball.vel.y + 1.875).abs() < 1e-3);
    }

    #[test]
    fn test_center_contact_goes_flat() {
        // Ball center exactly on the paddle center kills vertical speed
        let mut ball = ball_at(791.0, 192.5, 6.0, 4.0);
        let paddle = paddle_at(Side::Right, 160.0);

        assert!(collide_paddle(&mut ball, &paddle, Side::Right));
        assert_eq!(ball.vel.y, 0.0);
    }

    #[test]
    fn test_edge_contacts_deflect_at_full_speed() {
        let paddle = paddle_at(Side::Right, 160.0);

        // Ball center on the paddle top edge
        let mut ball = ball_at(791.0, 160.0 - BALL_SIZE / 2.0, 6.0, 0.0);
        assert!(collide_paddle(&mut ball, &paddle, Side::Right));
        assert!((ball.vel.y + BALL_SPEED).abs() < 1e-3);

        // Ball center on the paddle bottom edge
        let mut ball = ball_at(791.0, 240.0 - BALL_SIZE / 2.0, 6.0, 0.0);
        assert!(collide_paddle(&mut ball, &paddle, Side::Right));
        assert!((ball.vel.y - BALL_SPEED).abs() < 1e-3);
    }

    #[test]
    fn test_deflection_is_not_clamped() {
        // Overlap by a sliver: ball center sits above the paddle top edge,
        // so |offset| > 1 and the deflection exceeds BALL_SPEED
        let mut ball = ball_at(791.0, 150.0, 6.0, 0.0);
        let paddle = paddle_at(Side::Right, 160.0);

        assert!(collide_paddle(&mut ball, &paddle, Side::Right));
        assert!(ball.vel.y.abs() > BALL_SPEED);
        assert!((ball.vel.y + 6.375).abs() < 1e-3);
    }

    #[test]
    fn test_no_hit_without_vertical_overlap() {
        let mut ball = ball_at(791.0, 50.0, 6.0, 0.0);
        let paddle = paddle_at(Side::Right, 160.0);

        assert!(!collide_paddle(&mut ball, &paddle, Side::Right));
        assert_eq!(ball.pos.x, 791.0);
        assert_eq!(ball.vel.x, 6.0);
    }

    #[test]
    fn test_hit_fires_regardless_of_travel_direction() {
        // Overlapping but already moving away from the face; overlap alone
        // fires the response and sends the ball back outward
        let mut ball = ball_at(791.0, 190.0, -6.0, 0.0);
        let paddle = paddle_at(Side::Right, 160.0);

        assert!(collide_paddle(&mut ball, &paddle, Side::Right));
        assert_eq!(ball.pos.x, 755.0);
        assert_eq!(ball.vel.x, 6.0);
    }

    #[test]
    fn test_one_sided_test_catches_ball_behind_the_face() {
        // A ball that slipped past the left paddle still reflects while the
        // paddle vertically covers it (the x test has no far bound)
        let mut ball = ball_at(5.0, 180.0, -6.0, 0.0);
        let paddle = paddle_at(Side::Left, 160.0);

        assert!(collide_paddle(&mut ball, &paddle, Side::Left));
        assert_eq!(ball.pos.x, paddle.right());
        assert_eq!(ball.vel.x, 6.0);
    }

    proptest! {
        #[test]
        fn prop_wall_bounce_flips_sign_and_preserves_magnitude(
            y in -30.0f32..=0.0,
            vy in -8.0f32..-0.1,
        ) {
            let field = Field::default();
            let mut ball = ball_at(400.0, y, 6.0, vy);

            prop_assert!(collide_walls(&mut ball, &field));
            prop_assert_eq!(ball.pos.y, 0.0);
            prop_assert_eq!(ball.vel.y, -vy);
        }

        #[test]
        fn prop_paddle_hit_negates_horizontal_speed_exactly_once(
            ball_y in 150.0f32..220.0,
            vx in prop::sample::select(vec![-BALL_SPEED, BALL_SPEED]),
            vy in -7.0f32..7.0,
        ) {
            let mut ball = ball_at(791.0, ball_y, vx, vy);
            let paddle = paddle_at(Side::Right, 160.0);
            prop_assume!(ball.bottom() > paddle.y && ball.top() < paddle.bottom());

            prop_assert!(collide_paddle(&mut ball, &paddle, Side::Right));
            prop_assert_eq!(ball.vel.x, -vx);
            // Snapped outside the face, so a second check cannot fire after
            // the next integration step
            prop_assert_eq!(ball.pos.x, paddle.x - ball.size);
        }
    }
}
