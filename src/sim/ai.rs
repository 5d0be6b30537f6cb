//! Opponent paddle policy
//!
//! Plain dead-zone tracking: chase the current ball center at a fixed speed,
//! hold still once close enough. Non-anticipatory - it reads where the ball
//! is this tick, never where it is heading.

use crate::consts::{AI_DEADZONE, PADDLE_SPEED};

use super::state::{Ball, Field, Paddle};

/// Step the opponent paddle toward the ball center
pub fn track_ball(paddle: &mut Paddle, ball: &Ball, field: &Field) {
    let paddle_center = paddle.center_y();
    let ball_center = ball.center_y();

    if paddle_center < ball_center - AI_DEADZONE {
        paddle.y += PADDLE_SPEED;
    } else if paddle_center > ball_center + AI_DEADZONE {
        paddle.y -= PADDLE_SPEED;
    }
    // Clamp runs every tick, move or not
    paddle.clamp_to(field);
}
