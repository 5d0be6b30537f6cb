//! Fixed timestep simulation tick
//!
//! One call advances the whole game by exactly one step: player paddle,
//! ball motion, collisions, rally reset, opponent paddle - in that order.

use super::ai;
use super::collision::{collide_paddle, collide_walls};
use super::state::{Ball, Field, GameState, Side};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Latest pointer position for the player paddle, in field space.
    /// None leaves the paddle where it is.
    pub left_target_y: Option<f32>,
}

/// True once the ball's reference corner has crossed either goal line
///
/// Both sides compare the top-left corner, matching the classic rules: the
/// left exit fires while part of the ball is still visible.
#[inline]
pub fn ball_out_of_play(ball: &Ball, field: &Field) -> bool {
    ball.pos.x < 0.0 || ball.pos.x > field.width
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    // Player paddle follows the most recent pointer target
    if let Some(target_y) = input.left_target_y {
        state.left.center_on(target_y, &state.field);
    }

    // Integrate: velocities are whole per-tick deltas
    state.ball.pos += state.ball.vel;

    collide_walls(&mut state.ball, &state.field);
    collide_paddle(&mut state.ball, &state.left, Side::Left);
    collide_paddle(&mut state.ball, &state.right, Side::Right);

    // Rally over: silent reset, no score is kept
    if ball_out_of_play(&state.ball, &state.field) {
        log::info!("rally ended at tick {}, serving again", state.time_ticks);
        state.reset_ball();
    }

    ai::track_ball(&mut state.right, &state.ball, &state.field);
}
