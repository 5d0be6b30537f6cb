//! Retro Pong - A classic two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, serving, AI paddle)
//! - `renderer`: WebGPU rendering pipeline

pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Paddle defaults - both paddles share the same geometry
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Gap between the field edge and the paddle face
    pub const PADDLE_MARGIN: f32 = 18.0;
    /// Opponent paddle travel per tick
    pub const PADDLE_SPEED: f32 = 4.0;

    /// Ball defaults - velocities are per-tick deltas, not per-second
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_SPEED: f32 = 6.0;

    /// Opponent tracking dead zone around the ball center
    pub const AI_DEADZONE: f32 = 10.0;
}
