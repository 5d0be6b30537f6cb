//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ai;
pub mod clock;
pub mod collision;
pub mod state;
pub mod tick;

pub use ai::track_ball;
pub use clock::FrameClock;
pub use collision::{collide_paddle, collide_walls, deflection};
pub use state::{Ball, Field, GameState, Paddle, Side, Snapshot};
pub use tick::{TickInput, ball_out_of_play, tick};
