//! Game state and core simulation types
//!
//! Positions are top-left reference corners in field space, y grows downward.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Fixed playable bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

/// A paddle entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge (fixed after construction)
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Place a paddle on its side of the field, vertically centered
    pub fn new(side: Side, field: &Field) -> Self {
        let x = match side {
            Side::Left => PADDLE_MARGIN,
            Side::Right => field.width - PADDLE_MARGIN - PADDLE_WIDTH,
        };
        Self {
            x,
            y: field.height / 2.0 - PADDLE_HEIGHT / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Center the paddle on a target Y (pointer position in field space)
    pub fn center_on(&mut self, target_y: f32, field: &Field) {
        self.y = target_y - self.height / 2.0;
        self.clamp_to(field);
    }

    /// Keep the paddle fully inside the field
    pub fn clamp_to(&mut self, field: &Field) {
        self.y = self.y.clamp(0.0, field.height - self.height);
    }
}

/// The ball entity - an axis-aligned square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Per-tick velocity
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    /// Serve a fresh ball from the exact field center
    pub fn serve(field: &Field, rng: &mut impl Rng) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: BALL_SIZE,
        };
        ball.reset(field, rng);
        ball
    }

    /// Recenter the ball and redraw the serve velocity
    ///
    /// Horizontal speed is always full BALL_SPEED toward a random side;
    /// vertical speed is uniform in [-BALL_SPEED, BALL_SPEED].
    pub fn reset(&mut self, field: &Field, rng: &mut impl Rng) {
        self.pos = Vec2::new(
            field.width / 2.0 - self.size / 2.0,
            field.height / 2.0 - self.size / 2.0,
        );
        let sign = if rng.random::<bool>() { 1.0 } else { -1.0 };
        self.vel = Vec2::new(
            BALL_SPEED * sign,
            BALL_SPEED * rng.random_range(-1.0..=1.0),
        );
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }
}

/// Read-only view handed to the renderer each frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub field: &'a Field,
    pub left: &'a Paddle,
    pub right: &'a Paddle,
    pub ball: &'a Ball,
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Serve seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub field: Field,
    /// Player paddle (pointer-driven)
    pub left: Paddle,
    /// Opponent paddle (AI-driven)
    pub right: Paddle,
    pub ball: Ball,
    /// Serve randomness, advanced once per reset
    rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let field = Field::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::serve(&field, &mut rng);
        Self {
            seed,
            time_ticks: 0,
            left: Paddle::new(Side::Left, &field),
            right: Paddle::new(Side::Right, &field),
            ball,
            field,
            rng,
        }
    }

    /// Put the ball back in play after it leaves the field
    pub fn reset_ball(&mut self) {
        self.ball.reset(&self.field, &mut self.rng);
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            field: &self.field,
            left: &self.left,
            right: &self.right,
            ball: &self.ball,
        }
    }
}
