//! Frame-time accumulator driving fixed simulation steps
//!
//! The host feeds in raw animation-frame timestamps; the clock answers with
//! how many whole ticks to run, so sim cadence never depends on the display.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Converts host frame timestamps into a bounded number of fixed steps
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a host timestamp in milliseconds; returns the number of whole
    /// simulation steps to run now.
    ///
    /// The first call yields exactly one step. Frame gaps are clamped to
    /// 100 ms so a backgrounded tab cannot demand a huge catch-up burst,
    /// and steps per call are capped at MAX_SUBSTEPS.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let dt = match self.last_ms {
            Some(last) => (((now_ms - last) / 1000.0) as f32).max(0.0).min(0.1),
            None => SIM_DT,
        };
        self.last_ms = Some(now_ms);
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        steps
    }
}
