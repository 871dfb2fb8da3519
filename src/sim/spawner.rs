//! Falling object generator
//!
//! Spawning runs off the frame tick: elapsed time accumulates and one object
//! is emitted per full interval. There is no separate timer to cancel.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Faller, FallerKind};
use crate::tuning::Layout;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    /// Time between spawns (ms)
    pub interval_ms: f32,
    /// Chance in [0, 1] that a spawn is a bomb
    pub bomb_probability: f32,
    accumulator_ms: f32,
    active: bool,
}

impl Spawner {
    pub fn new(interval_ms: f32, bomb_probability: f32) -> Self {
        Self {
            interval_ms: interval_ms.max(1.0),
            bomb_probability: bomb_probability.clamp(0.0, 1.0),
            accumulator_ms: 0.0,
            active: false,
        }
    }

    pub fn start(&mut self) {
        self.accumulator_ms = 0.0;
        self.active = true;
    }

    /// Cancel spawning and drop any partially elapsed interval
    pub fn stop(&mut self) {
        self.accumulator_ms = 0.0;
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Accumulate `dt_ms` and return how many spawns are now due
    pub fn advance(&mut self, dt_ms: f32) -> u32 {
        if !self.active {
            return 0;
        }
        self.accumulator_ms += dt_ms.max(0.0);

        let mut due = 0;
        while self.accumulator_ms >= self.interval_ms {
            self.accumulator_ms -= self.interval_ms;
            due += 1;
        }
        due
    }

    /// Pick coin or bomb from a uniform roll
    pub fn roll_kind<R: Rng>(&self, rng: &mut R) -> FallerKind {
        if rng.random::<f32>() < self.bomb_probability {
            FallerKind::Bomb
        } else {
            FallerKind::Coin
        }
    }

    /// Build a new object at the top of the screen, fully inside the playable width
    pub fn spawn<R: Rng>(&self, rng: &mut R, layout: &Layout, id: u32) -> Faller {
        let kind = self.roll_kind(rng);
        let radius = layout.radius_for(kind);

        let min_x = radius;
        let max_x = layout.viewport.width - radius;
        let x = if max_x > min_x {
            rng.random_range(min_x..=max_x)
        } else {
            layout.viewport.width / 2.0
        };

        Faller::new(id, kind, x, 0.0, radius, layout.fall_speed)
    }
}
