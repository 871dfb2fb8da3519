//! Session state and screen phases
//!
//! Everything a single run mutates lives in `GameSession`, so the host only
//! ever holds one value and tearing a run down is just resetting it.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Basket, Faller, FallerKind};
use super::spawner::Spawner;
use crate::tuning::{Layout, Tuning, Viewport};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the player to start
    Start,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for retry
    GameOver,
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: u32, kind: FallerKind },
    CoinCaught { id: u32, score: u64 },
    BombCaught { id: u32, lives: u32 },
    /// Fell past the bottom edge
    Missed { id: u32, kind: FallerKind },
    GameOver { score: u64 },
}

/// The one active run
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    /// Present only while a run is live
    pub basket: Option<Basket>,
    /// Falling objects, oldest first
    pub fallers: Vec<Faller>,
    pub spawner: Spawner,
    pub layout: Layout,
    pub tuning: Tuning,
    /// Play time of the current run (ms)
    pub time_ms: f64,
    rng: Pcg32,
    next_id: u32,
}

impl GameSession {
    /// Create a session on the start screen
    pub fn new(tuning: Tuning, viewport: Viewport, seed: u64) -> Self {
        let layout = Layout::compute(viewport, &tuning);
        Self {
            seed,
            phase: GamePhase::Start,
            score: 0,
            lives: tuning.starting_lives,
            basket: None,
            fallers: Vec::new(),
            spawner: Spawner::new(tuning.spawn_interval_ms, tuning.bomb_probability),
            layout,
            tuning,
            time_ms: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Begin a fresh run, discarding whatever the previous one left behind
    pub fn start(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.fallers.clear();
        self.time_ms = 0.0;
        self.next_id = 1;

        let x = (self.layout.viewport.width - self.layout.basket_width) / 2.0;
        self.basket = Some(grounded_basket(&self.layout, x));

        self.spawner = Spawner::new(self.tuning.spawn_interval_ms, self.tuning.bomb_probability);
        self.spawner.start();
        self.phase = GamePhase::Playing;

        log::info!(
            "Run started (seed {}, {} lives, bomb chance {:.2})",
            seed,
            self.lives,
            self.spawner.bomb_probability
        );
    }

    /// Finish the run: stop spawning and clear the field
    pub fn end(&mut self) {
        self.spawner.stop();
        self.fallers.clear();
        self.basket = None;
        self.phase = GamePhase::GameOver;
        log::info!("Game over, final score {}", self.score);
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.lives == 0
    }

    /// Spawn one object at the top edge
    pub fn spawn_faller(&mut self) -> GameEvent {
        let id = self.next_entity_id();
        let faller = self.spawner.spawn(&mut self.rng, &self.layout, id);
        let kind = faller.kind;
        self.fallers.push(faller);
        GameEvent::Spawned { id, kind }
    }

    /// Credit a caught object to score or lives
    pub fn apply_catch(&mut self, faller: &Faller) -> GameEvent {
        match faller.kind {
            FallerKind::Coin => {
                self.score += 1;
                GameEvent::CoinCaught {
                    id: faller.id,
                    score: self.score,
                }
            }
            FallerKind::Bomb => {
                self.lives = if self.tuning.bomb_ends_game {
                    0
                } else {
                    self.lives.saturating_sub(1)
                };
                GameEvent::BombCaught {
                    id: faller.id,
                    lives: self.lives,
                }
            }
        }
    }

    /// Swap in new tuning; takes effect for sizes now and for balance on the next run
    pub fn set_tuning(&mut self, tuning: Tuning) {
        self.tuning = tuning;
        self.layout = Layout::compute(self.layout.viewport, &self.tuning);
    }

    /// Recompute sizes for a new viewport, keeping a live run in proportion
    pub fn resize(&mut self, viewport: Viewport) {
        let old = self.layout.viewport;
        self.layout = Layout::compute(viewport, &self.tuning);

        let sx = viewport.width / old.width;
        let sy = viewport.height / old.height;

        if let Some(basket) = self.basket.as_mut() {
            *basket = grounded_basket(&self.layout, basket.pos.x * sx);
        }

        for faller in &mut self.fallers {
            faller.radius = self.layout.radius_for(faller.kind);
            faller.speed = self.layout.fall_speed;
            faller.pos.x = (faller.pos.x * sx).clamp(
                faller.radius,
                (viewport.width - faller.radius).max(faller.radius),
            );
            faller.pos.y *= sy;
        }

        log::debug!(
            "Resized {}x{} -> {}x{}",
            old.width,
            old.height,
            viewport.width,
            viewport.height
        );
    }
}

/// Basket sized for `layout`, resting on its ground line with the left edge at `x`
fn grounded_basket(layout: &Layout, x: f32) -> Basket {
    let mut basket = Basket::new(
        0.0,
        layout.ground_y(),
        layout.basket_width,
        layout.basket_height,
    );
    basket.move_to(x, layout.viewport.width);
    basket
}
