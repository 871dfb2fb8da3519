//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Elapsed time comes in from the caller, never read from a clock
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{basket_catches, take_caught};
pub use entity::{Basket, Faller, FallerKind};
pub use spawner::Spawner;
pub use state::{GameEvent, GamePhase, GameSession};
pub use tick::{check_game_over, tick};
