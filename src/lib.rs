//! Coin Catcher - catch the coins, dodge the bombs
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, session state)
//! - `frame`: Frame pacing on top of the host's animation callback
//! - `game`: Host-facing facade tying session, pacing, input and rendering together
//! - `renderer`: Draw surface abstraction and screen painting
//! - `platform`: Browser canvas bindings
//! - `tuning`: Data-driven game balance

pub mod frame;
pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use frame::{FrameOutcome, FrameScheduler};
pub use game::Game;
pub use input::InputEvent;
pub use renderer::{DrawSurface, TextAlign};
pub use settings::{Difficulty, Settings};
pub use tuning::{Layout, Tuning, Viewport};

/// Game configuration constants
pub mod consts {
    /// Logical frame rate the loop is capped at
    pub const FRAME_RATE: f64 = 60.0;
    /// Minimum time between processed frames (ms)
    pub const FRAME_DURATION_MS: f64 = 1000.0 / FRAME_RATE;

    /// Lives at the start of every session
    pub const STARTING_LIVES: u32 = 3;
    /// One falling object per second
    pub const SPAWN_INTERVAL_MS: f32 = 1000.0;
    /// 1 in 5 falling objects is a bomb
    pub const BOMB_PROBABILITY: f32 = 0.2;

    /// Fall speed as a fraction of viewport height per ms (1 px/ms at 800 px)
    pub const FALL_RATE: f32 = 1.0 / 800.0;

    /// Viewports narrower than this get a proportionally larger basket
    pub const NARROW_BREAKPOINT: f32 = 1200.0;
    /// Basket width as a fraction of viewport width
    pub const BASKET_WIDTH_RATIO: f32 = 0.1;
    pub const NARROW_BASKET_WIDTH_RATIO: f32 = 0.25;
    /// Basket height relative to its width
    pub const BASKET_ASPECT: f32 = 0.5;
    /// Coin/bomb radius relative to basket height
    pub const RADIUS_RATIO: f32 = 0.4;

    /// HUD text size as a fraction of viewport height (30px at 800)
    pub const FONT_RATIO: f32 = 0.0375;
    /// Tilt gamma is reported in [-90, 90] degrees
    pub const MAX_TILT_DEGREES: f32 = 90.0;
}
