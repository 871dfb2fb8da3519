//! Falling objects and the player's basket

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// What a falling object is worth when caught
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallerKind {
    /// +1 score
    Coin,
    /// -1 life
    Bomb,
}

impl FallerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallerKind::Coin => "coin",
            FallerKind::Bomb => "bomb",
        }
    }
}

/// A coin or bomb descending the canvas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faller {
    pub id: u32,
    pub kind: FallerKind,
    /// Centre position, y grows downward
    pub pos: Vec2,
    pub radius: f32,
    /// Descent speed in units per ms
    pub speed: f32,
}

impl Faller {
    pub fn new(id: u32, kind: FallerKind, x: f32, y: f32, radius: f32, speed: f32) -> Self {
        debug_assert!(radius > 0.0 && speed > 0.0);
        Self {
            id,
            kind,
            pos: Vec2::new(x, y),
            radius,
            speed,
        }
    }

    /// Move down by `speed * dt_ms`
    #[inline]
    pub fn advance(&mut self, dt_ms: f32) {
        self.pos.y += self.speed * dt_ms.max(0.0);
    }

    /// Left and right edges of the object
    #[inline]
    pub fn horizontal_extent(&self) -> (f32, f32) {
        (self.pos.x - self.radius, self.pos.x + self.radius)
    }

    #[inline]
    pub fn is_offscreen(&self, viewport_height: f32) -> bool {
        self.pos.y >= viewport_height
    }
}

/// The player's basket, resting on the ground
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Basket {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Basket {
    /// Create a basket with its top-left corner at (`x`, `top`)
    pub fn new(x: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, top),
            width,
            height,
        }
    }

    /// Largest x that keeps the basket fully on screen
    #[inline]
    pub fn max_x(&self, viewport_width: f32) -> f32 {
        (viewport_width - self.width).max(0.0)
    }

    /// Shift horizontally, clamping at the viewport edges
    pub fn move_by(&mut self, delta: f32, viewport_width: f32) {
        self.move_to(self.pos.x + delta, viewport_width);
    }

    /// Place the left edge at `x`, clamped into the viewport
    pub fn move_to(&mut self, x: f32, viewport_width: f32) {
        let x = if x.is_finite() { x } else { self.pos.x };
        self.pos.x = x.clamp(0.0, self.max_x(viewport_width));
    }

    /// Right edge x
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    /// Centre x
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }
}
