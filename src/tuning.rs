//! Data-driven game balance
//!
//! `Tuning` holds the numbers a designer would tweak. `Layout` turns them into
//! concrete pixel sizes for the current viewport; every size is a fraction of
//! the viewport so difficulty does not depend on screen resolution.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::FallerKind;

/// Canvas size reported by the host page
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn is_narrow(&self, breakpoint: f32) -> bool {
        self.width < breakpoint
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Lives at session start
    pub starting_lives: u32,
    /// Time between spawns (ms)
    pub spawn_interval_ms: f32,
    /// Chance a spawn is a bomb
    pub bomb_probability: f32,
    /// Fall speed as a fraction of viewport height per ms
    pub fall_rate: f32,
    /// Width below which the narrow basket ratio applies
    pub narrow_breakpoint: f32,
    pub basket_width_ratio: f32,
    /// Basket width ratio on narrow screens, capped at the breakpoint's wide basket
    pub narrow_basket_width_ratio: f32,
    /// Basket height relative to basket width
    pub basket_aspect: f32,
    /// Object radius relative to basket height
    pub radius_ratio: f32,
    /// Basket movement per degree of tilt
    pub tilt_sensitivity: f32,
    /// A caught bomb ends the run instead of costing one life
    pub bomb_ends_game: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            bomb_probability: BOMB_PROBABILITY,
            fall_rate: FALL_RATE,
            narrow_breakpoint: NARROW_BREAKPOINT,
            basket_width_ratio: BASKET_WIDTH_RATIO,
            narrow_basket_width_ratio: NARROW_BASKET_WIDTH_RATIO,
            basket_aspect: BASKET_ASPECT,
            radius_ratio: RADIUS_RATIO,
            tilt_sensitivity: 1.0,
            bomb_ends_game: false,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Clamp every value into a playable range
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let positive =
            |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };

        self.starting_lives = self.starting_lives.max(1);
        self.spawn_interval_ms = positive(self.spawn_interval_ms, defaults.spawn_interval_ms);
        self.bomb_probability = if self.bomb_probability.is_finite() {
            self.bomb_probability.clamp(0.0, 1.0)
        } else {
            defaults.bomb_probability
        };
        self.fall_rate = positive(self.fall_rate, defaults.fall_rate);
        self.narrow_breakpoint = positive(self.narrow_breakpoint, defaults.narrow_breakpoint);
        self.basket_width_ratio =
            positive(self.basket_width_ratio, defaults.basket_width_ratio).min(1.0);
        self.narrow_basket_width_ratio = positive(
            self.narrow_basket_width_ratio,
            defaults.narrow_basket_width_ratio,
        )
        .min(1.0);
        self.basket_aspect = positive(self.basket_aspect, defaults.basket_aspect);
        self.radius_ratio = positive(self.radius_ratio, defaults.radius_ratio);
        self.tilt_sensitivity = positive(self.tilt_sensitivity, defaults.tilt_sensitivity);
        self
    }
}

/// Pixel sizes derived from a viewport and tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub viewport: Viewport,
    pub basket_width: f32,
    pub basket_height: f32,
    pub coin_radius: f32,
    pub bomb_radius: f32,
    /// Units per ms
    pub fall_speed: f32,
    /// Keyboard move distance (half a basket)
    pub keyboard_step: f32,
    pub font_size: f32,
}

impl Layout {
    pub fn compute(viewport: Viewport, tuning: &Tuning) -> Self {
        let wide = viewport.width * tuning.basket_width_ratio;
        // Narrow ratio, capped at the wide width at the breakpoint: continuous across it
        let basket_width = if viewport.is_narrow(tuning.narrow_breakpoint) {
            let cap = tuning.narrow_breakpoint * tuning.basket_width_ratio;
            (viewport.width * tuning.narrow_basket_width_ratio).min(cap).max(wide)
        } else {
            wide
        };
        let basket_height = basket_width * tuning.basket_aspect;
        let radius = basket_height * tuning.radius_ratio;

        Self {
            viewport,
            basket_width,
            basket_height,
            coin_radius: radius,
            bomb_radius: radius,
            fall_speed: viewport.height * tuning.fall_rate,
            keyboard_step: basket_width / 2.0,
            font_size: (viewport.height * FONT_RATIO).max(12.0),
        }
    }

    pub fn radius_for(&self, kind: FallerKind) -> f32 {
        match kind {
            FallerKind::Coin => self.coin_radius,
            FallerKind::Bomb => self.bomb_radius,
        }
    }

    /// y of the basket's top edge
    pub fn ground_y(&self) -> f32 {
        self.viewport.height - self.basket_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_scales_with_viewport() {
        let tuning = Tuning::default();
        let small = Layout::compute(Viewport::new(1600.0, 800.0), &tuning);
        let large = Layout::compute(Viewport::new(3200.0, 1600.0), &tuning);

        assert!((large.basket_width / small.basket_width - 2.0).abs() < 1e-5);
        assert!((large.coin_radius / small.coin_radius - 2.0).abs() < 1e-5);
        assert!((large.fall_speed / small.fall_speed - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_default_layout_values() {
        let layout = Layout::compute(Viewport::new(2000.0, 800.0), &Tuning::default());
        assert_eq!(layout.basket_width, 200.0);
        assert_eq!(layout.basket_height, 100.0);
        assert_eq!(layout.coin_radius, 40.0);
        assert_eq!(layout.keyboard_step, 100.0);
        assert_eq!(layout.ground_y(), 700.0);
        assert!((layout.fall_speed - 1.0).abs() < 1e-5);
        assert!((layout.font_size - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_narrow_viewport_gets_wider_basket_ratio() {
        let layout = Layout::compute(Viewport::new(400.0, 800.0), &Tuning::default());
        assert_eq!(layout.basket_width, 100.0);
    }

    #[test]
    fn test_basket_width_continuous_across_breakpoint() {
        let tuning = Tuning::default();
        let width_at = |w: f32| Layout::compute(Viewport::new(w, 800.0), &tuning).basket_width;

        assert!((width_at(1199.0) - width_at(1200.0)).abs() < 1.0);
        assert_eq!(width_at(1200.0), 120.0);

        // Never shrinks as the viewport grows
        let mut last = 0.0;
        for w in (100..3000).step_by(50) {
            let width = width_at(w as f32);
            assert!(width >= last, "basket shrank at {w}px: {width} < {last}");
            last = width;
        }
    }

    #[test]
    fn test_from_json_partial_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "bomb_probability": 0.35, "bomb_ends_game": true }"#)
            .expect("valid json");
        assert_eq!(tuning.bomb_probability, 0.35);
        assert!(tuning.bomb_ends_game);
        assert_eq!(tuning.starting_lives, STARTING_LIVES);
        assert_eq!(tuning.spawn_interval_ms, SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Tuning::from_json("not json").is_err());
    }

    #[test]
    fn test_sanitized_clamps_out_of_range() {
        let tuning = Tuning {
            starting_lives: 0,
            spawn_interval_ms: -5.0,
            bomb_probability: 3.0,
            fall_rate: f32::NAN,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(tuning.starting_lives, 1);
        assert_eq!(tuning.spawn_interval_ms, SPAWN_INTERVAL_MS);
        assert_eq!(tuning.bomb_probability, 1.0);
        assert_eq!(tuning.fall_rate, FALL_RATE);
    }
}
