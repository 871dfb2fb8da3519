//! Directional input from keyboard, pointer and tilt sensors
//!
//! Browser events are translated by the host into `InputEvent`s. Movement is
//! only honoured while a run is live; everything out of range is clamped.

use crate::consts::MAX_TILT_DEGREES;
use crate::sim::GameSession;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Shift the basket by a signed distance
    MoveBy(f32),
    /// Centre the basket on a pointer x coordinate
    MoveTo(f32),
    /// Device tilt (gamma) in degrees, left negative
    Tilt(f32),
    /// Arrow keys: half a basket per press
    StepLeft,
    StepRight,
    /// Click/tap on the start or retry screen
    StartRequested,
}

impl InputEvent {
    pub fn is_movement(&self) -> bool {
        !matches!(self, InputEvent::StartRequested)
    }
}

/// Apply a movement event to the basket. Returns false if it was ignored.
pub fn apply_movement(session: &mut GameSession, event: InputEvent) -> bool {
    if !session.is_playing() {
        return false;
    }
    let layout = &session.layout;
    let width = layout.viewport.width;
    let step = layout.keyboard_step;
    let tilt_sensitivity = session.tuning.tilt_sensitivity;

    let Some(basket) = session.basket.as_mut() else {
        return false;
    };

    match event {
        InputEvent::MoveBy(delta) => basket.move_by(delta, width),
        InputEvent::MoveTo(pointer_x) => basket.move_to(pointer_x - basket.width / 2.0, width),
        InputEvent::Tilt(gamma) => {
            if !gamma.is_finite() {
                return false;
            }
            let gamma = gamma.clamp(-MAX_TILT_DEGREES, MAX_TILT_DEGREES);
            basket.move_by(gamma * tilt_sensitivity, width);
        }
        InputEvent::StepLeft => basket.move_by(-step, width),
        InputEvent::StepRight => basket.move_by(step, width),
        InputEvent::StartRequested => return false,
    }
    true
}
