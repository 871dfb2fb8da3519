//! Basket catch detection
//!
//! An object is caught once its whole horizontal extent sits inside the
//! basket's span and its centre has reached the basket's top edge. Bounds are
//! inclusive: touching a basket edge exactly still counts.

use super::entity::{Basket, Faller};

/// Whether `faller` lands in `basket` this tick
pub fn basket_catches(basket: &Basket, faller: &Faller) -> bool {
    let (left, right) = faller.horizontal_extent();
    let within_x = left >= basket.pos.x && right <= basket.right();
    let reached_rim = faller.pos.y >= basket.pos.y;
    within_x && reached_rim
}

/// Split out every caught object, keeping the rest in place (order preserved)
pub fn take_caught(basket: &Basket, fallers: &mut Vec<Faller>) -> Vec<Faller> {
    let mut caught = Vec::new();
    fallers.retain(|f| {
        if basket_catches(basket, f) {
            caught.push(f.clone());
            false
        } else {
            true
        }
    });
    caught
}
