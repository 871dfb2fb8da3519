//! Platform abstraction layer
//!
//! Browser bindings for the draw surface and page queries. Event wiring lives
//! in the binary; this module only wraps web APIs the game talks to.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
