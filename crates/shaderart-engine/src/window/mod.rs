//! Window + runtime loop.
//!
//! Owns the `winit` event loop and window, wires them to the GPU layer and
//! routes pointer input into the stage's host element.

mod canvas;
mod runtime;

pub use canvas::WindowCanvas;
pub use runtime::{Runtime, RuntimeConfig};
