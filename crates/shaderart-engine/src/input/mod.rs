//! Input subsystem.
//!
//! Platform events are first reduced to [`RawInput`] (see `platform`), then
//! [`PointerInput`] turns them into the unified pointer event family consumed
//! by host elements and plugins.

mod platform;
mod state;
mod types;

pub use platform::winit::translate_window_event;
pub use state::PointerInput;
pub use types::{MouseButton, RawInput, TouchPhase};
