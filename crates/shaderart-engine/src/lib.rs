//! Shaderart engine crate.
//!
//! Windowing, GPU and frame loop for fullscreen fragment shaders. Plugins from
//! [`pointer`] attach to the [`core::Stage`] the runtime builds.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod logging;
pub mod render;

pub use shaderart_pointer as pointer;
