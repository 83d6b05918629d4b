//! Fullscreen fragment-shader rendering.
//!
//! A [`ShaderProgram`] is one render pipeline drawing a single fullscreen
//! triangle, plus one uniform buffer whose fields are addressable by name.
//! [`GpuContext`] writes those fields through the queue; it is the graphics
//! context handed to plugins.

mod context;
mod program;
mod target;
mod uniforms;

pub use context::GpuContext;
pub use program::{ShaderProgram, DEFAULT_FRAGMENT};
pub use target::RenderTarget;
pub use uniforms::{UniformBlock, UniformKind, UniformLocation};
