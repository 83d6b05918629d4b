//! Contracts between the runtime and applications.
//!
//! The runtime builds a [`Stage`] (host element, graphics context, program,
//! canvas) once the window exists and hands it to the [`App`], which attaches
//! its plugins.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, Stage};
