//! Pointer drag interactions for shader-art hosts.
//!
//! [`PointerTracker`] listens to pointer events on a host element, keeps the
//! state of a single-pointer drag, writes the normalized position into shader
//! uniforms (`pointer`, `pointerStart`, `dragging`) and forwards it to
//! subscribed observers.
//!
//! Host, graphics context and canvas are abstract ([`HostElement`],
//! [`GraphicsContext`], [`Canvas`]) so the crate carries no GPU or windowing
//! dependency. [`SurfaceHost`] is a ready-made host element over a viewport
//! rectangle.

mod error;
mod event;
mod geom;
mod graphics;
mod host;
mod plugin;
mod surface_host;
mod tracker;

#[cfg(test)]
mod testing;

pub use error::SetupError;
pub use event::{PointerEvent, PointerEventKind, PointerId, PointerType};
pub use geom::{Rect, Vec2};
pub use graphics::GraphicsContext;
pub use host::{Canvas, HostElement, ListenerId, PointerListener};
pub use plugin::Plugin;
pub use surface_host::SurfaceHost;
pub use tracker::{
    pointer_interactions_plugin, Observer, PointerTracker, SubscriberId, TrackerConfig,
    UniformNames,
};
