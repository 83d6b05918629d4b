//! Host-side contracts.
//!
//! The host element owns input dispatch and pointer capture. Plugins only talk
//! to it through [`HostElement`] and receive events through [`PointerListener`].

use std::rc::Rc;

use crate::event::{PointerEvent, PointerEventKind, PointerId};
use crate::geom::{Rect, Vec2};

/// Handle returned by [`HostElement::add_listener`], used to remove the binding.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ListenerId(pub u64);

/// Receiver of pointer events dispatched by a host element.
///
/// Listeners are invoked synchronously from the host's dispatch loop.
pub trait PointerListener {
    fn handle_event(&self, kind: PointerEventKind, event: &PointerEvent);
}

/// Element that renders the shader and routes pointer input to plugins.
///
/// All methods take `&self`: elements are shared by reference between the host
/// and its plugins and use interior mutability for their own bookkeeping.
pub trait HostElement {
    /// On-screen bounding box in viewport logical pixels.
    fn bounding_client_rect(&self) -> Rect;

    /// Routes every further event of `pointer_id` to this element.
    fn set_pointer_capture(&self, pointer_id: PointerId);

    /// Ends a capture started with [`HostElement::set_pointer_capture`].
    fn release_pointer_capture(&self, pointer_id: PointerId);

    fn has_pointer_capture(&self, pointer_id: PointerId) -> bool;

    fn add_listener(&self, kind: PointerEventKind, listener: Rc<dyn PointerListener>) -> ListenerId;

    /// Returns `false` when `id` was not registered (or already removed).
    fn remove_listener(&self, id: ListenerId) -> bool;
}

/// Drawing surface backing a host element.
pub trait Canvas {
    /// Drawable size in physical pixels.
    fn drawable_size(&self) -> Vec2;
}
