use std::fmt;

use crate::geom::Vec2;

/// Identifier of a single pointer (one mouse, one finger, one pen).
///
/// Stable for the lifetime of a press → release sequence.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PointerId(pub u64);

impl PointerId {
    /// The mouse pointer. Hosts with a single mouse use this id for all mouse events.
    pub const MOUSE: PointerId = PointerId(1);
}

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Physical device behind a pointer.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum PointerType {
    #[default]
    Mouse,
    Touch,
    Pen,
}

/// Pointer event family.
///
/// Mouse, touch and pen all use the same kinds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PointerEventKind {
    /// Button pressed / contact started.
    Down,
    /// Position changed.
    Move,
    /// Button released / contact ended.
    Up,
    /// The platform aborted the pointer sequence (focus loss, touch cancel).
    Cancel,
    /// Pointer capture for this pointer ended, explicitly or not.
    LostCapture,
}

impl PointerEventKind {
    pub const ALL: [PointerEventKind; 5] = [
        PointerEventKind::Down,
        PointerEventKind::Move,
        PointerEventKind::Up,
        PointerEventKind::Cancel,
        PointerEventKind::LostCapture,
    ];
}

impl fmt::Display for PointerEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PointerEventKind::Down => "pointerdown",
            PointerEventKind::Move => "pointermove",
            PointerEventKind::Up => "pointerup",
            PointerEventKind::Cancel => "pointercancel",
            PointerEventKind::LostCapture => "lostpointercapture",
        };
        f.write_str(name)
    }
}

/// Payload carried by every pointer event.
///
/// `client` is in viewport-relative logical pixels, not element-relative.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub pointer_type: PointerType,
    pub client: Vec2,
}

impl PointerEvent {
    #[inline]
    pub fn new(pointer_id: PointerId, pointer_type: PointerType, client: Vec2) -> Self {
        Self { pointer_id, pointer_type, client }
    }

    /// Mouse event at `(x, y)` using [`PointerId::MOUSE`].
    #[inline]
    pub fn mouse(x: f32, y: f32) -> Self {
        Self::new(PointerId::MOUSE, PointerType::Mouse, Vec2::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_display_as_dom_event_names() {
        let names: Vec<String> = PointerEventKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            names,
            ["pointerdown", "pointermove", "pointerup", "pointercancel", "lostpointercapture"]
        );
    }

    #[test]
    fn mouse_events_use_the_mouse_pointer() {
        let ev = PointerEvent::mouse(3.0, 4.0);
        assert_eq!(ev.pointer_id, PointerId::MOUSE);
        assert_eq!(ev.pointer_type, PointerType::Mouse);
        assert_eq!(ev.pointer_id.to_string(), "#1");
    }
}
