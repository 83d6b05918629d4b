use std::collections::HashSet;

use shaderart_pointer::{PointerEvent, PointerEventKind, PointerId, PointerType, Vec2};

use super::types::{MouseButton, RawInput, TouchPhase};

/// Touch ids are offset so they never collide with [`PointerId::MOUSE`].
const TOUCH_ID_BASE: u64 = 2;

/// Mouse/touch state for a single window.
///
/// Mouse buttons follow pointer-event chording: the first pressed button is a
/// `Down`, the last released one an `Up`, and button changes in between are
/// reported as `Move`.
#[derive(Debug, Default)]
pub struct PointerInput {
    /// Cursor position in logical pixels, `None` while outside the window.
    cursor: Option<Vec2>,

    /// Last known cursor position, kept after the cursor leaves.
    last_cursor: Vec2,

    buttons_down: HashSet<MouseButton>,
}

impl PointerInput {
    pub fn any_button_down(&self) -> bool {
        !self.buttons_down.is_empty()
    }

    /// Applies one raw input and returns the pointer event it produces, if any.
    pub fn apply(&mut self, input: RawInput) -> Option<(PointerEventKind, PointerEvent)> {
        match input {
            RawInput::CursorMoved(pos) => {
                self.cursor = Some(pos);
                self.last_cursor = pos;
                Some((PointerEventKind::Move, self.mouse_event()))
            }

            RawInput::CursorLeft => {
                self.cursor = None;
                None
            }

            RawInput::MouseButton { button, pressed: true } => {
                let first = self.buttons_down.is_empty();
                if !self.buttons_down.insert(button) {
                    return None;
                }
                let kind = if first { PointerEventKind::Down } else { PointerEventKind::Move };
                Some((kind, self.mouse_event()))
            }

            RawInput::MouseButton { button, pressed: false } => {
                // Press happened outside the window: nothing to end.
                if !self.buttons_down.remove(&button) {
                    return None;
                }
                let kind = if self.buttons_down.is_empty() {
                    PointerEventKind::Up
                } else {
                    PointerEventKind::Move
                };
                Some((kind, self.mouse_event()))
            }

            RawInput::Focused(true) => None,

            RawInput::Focused(false) => {
                // Release events are not delivered to an unfocused window.
                if self.buttons_down.is_empty() {
                    return None;
                }
                self.buttons_down.clear();
                Some((PointerEventKind::Cancel, self.mouse_event()))
            }

            RawInput::Touch { id, phase, position, pen } => {
                let kind = match phase {
                    TouchPhase::Started => PointerEventKind::Down,
                    TouchPhase::Moved => PointerEventKind::Move,
                    TouchPhase::Ended => PointerEventKind::Up,
                    TouchPhase::Cancelled => PointerEventKind::Cancel,
                };
                let pointer_type = if pen { PointerType::Pen } else { PointerType::Touch };
                let pointer_id = PointerId(id.saturating_add(TOUCH_ID_BASE));
                Some((kind, PointerEvent::new(pointer_id, pointer_type, position)))
            }
        }
    }

    fn mouse_event(&self) -> PointerEvent {
        let pos = self.cursor.unwrap_or(self.last_cursor);
        PointerEvent::new(PointerId::MOUSE, PointerType::Mouse, pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: MouseButton) -> RawInput {
        RawInput::MouseButton { button, pressed: true }
    }

    fn release(button: MouseButton) -> RawInput {
        RawInput::MouseButton { button, pressed: false }
    }

    fn kind(out: Option<(PointerEventKind, PointerEvent)>) -> Option<PointerEventKind> {
        out.map(|(k, _)| k)
    }

    #[test]
    fn mouse_press_drag_release() {
        let mut input = PointerInput::default();

        let moved = input.apply(RawInput::CursorMoved(Vec2::new(5.0, 6.0)));
        assert_eq!(kind(moved), Some(PointerEventKind::Move));

        let (k, ev) = input.apply(press(MouseButton::Left)).unwrap();
        assert_eq!(k, PointerEventKind::Down);
        assert_eq!(ev.pointer_id, PointerId::MOUSE);
        assert_eq!(ev.client, Vec2::new(5.0, 6.0));

        assert_eq!(kind(input.apply(release(MouseButton::Left))), Some(PointerEventKind::Up));
        assert!(!input.any_button_down());
    }

    #[test]
    fn chorded_buttons_report_move() {
        let mut input = PointerInput::default();
        assert_eq!(kind(input.apply(press(MouseButton::Left))), Some(PointerEventKind::Down));
        assert_eq!(kind(input.apply(press(MouseButton::Right))), Some(PointerEventKind::Move));
        assert_eq!(kind(input.apply(release(MouseButton::Left))), Some(PointerEventKind::Move));
        assert_eq!(kind(input.apply(release(MouseButton::Right))), Some(PointerEventKind::Up));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut input = PointerInput::default();
        assert_eq!(input.apply(release(MouseButton::Left)), None);
    }

    #[test]
    fn focus_loss_while_pressed_cancels() {
        let mut input = PointerInput::default();
        input.apply(RawInput::CursorMoved(Vec2::new(1.0, 2.0)));
        input.apply(press(MouseButton::Left));
        input.apply(RawInput::CursorLeft);

        let (k, ev) = input.apply(RawInput::Focused(false)).unwrap();
        assert_eq!(k, PointerEventKind::Cancel);
        assert_eq!(ev.client, Vec2::new(1.0, 2.0));
        assert!(!input.any_button_down());

        assert_eq!(input.apply(RawInput::Focused(false)), None);
    }

    #[test]
    fn touches_get_offset_ids_and_types() {
        let mut input = PointerInput::default();
        let (k, ev) = input
            .apply(RawInput::Touch {
                id: 0,
                phase: TouchPhase::Started,
                position: Vec2::new(3.0, 4.0),
                pen: false,
            })
            .unwrap();
        assert_eq!(k, PointerEventKind::Down);
        assert_eq!(ev.pointer_id, PointerId(2));
        assert_eq!(ev.pointer_type, PointerType::Touch);

        let (k, ev) = input
            .apply(RawInput::Touch {
                id: 9,
                phase: TouchPhase::Cancelled,
                position: Vec2::zero(),
                pen: true,
            })
            .unwrap();
        assert_eq!(k, PointerEventKind::Cancel);
        assert_eq!(ev.pointer_type, PointerType::Pen);
    }
}
