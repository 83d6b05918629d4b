use shaderart_pointer::Vec2;

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

/// Platform-agnostic input relevant to pointer handling.
///
/// Positions are window-relative logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RawInput {
    CursorMoved(Vec2),
    CursorLeft,
    MouseButton { button: MouseButton, pressed: bool },
    Touch {
        id: u64,
        phase: TouchPhase,
        position: Vec2,
        /// Contact reports a stylus orientation.
        pen: bool,
    },
    Focused(bool),
}
