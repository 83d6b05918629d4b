use shaderart_pointer::Vec2;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, Force, MouseButton as WinitMouseButton, WindowEvent};
use winit::window::Window;

use crate::input::{MouseButton, RawInput, TouchPhase};

/// Reduces a winit `WindowEvent` to the input the pointer layer cares about.
///
/// Returns `None` for everything else (keyboard, wheel, IME, ...).
pub fn translate_window_event(window: &Window, event: &WindowEvent) -> Option<RawInput> {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            Some(RawInput::CursorMoved(to_logical(window, *position)))
        }

        WindowEvent::CursorLeft { .. } => Some(RawInput::CursorLeft),

        WindowEvent::MouseInput { state, button, .. } => Some(RawInput::MouseButton {
            button: map_mouse_button(*button),
            pressed: *state == ElementState::Pressed,
        }),

        WindowEvent::Touch(touch) => {
            let phase = match touch.phase {
                winit::event::TouchPhase::Started => TouchPhase::Started,
                winit::event::TouchPhase::Moved => TouchPhase::Moved,
                winit::event::TouchPhase::Ended => TouchPhase::Ended,
                winit::event::TouchPhase::Cancelled => TouchPhase::Cancelled,
            };
            // Only stylus contacts report an altitude angle.
            let pen = matches!(
                touch.force,
                Some(Force::Calibrated { altitude_angle: Some(_), .. })
            );
            Some(RawInput::Touch {
                id: touch.id,
                phase,
                position: to_logical(window, touch.location),
                pen,
            })
        }

        WindowEvent::Focused(f) => Some(RawInput::Focused(*f)),

        _ => None,
    }
}

fn to_logical(window: &Window, pos: PhysicalPosition<f64>) -> Vec2 {
    let logical = pos.to_logical::<f64>(window.scale_factor());
    Vec2::new(logical.x as f32, logical.y as f32)
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}
