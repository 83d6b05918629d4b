//! Test doubles shared by the unit tests of this crate.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::event::{PointerEvent, PointerId, PointerType};
use crate::geom::Vec2;
use crate::graphics::GraphicsContext;
use crate::host::Canvas;

/// One uniform write observed by [`RecordingContext`].
#[derive(Debug, Clone, PartialEq)]
pub enum UniformCall {
    Vec2(String, [f32; 2]),
    Float(String, f32),
    Int(String, i32),
}

/// Graphics context that records every uniform write instead of touching a GPU.
#[derive(Default)]
pub struct RecordingContext {
    pub calls: RefCell<Vec<UniformCall>>,
}

impl RecordingContext {
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last_int(&self, name: &str) -> Option<i32> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            UniformCall::Int(n, v) if n == name => Some(*v),
            _ => None,
        })
    }

    pub fn last_vec2(&self, name: &str) -> Option<[f32; 2]> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            UniformCall::Vec2(n, v) if n == name => Some(*v),
            _ => None,
        })
    }
}

pub struct RecordingProgram;

impl GraphicsContext for RecordingContext {
    type Program = RecordingProgram;
    type Location = String;

    fn uniform_location(&self, _program: &RecordingProgram, name: &str) -> Option<String> {
        Some(name.to_string())
    }

    fn uniform2fv(&self, location: Option<&String>, value: [f32; 2]) {
        if let Some(name) = location {
            self.calls.borrow_mut().push(UniformCall::Vec2(name.clone(), value));
        }
    }

    fn uniform1f(&self, location: Option<&String>, value: f32) {
        if let Some(name) = location {
            self.calls.borrow_mut().push(UniformCall::Float(name.clone(), value));
        }
    }

    fn uniform1i(&self, location: Option<&String>, value: i32) {
        if let Some(name) = location {
            self.calls.borrow_mut().push(UniformCall::Int(name.clone(), value));
        }
    }
}

pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn drawable_size(&self) -> Vec2 {
        Vec2::new(400.0, 300.0)
    }
}

/// Observer that counts its invocations.
pub fn counter() -> (Rc<Cell<usize>>, impl FnMut(f32, f32, bool) + 'static) {
    let count = Rc::new(Cell::new(0));
    let c = Rc::clone(&count);
    (count, move |_, _, _| c.set(c.get() + 1))
}

/// Observer that stores every `(x, y, dragging)` it receives.
pub fn recorder() -> (Rc<RefCell<Vec<(f32, f32, bool)>>>, impl FnMut(f32, f32, bool) + 'static) {
    let samples = Rc::new(RefCell::new(Vec::new()));
    let s = Rc::clone(&samples);
    (samples, move |x, y, dragging| s.borrow_mut().push((x, y, dragging)))
}

pub fn pointer(id: u64, x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(PointerId(id), PointerType::Mouse, Vec2::new(x, y))
}
