use std::cell::Cell;

use shaderart_pointer::{Canvas, Vec2};
use winit::dpi::PhysicalSize;

/// [`Canvas`] backed by the window surface.
#[derive(Debug)]
pub struct WindowCanvas {
    size: Cell<PhysicalSize<u32>>,
}

impl WindowCanvas {
    pub fn new(size: PhysicalSize<u32>) -> Self {
        Self { size: Cell::new(size) }
    }

    pub(crate) fn set_size(&self, size: PhysicalSize<u32>) {
        self.size.set(size);
    }
}

impl Canvas for WindowCanvas {
    fn drawable_size(&self) -> Vec2 {
        let size = self.size.get();
        Vec2::new(size.width as f32, size.height as f32)
    }
}
