use shaderart_pointer::GraphicsContext;

use super::program::ShaderProgram;
use super::uniforms::{UniformKind, UniformLocation};

/// [`GraphicsContext`] over a wgpu queue.
///
/// Writes are staged by the queue and land before the next submitted frame.
pub struct GpuContext {
    queue: wgpu::Queue,
}

impl GpuContext {
    pub fn new(queue: wgpu::Queue) -> Self {
        Self { queue }
    }

    fn write(&self, location: Option<&UniformLocation>, kind: UniformKind, bytes: &[u8]) {
        let Some(location) = location else { return };
        if location.kind != kind {
            log::warn!(
                "uniform `{}` is {:?}, write as {:?} ignored",
                location.name,
                location.kind,
                kind
            );
            return;
        }
        self.queue.write_buffer(&location.buffer, location.offset, bytes);
    }
}

impl GraphicsContext for GpuContext {
    type Program = ShaderProgram;
    type Location = UniformLocation;

    fn uniform_location(&self, program: &ShaderProgram, name: &str) -> Option<UniformLocation> {
        program.uniform_location(name)
    }

    fn uniform2fv(&self, location: Option<&UniformLocation>, value: [f32; 2]) {
        self.write(location, UniformKind::Vec2, bytemuck::cast_slice(&value));
    }

    fn uniform1f(&self, location: Option<&UniformLocation>, value: f32) {
        self.write(location, UniformKind::Float, bytemuck::bytes_of(&value));
    }

    fn uniform1i(&self, location: Option<&UniformLocation>, value: i32) {
        self.write(location, UniformKind::Int, bytemuck::bytes_of(&value));
    }
}
