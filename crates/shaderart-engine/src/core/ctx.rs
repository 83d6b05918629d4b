use std::rc::Rc;

use shaderart_pointer::{GraphicsContext, HostElement, Plugin, SetupError, SurfaceHost};
use winit::window::Window;

use crate::render::{GpuContext, ShaderProgram};
use crate::time::FrameTime;
use crate::window::WindowCanvas;

/// Everything a plugin needs from the host: element, context, program, canvas.
///
/// Handles are shared with plugins; the runtime drops its stage when the
/// window closes.
pub struct Stage {
    pub host: Rc<SurfaceHost>,
    pub gl: Rc<GpuContext>,
    pub program: Rc<ShaderProgram>,
    pub canvas: Rc<WindowCanvas>,
}

impl Stage {
    /// Runs `plugin.setup` with this stage's handles.
    pub fn attach<P: Plugin<GpuContext>>(&self, plugin: &mut P) -> Result<(), SetupError> {
        let host: Rc<dyn HostElement> = self.host.clone();
        let result = plugin.setup(
            Some(host),
            Rc::clone(&self.gl),
            Rc::clone(&self.program),
            self.canvas.clone(),
        );
        match &result {
            Ok(()) => log::info!("plugin {} attached", plugin.name()),
            Err(e) => log::error!("plugin {} failed to attach: {e}", plugin.name()),
        }
        result
    }

    /// Writes the host-owned uniforms (`resolution`, `time`).
    pub(crate) fn write_frame_uniforms(&self, resolution: [f32; 2], time: f32) {
        let program = self.program.as_ref();
        self.gl.uniform2fv(self.gl.uniform_location(program, "resolution").as_ref(), resolution);
        self.gl.uniform1f(self.gl.uniform_location(program, "time").as_ref(), time);
    }
}

/// Per-frame context passed to [`crate::core::App::on_frame`].
pub struct FrameCtx<'a> {
    pub window: &'a Window,
    pub stage: &'a Stage,
    pub time: FrameTime,
}
