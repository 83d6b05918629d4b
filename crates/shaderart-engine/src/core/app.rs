use anyhow::Result;
use winit::event::WindowEvent;

use super::ctx::{FrameCtx, Stage};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by binaries.
pub trait App {
    /// Called once the window, GPU and program exist. An error aborts the runtime.
    fn on_start(&mut self, stage: &Stage) -> Result<()>;

    /// Called for every window event, after pointer input was dispatched.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per frame, after the host uniforms were written and before drawing.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let _ = ctx;
        AppControl::Continue
    }

    /// Called before the stage is torn down.
    fn on_stop(&mut self) {}
}
