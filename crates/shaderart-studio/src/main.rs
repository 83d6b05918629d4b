use std::cell::Cell;
use std::rc::Rc;

use shaderart_engine::core::{App, AppControl, FrameCtx, Stage};
use shaderart_engine::device::GpuInit;
use shaderart_engine::logging::{init_logging, LoggingConfig};
use shaderart_engine::render::GpuContext;
use shaderart_engine::window::{Runtime, RuntimeConfig};
use shaderart_pointer::{pointer_interactions_plugin, PointerTracker};
use winit::dpi::LogicalSize;

/// Drag demo: the pointer plugin feeds the shader, the observer logs drags.
struct Studio {
    pointer: PointerTracker<GpuContext>,
    drags: Rc<Cell<u32>>,
}

impl Studio {
    fn new() -> Self {
        Self {
            pointer: pointer_interactions_plugin(),
            drags: Rc::new(Cell::new(0)),
        }
    }
}

impl App for Studio {
    fn on_start(&mut self, stage: &Stage) -> anyhow::Result<()> {
        stage.attach(&mut self.pointer)?;

        let drags = Rc::clone(&self.drags);
        let mut was_dragging = false;
        self.pointer.subscribe(move |x, y, dragging| {
            if was_dragging && !dragging {
                drags.set(drags.get() + 1);
                log::info!("drag #{} ended at ({x:.3}, {y:.3})", drags.get());
            } else if dragging {
                log::debug!("dragging at ({x:.3}, {y:.3})");
            }
            was_dragging = dragging;
        });

        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if ctx.time.frame_index % 600 == 0 && self.pointer.is_dragging() {
            log::trace!("frame {}: drag in progress", ctx.time.frame_index);
        }
        AppControl::Continue
    }

    fn on_stop(&mut self) {
        self.pointer.dispose();
        log::info!("{} drag(s) this session", self.drags.get());
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "shaderart studio".to_string(),
        initial_size: LogicalSize::new(960.0, 640.0),
        fragment_shader: include_str!("../shaders/drag.wgsl").to_string(),
    };

    Runtime::run(config, GpuInit::default(), Studio::new())
}
