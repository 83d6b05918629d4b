use std::rc::Rc;

use anyhow::{Context, Result};
use ouroboros::self_referencing;
use shaderart_pointer::{Rect, SurfaceHost};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, Stage};
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::input::{translate_window_event, PointerInput};
use crate::render::{GpuContext, RenderTarget, ShaderProgram};
use crate::time::FrameClock;

use super::canvas::WindowCanvas;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,

    /// WGSL fragment stage, appended to the uniform/vertex prelude.
    pub fragment_shader: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "shaderart".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            fragment_shader: crate::render::DEFAULT_FRAGMENT.to_string(),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window and runs until it closes or the app asks to exit.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowSurface {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

/// Window-bound state; exists between `resumed` and shutdown.
struct Live {
    surface: WindowSurface,
    stage: Stage,
    input: PointerInput,
    clock: FrameClock,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    live: Option<Live>,
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            live: None,
            fatal: None,
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let surface = WindowSurface::try_new(window, |w| pollster::block_on(Gpu::new(w, gpu_init)))
            .context("GPU initialization failed")?;

        let stage = surface.with(|fields| -> Result<Stage> {
            let program = ShaderProgram::new(
                fields.gpu.device(),
                fields.gpu.surface_format(),
                &self.config.fragment_shader,
            )?;
            Ok(Stage {
                host: Rc::new(SurfaceHost::new(logical_rect(fields.window))),
                gl: Rc::new(GpuContext::new(fields.gpu.queue().clone())),
                program: Rc::new(program),
                canvas: Rc::new(WindowCanvas::new(fields.gpu.size())),
            })
        })?;

        self.app.on_start(&stage).context("app failed to start")?;

        surface.with_window(|w| w.request_redraw());
        self.live = Some(Live {
            surface,
            stage,
            input: PointerInput::default(),
            clock: FrameClock::new(),
        });
        Ok(())
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if self.live.is_some() {
            self.app.on_stop();
            self.live = None;
            log::debug!("stage torn down");
        }
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.fatal = Some(err);
        self.shutdown(event_loop);
    }

    fn resize(live: &mut Live, new_size: PhysicalSize<u32>) {
        live.surface.with_gpu_mut(|gpu| gpu.resize(new_size));
        live.surface.with_window(|w| {
            live.stage.host.set_bounding_rect(logical_rect(w));
            w.request_redraw();
        });
        live.stage.canvas.set_size(new_size);
    }

    fn redraw(&mut self) -> AppControl {
        let Some(live) = self.live.as_mut() else {
            return AppControl::Continue;
        };

        let ft = live.clock.tick();
        let size = live.surface.borrow_gpu().size();
        live.stage
            .write_frame_uniforms([size.width as f32, size.height as f32], ft.elapsed);

        let app = &mut self.app;
        let stage = &live.stage;
        live.surface.with_mut(|fields| {
            let mut ctx = FrameCtx {
                window: fields.window,
                stage,
                time: ft,
            };
            if app.on_frame(&mut ctx) == AppControl::Exit {
                return AppControl::Exit;
            }
            draw_frame(fields.window, fields.gpu, &stage.program)
        })
    }
}

fn draw_frame(window: &Window, gpu: &mut Gpu<'_>, program: &ShaderProgram) -> AppControl {
    let mut frame = match gpu.begin_frame() {
        Ok(f) => f,
        Err(err) => {
            log::debug!("frame skipped: {err}");
            return match gpu.handle_surface_error(err) {
                SurfaceErrorAction::Fatal => AppControl::Exit,
                SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                    AppControl::Continue
                }
            };
        }
    };

    {
        let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
        program.draw(&mut target);
    }

    window.pre_present_notify();
    gpu.submit(frame);
    AppControl::Continue
}

fn logical_rect(window: &Window) -> Rect {
    let size: LogicalSize<f64> = window.inner_size().to_logical(window.scale_factor());
    Rect::new(0.0, 0.0, size.width as f32, size.height as f32)
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(live) = self.live.as_mut() {
            live.clock.resume();
            return;
        }

        if let Err(e) = self.start(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        // Shaders animate with `time`: redraw continuously.
        if let Some(live) = self.live.as_ref() {
            live.surface.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(live) = self.live.as_mut() else {
            return;
        };

        let raw = live
            .surface
            .with_window(|w| translate_window_event(w, &event));
        if let Some((kind, pointer_event)) = raw.and_then(|r| live.input.apply(r)) {
            live.stage.host.dispatch(kind, pointer_event);
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.shutdown(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.shutdown(event_loop),

            WindowEvent::Resized(new_size) => {
                if let Some(live) = self.live.as_mut() {
                    Self::resize(live, new_size);
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(live) = self.live.as_mut() {
                    let new_size = live.surface.with_window(|w| w.inner_size());
                    Self::resize(live, new_size);
                }
            }

            WindowEvent::RedrawRequested => {
                if self.redraw() == AppControl::Exit {
                    self.shutdown(event_loop);
                }
            }

            _ => {}
        }
    }

    fn exiting(&mut self, event_loop: &ActiveEventLoop) {
        self.shutdown(event_loop);
    }
}
