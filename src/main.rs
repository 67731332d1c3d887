//! Polychora - audio-reactive 4D polytope visualizer
//!
//! Windowed demo binary: wires the visualization engine to a winit window
//! and the wgpu renderer, driven at a fixed tick cadence.

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowId},
};

use polychora::config::AppConfig;
use polychora::telemetry::DemoTelemetry;
use polychora::VisualizationEngine;
use polychora_render::{
    context::RenderContext, renderer::ProjectionSettings, RenderError, Renderer,
};

/// GPU-side state, created once the window exists
struct RenderState {
    context: RenderContext,
    renderer: Renderer,
}

/// Main application state
struct App {
    config: AppConfig,
    engine: VisualizationEngine,
    projection: ProjectionSettings,
    window: Option<Arc<Window>>,
    render: Option<RenderState>,
    last_frame: Instant,
    next_tick: Instant,
    tick_period: Duration,
    paused: bool,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let engine = VisualizationEngine::new(Box::new(DemoTelemetry::new()))
            .with_preset(&config.engine.preset);

        let projection = ProjectionSettings {
            viewer_distance_4d: config.engine.viewer_distance_4d,
            camera_distance_3d: config.engine.camera_distance_3d,
            fov_y_radians: config.rendering.fov.to_radians(),
            near: config.rendering.near,
            far: config.rendering.far,
        };

        let tick_period = Duration::from_secs_f32(1.0 / config.engine.target_fps.max(1.0));

        Self {
            config,
            engine,
            projection,
            window: None,
            render: None,
            last_frame: Instant::now(),
            next_tick: Instant::now(),
            tick_period,
            paused: false,
        }
    }

    /// One animation tick: advance the engine (unless paused), render, let
    /// the governor act, and refresh the introspection metrics.
    fn tick(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        // Cap dt so a stall does not turn into one giant jump
        let dt = (now - self.last_frame).as_secs_f32().min(0.25);
        self.last_frame = now;

        if !self.paused {
            self.engine.advance(dt);
        }

        let Some(render) = &mut self.render else {
            return;
        };

        let instances = self.engine.render_list();
        let params = self.engine.last_params();
        let result = render.renderer.render_frame(
            &render.context,
            &instances,
            &params,
            self.engine.elapsed(),
            &self.projection,
        );

        match result {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                let size = render.context.size;
                render.context.resize(size);
                render
                    .renderer
                    .resize(&render.context, size.width, size.height);
                return;
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
                return;
            }
            Err(e) => {
                log::warn!("render error: {}", e);
                return;
            }
        }

        render.renderer.regulate(self.engine.primary_config_mut());
        self.engine.record_metrics(render.renderer.metrics());

        if self.config.debug.show_metrics_in_title {
            if let Some(window) = &self.window {
                let m = render.renderer.metrics();
                let state = if self.paused { " [paused]" } else { "" };
                window.set_title(&format!(
                    "{} - {} | {:.0} fps | {}v {}e {}t{}",
                    self.config.window.title,
                    self.engine.preset_name(),
                    m.fps,
                    m.vertices,
                    m.edges,
                    m.triangles,
                    state,
                ));
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode, event_loop: &ActiveEventLoop) {
        match key {
            KeyCode::Escape => event_loop.exit(),
            KeyCode::Space => {
                self.paused = !self.paused;
                if !self.paused {
                    // Resume from the same state without a dt spike
                    self.last_frame = Instant::now();
                    self.next_tick = Instant::now();
                }
                log::info!("animation {}", if self.paused { "paused" } else { "resumed" });
            }
            KeyCode::KeyP => self.engine.cycle_preset(),
            KeyCode::Digit1 => self.engine.set_preset(0),
            KeyCode::Digit2 => self.engine.set_preset(1),
            KeyCode::Digit3 => self.engine.set_preset(2),
            KeyCode::Digit4 => self.engine.set_preset(3),
            KeyCode::Digit5 => self.engine.set_preset(4),
            _ => {}
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let mut attrs = Window::default_attributes()
            .with_title(&self.config.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));
        if self.config.window.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("Failed to create window"),
        );

        // A dead GPU is fatal: report upward and stop instead of silently
        // ticking a renderer that draws nothing
        let context = match pollster::block_on(RenderContext::with_vsync(
            window.clone(),
            self.config.window.vsync,
        )) {
            Ok(context) => context,
            Err(e) => {
                log::error!("GPU initialization failed: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = Renderer::new(
            &context,
            self.config.rendering.frame_budget_ms,
            self.config.rendering.background_color,
        );

        log::info!(
            "presets available: {}",
            self.engine.preset_names().join(", ")
        );

        self.render = Some(RenderState { context, renderer });
        self.window = Some(window);
        self.last_frame = Instant::now();
        self.next_tick = Instant::now();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                if let Some(render) = &mut self.render {
                    render.renderer.dispose();
                }
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.context.resize(physical_size);
                    // Targets must match the surface before the next frame
                    render.renderer.resize(
                        &render.context,
                        physical_size.width,
                        physical_size.height,
                    );
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let PhysicalKey::Code(key) = event.physical_key {
                        self.handle_key(key, event_loop);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.tick(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.paused {
            // No periodic source while paused; OS redraws still repaint
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }

        let now = Instant::now();
        if now >= self.next_tick {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            while self.next_tick <= now {
                self.next_tick += self.tick_period;
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_tick));
    }
}

fn main() {
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.debug.log_level),
    )
    .init();
    log::info!("Starting Polychora");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
