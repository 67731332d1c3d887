//! Per-frame render orchestration
//!
//! One [`Renderer::render_frame`] call runs the strictly ordered sequence:
//! clear the main off-screen target, draw faces then edges then vertices,
//! run the holographic pass when enabled, composite to the swapchain, and
//! record metrics. The quality governor acts on the rolling frame-time
//! average via [`Renderer::regulate`].

use std::time::Instant;

use polychora_core::{AudioParams, Instance, PassFlags, RenderConfig};
use polychora_math::projection;

use crate::camera::{mat4_mul, perspective_matrix, view_matrix};
use crate::context::RenderContext;
use crate::metrics::{FrameTimer, QualityGovernor, RenderMetrics};
use crate::pipeline::{
    FrameUniforms, GeometryPipelines, MeshVertex, PointInstance, PostPipelines, PostUniforms,
};
use crate::targets::RenderTargets;

/// Runtime render failure, per frame
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated (resize, minimize); reconfigure and retry
    SurfaceLost,
    /// GPU out of memory; not recoverable
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Viewer distances and 3D camera parameters for the two projection stages
#[derive(Clone, Copy, Debug)]
pub struct ProjectionSettings {
    /// Viewer distance along W for the 4D->3D divide
    pub viewer_distance_4d: f32,
    /// Camera distance along Z for the 3D->2D stage
    pub camera_distance_3d: f32,
    pub fov_y_radians: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            viewer_distance_4d: 3.0,
            camera_distance_3d: 5.0,
            fov_y_radians: std::f32::consts::FRAC_PI_4,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Owns the pipelines, off-screen targets, and frame metrics
pub struct Renderer {
    geometry: GeometryPipelines,
    post: PostPipelines,
    targets: Option<RenderTargets>,
    scene_binding: Option<wgpu::BindGroup>,
    holo_binding: Option<wgpu::BindGroup>,
    color_format: wgpu::TextureFormat,
    background: wgpu::Color,
    timer: FrameTimer,
    governor: QualityGovernor,
    metrics: RenderMetrics,
}

impl Renderer {
    /// Build pipelines and the initial off-screen targets
    pub fn new(ctx: &RenderContext, frame_budget_ms: f32, background: [f64; 4]) -> Self {
        let color_format = ctx.config.format;
        let geometry = GeometryPipelines::new(&ctx.device, color_format);
        let post = PostPipelines::new(&ctx.device, color_format, color_format);

        let mut renderer = Self {
            geometry,
            post,
            targets: None,
            scene_binding: None,
            holo_binding: None,
            color_format,
            background: wgpu::Color {
                r: background[0],
                g: background[1],
                b: background[2],
                a: background[3],
            },
            timer: FrameTimer::new(),
            governor: QualityGovernor::new(frame_budget_ms),
            metrics: RenderMetrics::default(),
        };
        renderer.recreate_targets(&ctx.device, ctx.size.width, ctx.size.height);
        renderer
    }

    fn recreate_targets(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        let targets = RenderTargets::new(device, width, height, self.color_format);
        self.scene_binding = Some(self.post.make_texture_binding(device, &targets.scene_color));
        self.holo_binding = Some(self.post.make_texture_binding(device, &targets.holo_color));
        self.targets = Some(targets);
    }

    /// Tear down and recreate both off-screen targets at the new size.
    /// Must run before the next frame renders; call after the surface itself
    /// is reconfigured.
    pub fn resize(&mut self, ctx: &RenderContext, width: u32, height: u32) {
        self.recreate_targets(&ctx.device, width, height);
        log::info!("render targets recreated at {}x{}", width, height);
    }

    /// Release the off-screen targets and their bindings. Idempotent;
    /// rendering after dispose is a logged no-op.
    pub fn dispose(&mut self) {
        if self.targets.is_some() {
            self.targets = None;
            self.scene_binding = None;
            self.holo_binding = None;
            log::info!("renderer disposed");
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.targets.is_none()
    }

    /// Last recorded frame metrics
    pub fn metrics(&self) -> RenderMetrics {
        self.metrics
    }

    /// Apply one quality-governor step against the rolling average.
    /// Returns whether a reduction happened.
    pub fn regulate(&self, config: &mut RenderConfig) -> bool {
        self.governor.regulate(self.timer.average_ms(), config)
    }

    /// Render one frame of the given instances.
    ///
    /// Instances draw in slice order into the same targets; the last one is
    /// the primary, and its config drives the post-process passes.
    pub fn render_frame(
        &mut self,
        ctx: &RenderContext,
        instances: &[&Instance],
        params: &AudioParams,
        elapsed: f32,
        settings: &ProjectionSettings,
    ) -> Result<(), RenderError> {
        let frame_start = Instant::now();

        let (Some(targets), Some(scene_binding), Some(holo_binding)) =
            (&self.targets, &self.scene_binding, &self.holo_binding)
        else {
            log::warn!("render_frame called on a disposed renderer");
            return Ok(());
        };

        // Build this frame's primitives on the CPU. Per-instance policy is
        // baked into vertex data so all instances share one set of buffers.
        let mut face_vertices: Vec<MeshVertex> = Vec::new();
        let mut edge_vertices: Vec<MeshVertex> = Vec::new();
        let mut point_instances: Vec<PointInstance> = Vec::new();

        for instance in instances {
            let projected =
                projection::project_polytope(&instance.polytope.vertices, settings.viewer_distance_4d);
            let config = &instance.config;

            if config.passes.contains(PassFlags::FACES) {
                let c = config.face_color;
                let color = [c[0], c[1], c[2], c[3] * config.face_opacity * instance.opacity];
                for face in &instance.polytope.faces {
                    // Fan triangulation from the first corner
                    for i in 1..face.vertices.len().saturating_sub(1) {
                        for &vi in &[face.vertices[0], face.vertices[i], face.vertices[i + 1]] {
                            face_vertices.push(MeshVertex::new(projected[vi].to_array(), color));
                        }
                    }
                }
            }

            if config.passes.contains(PassFlags::EDGES) {
                let c = config.edge_color;
                let weight = config.edge_thickness.clamp(0.0, 1.0);
                let color = [c[0], c[1], c[2], c[3] * weight * instance.opacity];
                for edge in &instance.polytope.edges {
                    edge_vertices.push(MeshVertex::new(projected[edge.a].to_array(), color));
                    edge_vertices.push(MeshVertex::new(projected[edge.b].to_array(), color));
                }
            }

            if config.passes.contains(PassFlags::VERTICES) {
                let c = config.vertex_color;
                let color = [c[0], c[1], c[2], c[3] * instance.opacity];
                for p in &projected {
                    point_instances.push(PointInstance {
                        position: p.to_array(),
                        size: config.vertex_size,
                        color,
                    });
                }
            }
        }

        let primary_config = instances
            .last()
            .map(|i| i.config)
            .unwrap_or_default();
        let holographic = primary_config.passes.contains(PassFlags::HOLOGRAPHIC);
        let depth_glow = primary_config.passes.contains(PassFlags::DEPTH_GLOW);

        let (width, height) = targets.size();
        let resolution = [width as f32, height as f32];
        let aspect = width as f32 / height.max(1) as f32;
        let view_proj = mat4_mul(
            perspective_matrix(settings.fov_y_radians, aspect, settings.near, settings.far),
            view_matrix(settings.camera_distance_3d),
        );

        self.geometry.update_uniforms(
            &ctx.queue,
            &FrameUniforms {
                view_proj,
                resolution,
                time: elapsed,
                amplitude: params.amplitude,
                frequency: params.frequency,
                attack_sharpness: params.attack_sharpness,
                _padding: [0.0; 2],
            },
        );
        self.post.update_uniforms(
            &ctx.queue,
            &PostUniforms {
                resolution,
                time: elapsed,
                amplitude: params.amplitude,
                attack_sharpness: params.attack_sharpness,
                chromatic_aberration: primary_config.chromatic_aberration,
                interference: primary_config.interference,
                glow_strength: if depth_glow {
                    primary_config.glow_strength
                } else {
                    0.0
                },
            },
        );
        self.geometry
            .upload(&ctx.queue, &face_vertices, &edge_vertices, &point_instances);

        let output = match ctx.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };
        let surface_view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        // 1-4: clear + faces + edges + vertices into the scene target
        let stats = self.geometry.render(
            &mut encoder,
            &targets.scene_color,
            &targets.scene_depth,
            self.background,
        );
        let mut draw_calls = stats.draw_calls;

        // 5: holographic pass, when the primary enables it
        let composite_source = if holographic {
            self.post
                .run_holographic(&mut encoder, scene_binding, &targets.holo_color);
            draw_calls += 1;
            holo_binding
        } else {
            scene_binding
        };

        // 6: composite whichever target is live to the swapchain
        self.post
            .run_composite(&mut encoder, composite_source, &surface_view);
        draw_calls += 1;

        ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        // 7: record metrics
        let frame_ms = frame_start.elapsed().as_secs_f32() * 1000.0;
        self.timer.push(frame_ms);
        self.metrics = RenderMetrics {
            fps: self.timer.fps(),
            frame_time_ms: self.timer.average_ms(),
            last_frame_ms: frame_ms,
            vertices: stats.points,
            edges: stats.edges,
            triangles: stats.triangles,
            draw_calls,
        };

        Ok(())
    }
}
