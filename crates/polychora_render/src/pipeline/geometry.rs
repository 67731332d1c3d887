//! Primitive pipelines for the main scene pass
//!
//! Faces, edges, and vertices draw in that order inside a single render
//! pass on the main off-screen target. Faces blend with standard alpha under
//! depth testing; edges are line primitives with a shader-side audio jitter;
//! vertices are screen-aligned billboard quads since WebGPU has no sized
//! point primitive.

use wgpu::util::DeviceExt;

use super::types::{
    FrameUniforms, MeshVertex, PointInstance, MAX_EDGE_VERTICES, MAX_FACE_VERTICES,
    MAX_POINT_INSTANCES,
};
use crate::targets::RenderTargets;

/// Per-frame draw statistics from the scene pass
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DrawStats {
    pub triangles: u32,
    pub edges: u32,
    pub points: u32,
    pub draw_calls: u32,
}

/// The face/edge/point pipelines with their shared uniforms and buffers
pub struct GeometryPipelines {
    face_pipeline: wgpu::RenderPipeline,
    edge_pipeline: wgpu::RenderPipeline,
    point_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    face_buffer: wgpu::Buffer,
    edge_buffer: wgpu::Buffer,
    point_buffer: wgpu::Buffer,
    face_vertex_count: u32,
    edge_vertex_count: u32,
    point_count: u32,
}

impl GeometryPipelines {
    pub fn new(device: &wgpu::Device, color_format: wgpu::TextureFormat) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Geometry Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Geometry Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Geometry Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/geometry.wgsl").into()),
        });

        let mesh_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec3<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                // color: vec4<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        };

        let point_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                // position: vec3<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                // size: f32
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 12,
                    shader_location: 1,
                },
                // color: vec4<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 2,
                },
            ],
        };

        let make_pipeline = |label: &str,
                             vs: &str,
                             fs: &str,
                             topology: wgpu::PrimitiveTopology,
                             buffers: &[wgpu::VertexBufferLayout],
                             depth_write: bool| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some(vs),
                    buffers,
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some(fs),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: color_format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    unclipped_depth: false,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    conservative: false,
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: RenderTargets::DEPTH_FORMAT,
                    depth_write_enabled: depth_write,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState {
                    count: 1,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
                cache: None,
            })
        };

        let mesh_buffers = [mesh_layout];
        let point_buffers = [point_layout];

        let face_pipeline = make_pipeline(
            "Face Pipeline",
            "vs_face",
            "fs_face",
            wgpu::PrimitiveTopology::TriangleList,
            &mesh_buffers,
            true,
        );
        let edge_pipeline = make_pipeline(
            "Edge Pipeline",
            "vs_edge",
            "fs_edge",
            wgpu::PrimitiveTopology::LineList,
            &mesh_buffers,
            true,
        );
        let point_pipeline = make_pipeline(
            "Point Pipeline",
            "vs_point",
            "fs_point",
            wgpu::PrimitiveTopology::TriangleList,
            &point_buffers,
            false,
        );

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Frame Uniform Buffer"),
            contents: bytemuck::bytes_of(&FrameUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Geometry Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let vertex_buffer = |label: &str, size: usize| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: size as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };

        let face_buffer = vertex_buffer(
            "Face Vertex Buffer",
            MAX_FACE_VERTICES * std::mem::size_of::<MeshVertex>(),
        );
        let edge_buffer = vertex_buffer(
            "Edge Vertex Buffer",
            MAX_EDGE_VERTICES * std::mem::size_of::<MeshVertex>(),
        );
        let point_buffer = vertex_buffer(
            "Point Instance Buffer",
            MAX_POINT_INSTANCES * std::mem::size_of::<PointInstance>(),
        );

        Self {
            face_pipeline,
            edge_pipeline,
            point_pipeline,
            uniform_buffer,
            bind_group,
            face_buffer,
            edge_buffer,
            point_buffer,
            face_vertex_count: 0,
            edge_vertex_count: 0,
            point_count: 0,
        }
    }

    /// Update the shared per-frame uniforms
    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &FrameUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Upload this frame's primitive data, truncating at buffer capacity
    pub fn upload(
        &mut self,
        queue: &wgpu::Queue,
        faces: &[MeshVertex],
        edges: &[MeshVertex],
        points: &[PointInstance],
    ) {
        let faces = clamp_slice(faces, MAX_FACE_VERTICES, "face vertices");
        let edges = clamp_slice(edges, MAX_EDGE_VERTICES, "edge vertices");
        let points = clamp_slice(points, MAX_POINT_INSTANCES, "point instances");

        if !faces.is_empty() {
            queue.write_buffer(&self.face_buffer, 0, bytemuck::cast_slice(faces));
        }
        if !edges.is_empty() {
            queue.write_buffer(&self.edge_buffer, 0, bytemuck::cast_slice(edges));
        }
        if !points.is_empty() {
            queue.write_buffer(&self.point_buffer, 0, bytemuck::cast_slice(points));
        }

        self.face_vertex_count = faces.len() as u32;
        self.edge_vertex_count = edges.len() as u32;
        self.point_count = points.len() as u32;
    }

    /// Record the scene pass: clear, then faces, edges, points in order
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        color: &wgpu::TextureView,
        depth: &wgpu::TextureView,
        clear_color: wgpu::Color,
    ) -> DrawStats {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_bind_group(0, &self.bind_group, &[]);

        let mut stats = DrawStats::default();

        if self.face_vertex_count > 0 {
            pass.set_pipeline(&self.face_pipeline);
            pass.set_vertex_buffer(0, self.face_buffer.slice(..));
            pass.draw(0..self.face_vertex_count, 0..1);
            stats.triangles = self.face_vertex_count / 3;
            stats.draw_calls += 1;
        }

        if self.edge_vertex_count > 0 {
            pass.set_pipeline(&self.edge_pipeline);
            pass.set_vertex_buffer(0, self.edge_buffer.slice(..));
            pass.draw(0..self.edge_vertex_count, 0..1);
            stats.edges = self.edge_vertex_count / 2;
            stats.draw_calls += 1;
        }

        if self.point_count > 0 {
            pass.set_pipeline(&self.point_pipeline);
            pass.set_vertex_buffer(0, self.point_buffer.slice(..));
            pass.draw(0..6, 0..self.point_count);
            stats.points = self.point_count;
            stats.draw_calls += 1;
        }

        stats
    }
}

fn clamp_slice<'a, T>(slice: &'a [T], max: usize, what: &str) -> &'a [T] {
    if slice.len() > max {
        log::warn!("{} overflow: {} > {}, truncating", what, slice.len(), max);
        &slice[..max]
    } else {
        slice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_slice_passthrough() {
        let data = [1u32, 2, 3];
        assert_eq!(clamp_slice(&data, 8, "test").len(), 3);
    }

    #[test]
    fn test_clamp_slice_truncates() {
        let data = [1u32, 2, 3, 4];
        assert_eq!(clamp_slice(&data, 2, "test"), &[1, 2]);
    }

    #[test]
    fn test_draw_stats_default_zero() {
        assert_eq!(DrawStats::default().draw_calls, 0);
    }
}
