//! GPU-compatible data types for the polytope pipelines
//!
//! These types match the WGSL struct layouts exactly. All derive Pod and
//! Zeroable for safe buffer upload.

use bytemuck::{Pod, Zeroable};

/// A projected 3D vertex with color, used for face triangles and edge lines
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl MeshVertex {
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// One polytope vertex rendered as a screen-aligned billboard quad
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct PointInstance {
    pub position: [f32; 3],
    /// Base size in pixels; the shader adds the amplitude boost
    pub size: f32,
    pub color: [f32; 4],
}

/// Per-frame uniforms shared by the face/edge/point passes
/// Layout: 96 bytes, must match geometry.wgsl
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FrameUniforms {
    /// Combined view and projection matrix (column-major)
    pub view_proj: [[f32; 4]; 4],
    /// Surface size in pixels
    pub resolution: [f32; 2],
    /// Seconds since engine start
    pub time: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub attack_sharpness: f32,
    pub _padding: [f32; 2],
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self {
            view_proj: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
            resolution: [1.0, 1.0],
            time: 0.0,
            amplitude: 0.0,
            frequency: 440.0,
            attack_sharpness: 0.0,
            _padding: [0.0; 2],
        }
    }
}

/// Uniforms for the holographic and composite passes
/// Layout: 32 bytes, must match holographic.wgsl / composite.wgsl
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct PostUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub amplitude: f32,
    pub attack_sharpness: f32,
    pub chromatic_aberration: f32,
    pub interference: f32,
    pub glow_strength: f32,
}

/// Capacity of the face vertex buffer (three instances of the largest solid
/// fan-triangulate far below this)
pub const MAX_FACE_VERTICES: usize = 4096;
/// Capacity of the edge vertex buffer
pub const MAX_EDGE_VERTICES: usize = 2048;
/// Capacity of the point instance buffer
pub const MAX_POINT_INSTANCES: usize = 256;
