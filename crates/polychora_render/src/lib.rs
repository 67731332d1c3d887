//! GPU rendering for the Polychora visualizer
//!
//! This crate provides the wgpu-based multi-pass pipeline that draws
//! transformed polytopes with holographic post-effects.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - device, queue, and surface management
//! - [`targets::RenderTargets`] - the off-screen color/depth targets
//! - [`pipeline::GeometryPipelines`] - face/edge/point draw passes
//! - [`pipeline::PostPipelines`] - holographic and composite passes
//! - [`renderer::Renderer`] - the per-frame orchestration and quality governor
//! - [`metrics`] - frame timing, rolling FPS, and the degradation policy

pub mod camera;
pub mod context;
pub mod metrics;
pub mod pipeline;
pub mod renderer;
pub mod targets;

// Re-export core types for convenience
pub use polychora_core::{
    AudioParams, Instance, PassFlags, Polytope, PolytopeKind, RenderConfig,
};
pub use polychora_math::{Vec3, Vec4, Viewport};

pub use context::{RenderContext, RenderInitError};
pub use metrics::{FrameTimer, QualityGovernor, RenderMetrics};
pub use renderer::{ProjectionSettings, RenderError, Renderer};
