//! GPU pipelines for the multi-pass frame

mod geometry;
mod post;
pub mod types;

pub use geometry::{DrawStats, GeometryPipelines};
pub use post::PostPipelines;
pub use types::{FrameUniforms, MeshVertex, PointInstance, PostUniforms};
