//! Core types for the Polychora visualizer
//!
//! This crate provides everything between raw math and the GPU:
//!
//! - [`Polytope`] - vertex/edge/face topology for the three regular 4D solids
//! - [`PolytopeKind`] - which solid an instance renders
//! - [`AudioParams`] - the per-tick synthesis telemetry snapshot
//! - [`ReactiveTransform`] - maps telemetry to scale/rotation/translation
//! - [`RenderConfig`] / [`PassFlags`] - per-instance visual policy
//! - [`Instance`] - one named polytope bound to its transform and config

mod audio;
mod cell16;
mod cell24;
mod instance;
mod polytope;
mod render_config;
mod tesseract;
mod transformer;

pub use audio::AudioParams;
pub use instance::Instance;
pub use polytope::{Edge, Face, Polytope, PolytopeKind};
pub use render_config::{PassFlags, RenderConfig};
pub use transformer::ReactiveTransform;

// Re-export commonly used math types for convenience
pub use polychora_math::{Mat4, RotationPlane, Vec3, Vec4};
