//! Polychora - audio-reactive 4D polytope visualizer
//!
//! Renders a tesseract, 16-cell, or 24-cell through a 4D->3D->2D perspective
//! projection, continuously deformed by synthesis-engine telemetry. The
//! library surface is the [`VisualizationEngine`] orchestrator plus the
//! [`TelemetrySource`] boundary; the binary wires them to a winit window and
//! the wgpu renderer.

pub mod config;
pub mod engine;
pub mod presets;
pub mod telemetry;

pub use config::AppConfig;
pub use engine::{EngineSummary, InstanceSummary, VisualizationEngine};
pub use presets::Preset;
pub use telemetry::{DemoTelemetry, StaticTelemetry, TelemetrySource};

// Re-export the core vocabulary so hosts only need this crate
pub use polychora_core::{AudioParams, Instance, PassFlags, PolytopeKind, RenderConfig};
pub use polychora_render::RenderMetrics;
