//! Visualization engine
//!
//! The orchestrator: owns the named instance set, the telemetry boundary,
//! and the preset table. One `advance` call per animation tick pulls a
//! sanitized telemetry snapshot and runs canonical-reset -> transform on
//! every enabled instance; the windowed app then hands the render list to
//! the renderer. The engine is an explicitly constructed value passed to
//! whatever owns the loop - there is no global accessor.

use polychora_core::{AudioParams, Instance, PolytopeKind, RenderConfig};
use polychora_render::RenderMetrics;

use crate::presets::{builtin_presets, Preset};
use crate::telemetry::TelemetrySource;

/// Slot names for the instance set
pub const PRIMARY: &str = "primary";
pub const SECONDARY: &str = "secondary";
pub const TERTIARY: &str = "tertiary";

/// Per-instance line in the engine summary
#[derive(Clone, Debug)]
pub struct InstanceSummary {
    pub name: String,
    pub polytope: &'static str,
    pub enabled: bool,
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,
}

/// Read-only snapshot for host UIs; a polling surface, not an event stream
#[derive(Clone, Debug)]
pub struct EngineSummary {
    pub instances: Vec<InstanceSummary>,
    pub primary: String,
    pub preset: String,
    pub last_params: AudioParams,
    pub metrics: RenderMetrics,
}

/// Owns the instances and drives one update per animation tick
pub struct VisualizationEngine {
    instances: Vec<Instance>,
    /// Index of the primary instance in `instances`
    primary: usize,
    presets: Vec<Preset>,
    active_preset: usize,
    telemetry: Box<dyn TelemetrySource>,
    last_params: AudioParams,
    metrics: RenderMetrics,
    elapsed: f32,
}

impl VisualizationEngine {
    /// Create the engine with the built-in preset table and the standard
    /// three-slot instance set. The first preset is active.
    pub fn new(telemetry: Box<dyn TelemetrySource>) -> Self {
        let instances = vec![
            Instance::new(PRIMARY, PolytopeKind::Tesseract),
            Instance::new(SECONDARY, PolytopeKind::Cell16),
            Instance::new(TERTIARY, PolytopeKind::Cell24),
        ];

        let mut engine = Self {
            instances,
            primary: 0,
            presets: builtin_presets(),
            active_preset: 0,
            telemetry,
            last_params: AudioParams::default(),
            metrics: RenderMetrics::default(),
            elapsed: 0.0,
        };
        engine.apply_preset(0);
        engine
    }

    /// Select a starting preset by name; unknown names keep the default
    pub fn with_preset(mut self, name: &str) -> Self {
        self.set_preset_by_name(name);
        self
    }

    /// One tick: pull and sanitize telemetry, then canonical-reset and
    /// re-transform every enabled instance.
    pub fn advance(&mut self, dt: f32) {
        let params = self.telemetry.sample().sanitized();
        self.elapsed += dt;

        for instance in self.instances.iter_mut().filter(|i| i.enabled) {
            instance.tick(&params, dt);
        }

        self.last_params = params;
    }

    /// Seconds of animation time accumulated so far
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    fn apply_preset(&mut self, index: usize) {
        let preset = self.presets[index].clone();
        self.active_preset = index;

        // The preset binds to the primary slot: polytope kind and config are
        // replaced wholesale in one step
        let primary = self.primary;
        self.instances[primary].set_kind(preset.kind);
        self.instances[primary].config = preset.config;

        // Exclusive visibility rule: multi-layer enables everything, any
        // other preset exactly the primary
        for (i, instance) in self.instances.iter_mut().enumerate() {
            instance.enabled = preset.multi_layer || i == primary;
        }

        log::info!("preset '{}' active ({})", preset.name, preset.kind.name());
    }

    /// Switch preset by index; out-of-range is a no-op
    pub fn set_preset(&mut self, index: usize) {
        if index < self.presets.len() {
            self.apply_preset(index);
        } else {
            log::debug!("ignoring unknown preset index {}", index);
        }
    }

    /// Switch preset by name; unknown names are a no-op
    pub fn set_preset_by_name(&mut self, name: &str) {
        match self.presets.iter().position(|p| p.name == name) {
            Some(index) => self.apply_preset(index),
            None => log::debug!("ignoring unknown preset '{}'", name),
        }
    }

    /// Step to the next preset, wrapping around
    pub fn cycle_preset(&mut self) {
        let next = (self.active_preset + 1) % self.presets.len();
        self.apply_preset(next);
    }

    pub fn preset_name(&self) -> &str {
        self.presets[self.active_preset].name
    }

    pub fn preset_names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name).collect()
    }

    /// Enabled instances in draw order, primary last so it renders on top
    /// and its config drives the post passes.
    pub fn render_list(&self) -> Vec<&Instance> {
        let mut list: Vec<&Instance> = self
            .instances
            .iter()
            .enumerate()
            .filter(|(i, inst)| inst.enabled && *i != self.primary)
            .map(|(_, inst)| inst)
            .collect();
        if self.instances[self.primary].enabled {
            list.push(&self.instances[self.primary]);
        }
        list
    }

    pub fn primary(&self) -> &Instance {
        &self.instances[self.primary]
    }

    /// Mutable access to the primary's config, e.g. for the quality governor
    pub fn primary_config_mut(&mut self) -> &mut RenderConfig {
        &mut self.instances[self.primary].config
    }

    pub fn instance(&self, name: &str) -> Option<&Instance> {
        self.instances.iter().find(|i| i.name() == name)
    }

    fn instance_mut(&mut self, name: &str) -> Option<&mut Instance> {
        self.instances.iter_mut().find(|i| i.name() == name)
    }

    /// Enable or disable an instance; unknown names are a no-op
    pub fn set_instance_enabled(&mut self, name: &str, enabled: bool) {
        match self.instance_mut(name) {
            Some(instance) => instance.enabled = enabled,
            None => log::debug!("ignoring unknown instance '{}'", name),
        }
    }

    /// Set an instance's opacity; unknown names are a no-op
    pub fn set_instance_opacity(&mut self, name: &str, opacity: f32) {
        match self.instance_mut(name) {
            Some(instance) => instance.opacity = opacity.clamp(0.0, 1.0),
            None => log::debug!("ignoring unknown instance '{}'", name),
        }
    }

    /// Set an instance's zoom; unknown names are a no-op
    pub fn set_instance_scale(&mut self, name: &str, scale: f32) {
        match self.instance_mut(name) {
            Some(instance) => instance.scale = scale.max(0.0),
            None => log::debug!("ignoring unknown instance '{}'", name),
        }
    }

    /// Replace an instance's render config wholesale; unknown names no-op
    pub fn replace_config(&mut self, name: &str, config: RenderConfig) {
        match self.instance_mut(name) {
            Some(instance) => instance.config = config,
            None => log::debug!("ignoring unknown instance '{}'", name),
        }
    }

    /// Store the renderer's metrics for the introspection surface
    pub fn record_metrics(&mut self, metrics: RenderMetrics) {
        self.metrics = metrics;
    }

    /// The last telemetry snapshot consumed
    pub fn last_params(&self) -> AudioParams {
        self.last_params
    }

    /// Read-only state summary for the host UI
    pub fn summary(&self) -> EngineSummary {
        EngineSummary {
            instances: self
                .instances
                .iter()
                .map(|i| InstanceSummary {
                    name: i.name().to_string(),
                    polytope: i.polytope.kind().name(),
                    enabled: i.enabled,
                    vertices: i.polytope.vertex_count(),
                    edges: i.polytope.edge_count(),
                    faces: i.polytope.face_count(),
                })
                .collect(),
            primary: self.instances[self.primary].name().to_string(),
            preset: self.preset_name().to_string(),
            last_params: self.last_params,
            metrics: self.metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::StaticTelemetry;
    use polychora_core::PassFlags;

    fn test_engine() -> VisualizationEngine {
        VisualizationEngine::new(Box::new(StaticTelemetry::silent()))
    }

    #[test]
    fn test_new_engine_shows_only_primary() {
        let engine = test_engine();
        let list = engine.render_list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name(), PRIMARY);
    }

    #[test]
    fn test_multi_layer_enables_all() {
        let mut engine = test_engine();
        engine.set_preset_by_name("multi-layer");
        let list = engine.render_list();
        assert_eq!(list.len(), 3);
        // Primary draws last
        assert_eq!(list[2].name(), PRIMARY);
    }

    #[test]
    fn test_leaving_multi_layer_is_exclusive() {
        let mut engine = test_engine();
        engine.set_preset_by_name("multi-layer");
        engine.set_preset_by_name("wireframe");
        let list = engine.render_list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name(), PRIMARY);
        assert!(!engine.instance(SECONDARY).unwrap().enabled);
        assert!(!engine.instance(TERTIARY).unwrap().enabled);
    }

    #[test]
    fn test_preset_replaces_config_and_kind() {
        let mut engine = test_engine();
        engine.set_preset_by_name("crystal");
        assert_eq!(engine.preset_name(), "crystal");
        assert_eq!(engine.primary().polytope.kind(), PolytopeKind::Cell16);
        assert!(engine.primary().config.passes.contains(PassFlags::FACES));
        assert!(!engine.primary().config.passes.contains(PassFlags::VERTICES));
    }

    #[test]
    fn test_unknown_preset_is_noop() {
        let mut engine = test_engine();
        let before = engine.preset_name().to_string();
        engine.set_preset_by_name("no-such-preset");
        engine.set_preset(999);
        assert_eq!(engine.preset_name(), before);
    }

    #[test]
    fn test_unknown_instance_setters_are_noop() {
        let mut engine = test_engine();
        engine.set_instance_enabled("no-such-slot", true);
        engine.set_instance_opacity("no-such-slot", 0.5);
        engine.set_instance_scale("no-such-slot", 2.0);
        engine.replace_config("no-such-slot", RenderConfig::default());
        // State is unchanged and detectable by re-query
        assert!(engine.instance("no-such-slot").is_none());
        assert_eq!(engine.render_list().len(), 1);
    }

    #[test]
    fn test_advance_updates_enabled_only() {
        let mut engine = test_engine();
        engine.advance(1.0 / 60.0);
        // Disabled secondary keeps zero accumulated phase
        let secondary = engine.instance(SECONDARY).unwrap();
        assert_eq!(
            secondary
                .transform
                .plane_phase(polychora_core::RotationPlane::ZW),
            0.0
        );
        // Primary accumulated one tick
        let primary = engine.primary();
        assert!(primary.transform.plane_phase(polychora_core::RotationPlane::ZW) > 0.0);
    }

    #[test]
    fn test_summary_coherent() {
        let mut engine = test_engine();
        engine.set_preset_by_name("flux");
        engine.advance(1.0 / 60.0);

        let summary = engine.summary();
        let names: Vec<&str> = summary.instances.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec![PRIMARY, SECONDARY, TERTIARY]);
        assert_eq!(summary.primary, PRIMARY);
        assert_eq!(summary.preset, "flux");
        assert_eq!(summary.last_params, AudioParams::default());

        // Per-instance counts reflect the active solids
        let primary = &summary.instances[0];
        assert!(primary.enabled);
        assert_eq!(primary.polytope, "24-cell");
        assert_eq!((primary.vertices, primary.edges, primary.faces), (24, 96, 96));
    }

    #[test]
    fn test_cycle_preset_wraps() {
        let mut engine = test_engine();
        let count = engine.preset_names().len();
        let first = engine.preset_name().to_string();
        for _ in 0..count {
            engine.cycle_preset();
        }
        assert_eq!(engine.preset_name(), first);
    }

    #[test]
    fn test_opacity_clamped() {
        let mut engine = test_engine();
        engine.set_instance_opacity(PRIMARY, 3.0);
        assert_eq!(engine.primary().opacity, 1.0);
        engine.set_instance_opacity(PRIMARY, -1.0);
        assert_eq!(engine.primary().opacity, 0.0);
    }
}
