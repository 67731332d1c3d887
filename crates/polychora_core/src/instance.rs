//! Active polytope instances
//!
//! An instance binds one polytope to its audio-reactive transform and render
//! configuration. The engine owns a small named set of these ("primary",
//! "secondary", ...) and ticks the enabled ones each frame.

use crate::{AudioParams, Polytope, PolytopeKind, ReactiveTransform, RenderConfig};

/// One named polytope with its per-instance state
#[derive(Clone, Debug)]
pub struct Instance {
    name: String,
    pub polytope: Polytope,
    pub transform: ReactiveTransform,
    pub config: RenderConfig,
    pub enabled: bool,
    /// Whole-instance opacity multiplier, 0-1
    pub opacity: f32,
    /// Whole-instance zoom applied after the reactive transform
    pub scale: f32,
}

impl Instance {
    pub fn new(name: impl Into<String>, kind: PolytopeKind) -> Self {
        Self {
            name: name.into(),
            polytope: Polytope::new(kind),
            transform: ReactiveTransform::new(),
            config: RenderConfig::default(),
            enabled: false,
            opacity: 1.0,
            scale: 1.0,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Swap the polytope for a different solid; transform state carries over
    pub fn set_kind(&mut self, kind: PolytopeKind) {
        if self.polytope.kind() != kind {
            log::debug!("instance '{}' now renders a {}", self.name, kind.name());
            self.polytope = Polytope::new(kind);
        }
    }

    /// One animation tick: reset to the canonical shape, advance the
    /// transform from this tick's telemetry, and deform the fresh geometry.
    pub fn tick(&mut self, params: &AudioParams, dt: f32) {
        self.polytope.generate_geometry();
        self.transform.update(params, dt);
        self.transform.apply(&mut self.polytope);

        if self.scale != 1.0 {
            for v in self.polytope.vertices.iter_mut() {
                *v = *v * self.scale;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_instance_disabled() {
        let inst = Instance::new("primary", PolytopeKind::Tesseract);
        assert_eq!(inst.name(), "primary");
        assert!(!inst.enabled);
        assert_eq!(inst.opacity, 1.0);
        assert_eq!(inst.polytope.vertex_count(), 16);
    }

    #[test]
    fn test_set_kind_regenerates() {
        let mut inst = Instance::new("primary", PolytopeKind::Tesseract);
        inst.set_kind(PolytopeKind::Cell24);
        assert_eq!(inst.polytope.kind(), PolytopeKind::Cell24);
        assert_eq!(inst.polytope.vertex_count(), 24);
    }

    #[test]
    fn test_set_same_kind_keeps_polytope() {
        let mut inst = Instance::new("primary", PolytopeKind::Cell16);
        inst.set_kind(PolytopeKind::Cell16);
        assert_eq!(inst.polytope.vertex_count(), 8);
    }

    #[test]
    fn test_tick_starts_from_canonical() {
        // Two identical ticks from identical transform state produce the
        // same geometry only because each starts from the canonical shape;
        // verify a tick does not compound on the previous one's output.
        let mut a = Instance::new("a", PolytopeKind::Tesseract);
        let mut b = Instance::new("b", PolytopeKind::Tesseract);
        let params = AudioParams::default();

        a.tick(&params, 1.0 / 60.0);

        // b takes the same single tick; a takes a second tick with dt=0,
        // which leaves its accumulated phases untouched
        b.tick(&params, 1.0 / 60.0);
        a.tick(&params, 0.0);

        for (va, vb) in a.polytope.vertices.iter().zip(b.polytope.vertices.iter()) {
            assert!((*va - *vb).length() < 1e-5, "{:?} vs {:?}", va, vb);
        }
    }

    #[test]
    fn test_instance_scale_applies() {
        let mut inst = Instance::new("primary", PolytopeKind::Cell16);
        inst.scale = 2.0;
        inst.tick(&AudioParams::default(), 0.0);
        // Canonical 16-cell vertices are unit length; scaled they are 2
        let max_len = inst
            .polytope
            .vertices
            .iter()
            .map(|v| v.length())
            .fold(0.0f32, f32::max);
        assert!((max_len - 2.0).abs() < 1e-4, "max length {}", max_len);
    }
}
