//! GPU-free integration tests for the tick pipeline
//!
//! Drives the engine the way the windowed app does - telemetry pull,
//! canonical reset, transform - and checks the invariants the renderer
//! relies on, without touching a device.

use polychora::telemetry::StaticTelemetry;
use polychora::{AudioParams, PassFlags, PolytopeKind, VisualizationEngine};
use polychora_core::RotationPlane;
use polychora_math::projection;

const DT: f32 = 1.0 / 60.0;

fn engine_with(params: AudioParams) -> VisualizationEngine {
    VisualizationEngine::new(Box::new(StaticTelemetry::new(params)))
}

#[test]
fn test_topology_stable_across_many_ticks() {
    let params = AudioParams {
        amplitude: 0.8,
        frequency: 660.0,
        spectral_centroid: 0.7,
        harmonic_content: 0.9,
        attack_sharpness: 0.6,
        rhythm_intensity: 1.0,
    };
    let mut engine = engine_with(params).with_preset("multi-layer");

    for _ in 0..120 {
        engine.advance(DT);
    }

    for (name, kind) in [
        ("primary", PolytopeKind::Tesseract),
        ("secondary", PolytopeKind::Cell16),
        ("tertiary", PolytopeKind::Cell24),
    ] {
        let instance = engine.instance(name).unwrap();
        let (v, e, f) = kind.canonical_counts();
        assert_eq!(instance.polytope.vertex_count(), v, "{} vertices", name);
        assert_eq!(instance.polytope.edge_count(), e, "{} edges", name);
        assert_eq!(instance.polytope.face_count(), f, "{} faces", name);
    }
}

#[test]
fn test_vertices_stay_finite_under_hostile_telemetry() {
    // The engine must tolerate any well-typed snapshot without producing
    // NaN geometry or panicking
    let params = AudioParams {
        amplitude: f32::NAN,
        frequency: f32::INFINITY,
        spectral_centroid: -5.0,
        harmonic_content: 99.0,
        attack_sharpness: f32::NAN,
        rhythm_intensity: f32::NEG_INFINITY,
    };
    let mut engine = engine_with(params);

    for _ in 0..60 {
        engine.advance(DT);
    }

    for v in &engine.primary().polytope.vertices {
        assert!(v.x.is_finite() && v.y.is_finite() && v.z.is_finite() && v.w.is_finite());
    }
}

#[test]
fn test_translation_settles_after_attack_stops() {
    let loud = AudioParams {
        attack_sharpness: 0.9,
        ..AudioParams::default()
    };
    let mut engine = engine_with(loud);
    engine.advance(DT);
    let kicked = engine.primary().transform.translation().length();
    assert!(kicked > 0.0, "attack should displace the polytope");

    // Swap to a quiet source by rebuilding the engine mid-state is not
    // possible; instead verify decay through the transform directly
    let mut transform = engine.primary().transform.clone();
    let quiet = AudioParams::default();
    let mut previous = kicked;
    for _ in 0..120 {
        transform.update(&quiet, DT);
        let current = transform.translation().length();
        assert!(current <= previous);
        previous = current;
    }
    assert!(previous < kicked * 0.01, "translation should settle toward zero");
}

#[test]
fn test_quantitative_single_tick_scenario() {
    // amplitude=0, frequency=440, centroid=0.5, harmonic=0.5, attack=0,
    // dt=1/60: scale 1.0, zw and xy tick angles both 1/60 rad
    let params = AudioParams {
        amplitude: 0.0,
        frequency: 440.0,
        spectral_centroid: 0.5,
        harmonic_content: 0.5,
        attack_sharpness: 0.0,
        rhythm_intensity: 0.0,
    };
    let mut engine = engine_with(params);
    engine.advance(DT);

    let transform = &engine.primary().transform;
    assert!((transform.scale().x - 1.0).abs() < 1e-6);
    assert!((transform.plane_phase(RotationPlane::ZW) - DT).abs() < 1e-6);
    assert!((transform.plane_phase(RotationPlane::XY) - DT).abs() < 1e-6);
}

#[test]
fn test_projection_tracks_transformed_geometry() {
    let mut engine = engine_with(AudioParams::default());
    engine.advance(DT);

    let polytope = &engine.primary().polytope;
    let projected = projection::project_polytope(&polytope.vertices, 3.0);
    assert_eq!(projected.len(), polytope.vertex_count());

    // Every edge endpoint must be resolvable in the projected array
    for edge in &polytope.edges {
        let a = projected[edge.a];
        let b = projected[edge.b];
        assert!(a.x.is_finite() && b.x.is_finite());
    }
}

#[test]
fn test_preset_switch_mid_run() {
    let mut engine = engine_with(AudioParams::default());
    for _ in 0..30 {
        engine.advance(DT);
    }

    engine.set_preset_by_name("flux");
    assert_eq!(engine.primary().polytope.kind(), PolytopeKind::Cell24);
    assert!(engine
        .primary()
        .config
        .passes
        .contains(PassFlags::HOLOGRAPHIC));

    // Keeps ticking cleanly on the new solid
    for _ in 0..30 {
        engine.advance(DT);
    }
    assert_eq!(engine.primary().polytope.vertex_count(), 24);
}

#[test]
fn test_summary_reflects_run_state() {
    let params = AudioParams {
        amplitude: 0.5,
        ..AudioParams::default()
    };
    let mut engine = engine_with(params);
    for _ in 0..10 {
        engine.advance(DT);
    }

    let summary = engine.summary();
    assert_eq!(summary.primary, "primary");
    assert_eq!(summary.last_params.amplitude, 0.5);
    assert_eq!(summary.instances.len(), 3);
}
