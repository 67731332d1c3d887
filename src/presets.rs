//! Built-in visual presets
//!
//! A preset names a polytope, a complete [`RenderConfig`] that replaces the
//! primary instance's config wholesale, and whether it layers all instances.
//! Only the "multi-layer" preset enables the secondary instances; every
//! other preset shows exactly the primary.

use polychora_core::{PassFlags, PolytopeKind, RenderConfig};

/// One named visual preset
#[derive(Clone, Debug)]
pub struct Preset {
    pub name: &'static str,
    pub kind: PolytopeKind,
    pub config: RenderConfig,
    /// Enable all instances instead of just the primary
    pub multi_layer: bool,
}

/// The built-in preset table, in hotkey order
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "hologram",
            kind: PolytopeKind::Tesseract,
            config: RenderConfig {
                passes: PassFlags::VERTICES
                    | PassFlags::EDGES
                    | PassFlags::FACES
                    | PassFlags::HOLOGRAPHIC
                    | PassFlags::DEPTH_GLOW,
                vertex_size: 7.0,
                edge_thickness: 1.0,
                face_opacity: 0.22,
                vertex_color: [0.9, 1.0, 1.0, 1.0],
                edge_color: [0.25, 0.9, 1.0, 1.0],
                face_color: [0.1, 0.45, 0.9, 1.0],
                chromatic_aberration: 1.0,
                interference: 0.8,
                glow_strength: 0.6,
            },
            multi_layer: false,
        },
        Preset {
            name: "wireframe",
            kind: PolytopeKind::Tesseract,
            config: RenderConfig {
                passes: PassFlags::VERTICES | PassFlags::EDGES,
                vertex_size: 5.0,
                edge_thickness: 1.0,
                face_opacity: 0.0,
                vertex_color: [1.0, 1.0, 1.0, 1.0],
                edge_color: [0.6, 1.0, 0.7, 1.0],
                face_color: [0.0, 0.0, 0.0, 0.0],
                chromatic_aberration: 0.0,
                interference: 0.0,
                glow_strength: 0.0,
            },
            multi_layer: false,
        },
        Preset {
            name: "crystal",
            kind: PolytopeKind::Cell16,
            config: RenderConfig {
                passes: PassFlags::EDGES | PassFlags::FACES | PassFlags::DEPTH_GLOW,
                vertex_size: 4.0,
                edge_thickness: 0.8,
                face_opacity: 0.45,
                vertex_color: [1.0, 1.0, 1.0, 1.0],
                edge_color: [0.85, 0.95, 1.0, 1.0],
                face_color: [0.55, 0.75, 1.0, 1.0],
                chromatic_aberration: 0.0,
                interference: 0.0,
                glow_strength: 0.4,
            },
            multi_layer: false,
        },
        Preset {
            name: "flux",
            kind: PolytopeKind::Cell24,
            config: RenderConfig {
                passes: PassFlags::VERTICES | PassFlags::EDGES | PassFlags::HOLOGRAPHIC,
                vertex_size: 5.0,
                edge_thickness: 0.9,
                face_opacity: 0.0,
                vertex_color: [1.0, 0.85, 1.0, 1.0],
                edge_color: [0.95, 0.4, 0.9, 1.0],
                face_color: [0.5, 0.1, 0.6, 1.0],
                chromatic_aberration: 1.4,
                interference: 1.0,
                glow_strength: 0.0,
            },
            multi_layer: false,
        },
        Preset {
            name: "multi-layer",
            kind: PolytopeKind::Tesseract,
            config: RenderConfig {
                passes: PassFlags::VERTICES
                    | PassFlags::EDGES
                    | PassFlags::FACES
                    | PassFlags::HOLOGRAPHIC,
                vertex_size: 6.0,
                edge_thickness: 1.0,
                face_opacity: 0.15,
                vertex_color: [0.95, 0.95, 1.0, 1.0],
                edge_color: [0.3, 0.85, 1.0, 1.0],
                face_color: [0.15, 0.5, 0.9, 1.0],
                chromatic_aberration: 0.8,
                interference: 0.5,
                glow_strength: 0.0,
            },
            multi_layer: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names_unique() {
        let presets = builtin_presets();
        for (i, a) in presets.iter().enumerate() {
            for b in presets.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_exactly_one_multi_layer_preset() {
        let layered: Vec<_> = builtin_presets().into_iter().filter(|p| p.multi_layer).collect();
        assert_eq!(layered.len(), 1);
        assert_eq!(layered[0].name, "multi-layer");
    }

    #[test]
    fn test_wireframe_has_no_faces() {
        let presets = builtin_presets();
        let wireframe = presets.iter().find(|p| p.name == "wireframe").unwrap();
        assert!(!wireframe.config.passes.contains(PassFlags::FACES));
        assert!(wireframe.config.passes.contains(PassFlags::EDGES));
    }
}
