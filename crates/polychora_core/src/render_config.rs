//! Per-instance visual policy

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Which primitive passes and post effects run for an instance
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PassFlags: u8 {
        /// Draw vertices as sized points
        const VERTICES = 1 << 0;
        /// Draw edges as lines
        const EDGES = 1 << 1;
        /// Draw translucent faces
        const FACES = 1 << 2;
        /// Run the holographic post-process (chromatic aberration + interference)
        const HOLOGRAPHIC = 1 << 3;
        /// Add the amplitude-scaled glow term in the composite pass
        const DEPTH_GLOW = 1 << 4;
    }
}

/// Visual policy for one instance, applied fresh on every render call.
///
/// Replaced wholesale on preset switch, never partially mutated mid-frame;
/// single-threaded tick ownership makes that safe without locks. The quality
/// governor lowers `face_opacity` and `edge_thickness` when frame time runs
/// over budget.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub passes: PassFlags,
    /// Base point size in pixels, before the amplitude boost
    pub vertex_size: f32,
    /// Edge weight; on WebGPU lines are a fixed pixel wide, so this scales
    /// edge brightness rather than geometric width
    pub edge_thickness: f32,
    /// Face translucency, 0-1
    pub face_opacity: f32,
    pub vertex_color: [f32; 4],
    pub edge_color: [f32; 4],
    pub face_color: [f32; 4],
    /// Chromatic aberration strength in the holographic pass
    pub chromatic_aberration: f32,
    /// Interference-pattern strength in the holographic pass
    pub interference: f32,
    /// Glow strength in the composite pass (active with DEPTH_GLOW)
    pub glow_strength: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            passes: PassFlags::VERTICES | PassFlags::EDGES | PassFlags::FACES,
            vertex_size: 6.0,
            edge_thickness: 1.0,
            face_opacity: 0.25,
            vertex_color: [0.95, 0.95, 1.0, 1.0],
            edge_color: [0.3, 0.85, 1.0, 1.0],
            face_color: [0.15, 0.5, 0.9, 1.0],
            chromatic_aberration: 0.0,
            interference: 0.0,
            glow_strength: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draws_primitives_without_post() {
        let c = RenderConfig::default();
        assert!(c.passes.contains(PassFlags::VERTICES));
        assert!(c.passes.contains(PassFlags::EDGES));
        assert!(c.passes.contains(PassFlags::FACES));
        assert!(!c.passes.contains(PassFlags::HOLOGRAPHIC));
        assert!(!c.passes.contains(PassFlags::DEPTH_GLOW));
    }

    #[test]
    fn test_flags_compose() {
        let flags = PassFlags::EDGES | PassFlags::HOLOGRAPHIC;
        assert!(flags.contains(PassFlags::EDGES));
        assert!(!flags.contains(PassFlags::FACES));
    }
}
