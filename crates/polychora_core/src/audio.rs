//! Audio telemetry snapshot
//!
//! The synthesis engine is an external collaborator; the only thing that
//! crosses the boundary is this fixed-field snapshot, pulled once per tick
//! and replaced wholesale. Values are validated here, once, so nothing
//! downstream has to defend against NaN or out-of-range telemetry.

use serde::{Deserialize, Serialize};

/// One snapshot of synthesis-engine analysis values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioParams {
    /// Output level, [0, ∞) but typically 0-1
    pub amplitude: f32,
    /// Dominant frequency in Hz
    pub frequency: f32,
    /// Spectral centroid, normalized to [0, 1]
    pub spectral_centroid: f32,
    /// Harmonic content, [0, 1]
    pub harmonic_content: f32,
    /// Attack sharpness of the current envelope, [0, 1]
    pub attack_sharpness: f32,
    /// Rhythm intensity, [0, ∞) but typically 0-1
    pub rhythm_intensity: f32,
}

impl Default for AudioParams {
    /// Silence at concert pitch
    fn default() -> Self {
        Self {
            amplitude: 0.0,
            frequency: Self::REFERENCE_FREQUENCY,
            spectral_centroid: 0.0,
            harmonic_content: 0.0,
            attack_sharpness: 0.0,
            rhythm_intensity: 0.0,
        }
    }
}

impl AudioParams {
    /// A4, the reference pitch for the zw rotation binding
    pub const REFERENCE_FREQUENCY: f32 = 440.0;

    /// Validate a snapshot at the collaborator boundary.
    ///
    /// Non-finite fields fall back to their silent defaults, unit-range
    /// fields are clamped to [0, 1] and open-ended fields to [0, ∞). Stale
    /// or zeroed telemetry passes through unchanged.
    pub fn sanitized(self) -> Self {
        let finite_or = |v: f32, fallback: f32| if v.is_finite() { v } else { fallback };

        Self {
            amplitude: finite_or(self.amplitude, 0.0).max(0.0),
            frequency: finite_or(self.frequency, Self::REFERENCE_FREQUENCY).max(0.0),
            spectral_centroid: finite_or(self.spectral_centroid, 0.0).clamp(0.0, 1.0),
            harmonic_content: finite_or(self.harmonic_content, 0.0).clamp(0.0, 1.0),
            attack_sharpness: finite_or(self.attack_sharpness, 0.0).clamp(0.0, 1.0),
            rhythm_intensity: finite_or(self.rhythm_intensity, 0.0).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_silent() {
        let p = AudioParams::default();
        assert_eq!(p.amplitude, 0.0);
        assert_eq!(p.frequency, 440.0);
        assert_eq!(p.attack_sharpness, 0.0);
    }

    #[test]
    fn test_sanitized_passes_normal_values() {
        let p = AudioParams {
            amplitude: 0.8,
            frequency: 523.25,
            spectral_centroid: 0.4,
            harmonic_content: 0.6,
            attack_sharpness: 0.2,
            rhythm_intensity: 0.9,
        };
        assert_eq!(p.sanitized(), p);
    }

    #[test]
    fn test_sanitized_replaces_non_finite() {
        let p = AudioParams {
            amplitude: f32::NAN,
            frequency: f32::INFINITY,
            spectral_centroid: f32::NEG_INFINITY,
            harmonic_content: f32::NAN,
            attack_sharpness: 0.5,
            rhythm_intensity: f32::NAN,
        };
        let s = p.sanitized();
        assert_eq!(s.amplitude, 0.0);
        assert_eq!(s.frequency, 440.0);
        assert_eq!(s.spectral_centroid, 0.0);
        assert_eq!(s.harmonic_content, 0.0);
        assert_eq!(s.attack_sharpness, 0.5);
        assert_eq!(s.rhythm_intensity, 0.0);
    }

    #[test]
    fn test_sanitized_clamps_ranges() {
        let p = AudioParams {
            amplitude: -1.0,
            frequency: -20.0,
            spectral_centroid: 2.5,
            harmonic_content: -0.5,
            attack_sharpness: 7.0,
            rhythm_intensity: -3.0,
        };
        let s = p.sanitized();
        assert_eq!(s.amplitude, 0.0);
        assert_eq!(s.frequency, 0.0);
        assert_eq!(s.spectral_centroid, 1.0);
        assert_eq!(s.harmonic_content, 0.0);
        assert_eq!(s.attack_sharpness, 1.0);
        assert_eq!(s.rhythm_intensity, 0.0);
    }
}
