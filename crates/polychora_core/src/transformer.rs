//! Audio-reactive transform
//!
//! Maps the six telemetry scalars to a uniform scale, per-plane rotation
//! speeds and a transient translation, and applies the composed transform to
//! a polytope's canonical geometry each tick.
//!
//! Each rotation plane is deliberately bound to one musical feature rather
//! than a generic formula, so the motion tracks the sound: pitch drives the
//! zw tumble, brightness the familiar xy spin, harmonic richness the two
//! remaining ana-kata planes. The xz and yz planes are not audio-driven and
//! keep their default speeds as a base tumble.

use polychora_math::{Mat4, RotationPlane, Vec4};

use crate::{AudioParams, Polytope};

/// Default speed for the xz plane (rad/s), not audio-driven
const DEFAULT_XZ_SPEED: f32 = 0.2;
/// Default speed for the yz plane (rad/s), not audio-driven
const DEFAULT_YZ_SPEED: f32 = 0.15;
/// Per-tick exponential decay applied to translation while no attack drives it
const TRANSLATION_DECAY: f32 = 0.95;
/// Attacks sharper than this kick the translation oscillator
const ATTACK_THRESHOLD: f32 = 0.5;
/// Time scale of the attack oscillator
const ATTACK_RATE: f32 = 4.0;

/// Per-instance audio-reactive transform state.
///
/// Rotation accumulates phase (speed × dt per tick); the rotation matrix is
/// rebuilt from identity every tick at the accumulated phases and applied to
/// freshly regenerated canonical geometry, so floating-point error never
/// compounds frame over frame.
#[derive(Clone, Debug)]
pub struct ReactiveTransform {
    /// Rotation speed per plane in rad/s, indexed by `RotationPlane::index()`
    speeds: [f32; 6],
    /// Accumulated rotation phase per plane in radians
    phases: [f32; 6],
    scale: Vec4,
    translation: Vec4,
    rotation: Mat4,
    elapsed: f32,
}

impl Default for ReactiveTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl ReactiveTransform {
    pub fn new() -> Self {
        let mut speeds = [0.0; 6];
        speeds[RotationPlane::XZ.index()] = DEFAULT_XZ_SPEED;
        speeds[RotationPlane::YZ.index()] = DEFAULT_YZ_SPEED;

        Self {
            speeds,
            phases: [0.0; 6],
            scale: Vec4::ONE,
            translation: Vec4::ZERO,
            rotation: Mat4::IDENTITY,
            elapsed: 0.0,
        }
    }

    /// Advance one tick: bind telemetry to speeds, accumulate phase, rebuild
    /// the rotation matrix, and update scale and translation.
    pub fn update(&mut self, params: &AudioParams, dt: f32) {
        self.elapsed += dt;

        // Uniform breathing scale from output level
        self.scale = Vec4::splat(1.0 + params.amplitude * 0.5);

        // Feature-to-plane bindings
        self.speeds[RotationPlane::ZW.index()] =
            params.frequency / AudioParams::REFERENCE_FREQUENCY;
        self.speeds[RotationPlane::XY.index()] = params.spectral_centroid * 2.0;
        self.speeds[RotationPlane::XW.index()] = params.harmonic_content * 1.5;
        self.speeds[RotationPlane::YW.index()] = params.harmonic_content * 1.2;

        for i in 0..6 {
            self.phases[i] += self.speeds[i] * dt;
        }

        // Rebuild from identity at the accumulated phases, fixed plane order
        let mut rotation = Mat4::IDENTITY;
        for plane in RotationPlane::ALL {
            rotation = rotation * Mat4::rotation(plane, self.phases[plane.index()]);
        }
        self.rotation = rotation;

        // Sharp attacks kick an oscillating x/y offset; otherwise the
        // translation settles back toward zero
        if params.attack_sharpness > ATTACK_THRESHOLD {
            let t = self.elapsed * ATTACK_RATE;
            self.translation = Vec4::new(
                t.sin() * params.attack_sharpness,
                t.cos() * params.attack_sharpness,
                0.0,
                0.0,
            );
        } else {
            self.translation *= TRANSLATION_DECAY;
        }
    }

    /// Deform a canonically-reset polytope: scale, then rotate, then
    /// translate. The order is fixed; reordering changes the visuals.
    pub fn apply(&self, polytope: &mut Polytope) {
        for v in polytope.vertices.iter_mut() {
            let scaled = v.component_mul(self.scale);
            *v = self.rotation.transform_point(scaled) + self.translation;
        }
        // Normals only rotate
        for face in polytope.faces.iter_mut() {
            face.normal = self.rotation.transform_point(face.normal);
        }
    }

    #[inline]
    pub fn plane_speed(&self, plane: RotationPlane) -> f32 {
        self.speeds[plane.index()]
    }

    #[inline]
    pub fn plane_phase(&self, plane: RotationPlane) -> f32 {
        self.phases[plane.index()]
    }

    #[inline]
    pub fn scale(&self) -> Vec4 {
        self.scale
    }

    #[inline]
    pub fn translation(&self) -> Vec4 {
        self.translation
    }

    #[inline]
    pub fn rotation(&self) -> Mat4 {
        self.rotation
    }
}
