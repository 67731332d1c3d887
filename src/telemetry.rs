//! Telemetry boundary to the synthesis engine
//!
//! The synthesizer is an external collaborator; the engine pulls one
//! [`AudioParams`] snapshot per tick through this trait. Implementations
//! must not block - the render loop never waits on the audio thread, so a
//! source should hand back its latest pre-computed snapshot.

use std::time::Instant;

use polychora_core::AudioParams;

/// Non-blocking snapshot getter, polled once per animation tick
pub trait TelemetrySource {
    fn sample(&self) -> AudioParams;
}

/// Fixed snapshot; for tests and headless runs
pub struct StaticTelemetry {
    params: AudioParams,
}

impl StaticTelemetry {
    pub fn new(params: AudioParams) -> Self {
        Self { params }
    }

    /// Silence at concert pitch
    pub fn silent() -> Self {
        Self::new(AudioParams::default())
    }
}

impl TelemetrySource for StaticTelemetry {
    fn sample(&self) -> AudioParams {
        self.params
    }
}

/// Deterministic low-frequency sweep standing in for a live synthesis
/// engine, so the demo binary has something to react to.
pub struct DemoTelemetry {
    start: Instant,
}

impl DemoTelemetry {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for DemoTelemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetrySource for DemoTelemetry {
    fn sample(&self) -> AudioParams {
        let t = self.start.elapsed().as_secs_f32();
        AudioParams {
            amplitude: 0.55 + 0.35 * (t * 0.9).sin(),
            // One octave sweep centered on A4
            frequency: 440.0 * 2.0f32.powf((t * 0.25).sin()),
            spectral_centroid: 0.5 + 0.4 * (t * 0.33).sin(),
            harmonic_content: 0.5 + 0.45 * (t * 0.21 + 1.0).sin(),
            // Brief periodic spikes past the transformer's attack threshold
            attack_sharpness: (t * 1.7).sin().max(0.0).powi(6),
            rhythm_intensity: 0.5 + 0.5 * (t * 2.0).sin(),
        }
    }
}
