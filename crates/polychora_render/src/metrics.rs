//! Frame metrics and the quality governor
//!
//! Pure CPU state: the rolling frame-time window, the FPS derivation, and
//! the negative-feedback policy that trades visual fidelity for frame time
//! when the rolling average runs over budget.

use polychora_core::RenderConfig;

/// Default frame budget for a 60 FPS target, in milliseconds
pub const DEFAULT_FRAME_BUDGET_MS: f32 = 16.67;

/// Per-step decay applied to face opacity while over budget
const FACE_OPACITY_DECAY: f32 = 0.9;
/// Per-step decay applied to edge thickness while over budget
const EDGE_THICKNESS_DECAY: f32 = 0.95;
/// Governor floors; primitives are dimmed, never disabled outright
const MIN_FACE_OPACITY: f32 = 0.02;
const MIN_EDGE_THICKNESS: f32 = 0.05;

/// Read-only per-frame render statistics for the introspection surface
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderMetrics {
    /// Derived from the rolling average frame time
    pub fps: f32,
    /// Rolling average over the last 60 frames, milliseconds
    pub frame_time_ms: f32,
    /// Most recent frame, milliseconds
    pub last_frame_ms: f32,
    /// Point instances submitted this frame
    pub vertices: u32,
    /// Line segments submitted this frame
    pub edges: u32,
    /// Triangles submitted this frame
    pub triangles: u32,
    /// Draw calls recorded this frame
    pub draw_calls: u32,
}

/// Frames in the rolling average window
const WINDOW: usize = 60;

/// Rolling window of recent frame times
#[derive(Clone, Debug)]
pub struct FrameTimer {
    samples: [f32; WINDOW],
    len: usize,
    head: usize,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    /// Window size in frames
    pub const WINDOW: usize = WINDOW;

    pub fn new() -> Self {
        Self {
            samples: [0.0; WINDOW],
            len: 0,
            head: 0,
        }
    }

    /// Record one frame time in milliseconds
    pub fn push(&mut self, frame_ms: f32) {
        self.samples[self.head] = frame_ms;
        self.head = (self.head + 1) % WINDOW;
        self.len = (self.len + 1).min(WINDOW);
    }

    /// Rolling average over the recorded window
    pub fn average_ms(&self) -> f32 {
        if self.len == 0 {
            return 0.0;
        }
        self.samples[..self.len].iter().sum::<f32>() / self.len as f32
    }

    /// FPS derived from the rolling average
    pub fn fps(&self) -> f32 {
        let avg = self.average_ms();
        if avg > 0.0 {
            1000.0 / avg
        } else {
            0.0
        }
    }

    /// Number of samples currently in the window
    pub fn sample_count(&self) -> usize {
        self.len
    }
}

/// Negative-feedback quality policy.
///
/// While the rolling average frame time exceeds the budget, each frame
/// applies one decay step to the active config's face opacity and edge
/// thickness. Not a hard cutoff: primitives stay enabled and the decay
/// bottoms out at a visible floor.
#[derive(Clone, Copy, Debug)]
pub struct QualityGovernor {
    pub budget_ms: f32,
}

impl Default for QualityGovernor {
    fn default() -> Self {
        Self {
            budget_ms: DEFAULT_FRAME_BUDGET_MS,
        }
    }
}

impl QualityGovernor {
    pub fn new(budget_ms: f32) -> Self {
        Self { budget_ms }
    }

    /// Apply one reduction step if `average_ms` is over budget.
    /// Returns whether a reduction happened.
    pub fn regulate(&self, average_ms: f32, config: &mut RenderConfig) -> bool {
        if average_ms <= self.budget_ms {
            return false;
        }

        config.face_opacity = (config.face_opacity * FACE_OPACITY_DECAY).max(MIN_FACE_OPACITY);
        config.edge_thickness =
            (config.edge_thickness * EDGE_THICKNESS_DECAY).max(MIN_EDGE_THICKNESS);

        log::debug!(
            "quality governor: {:.2}ms avg over {:.2}ms budget, face_opacity={:.3} edge_thickness={:.3}",
            average_ms,
            self.budget_ms,
            config.face_opacity,
            config.edge_thickness
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_empty() {
        let timer = FrameTimer::new();
        assert_eq!(timer.average_ms(), 0.0);
        assert_eq!(timer.fps(), 0.0);
    }

    #[test]
    fn test_timer_average() {
        let mut timer = FrameTimer::new();
        timer.push(10.0);
        timer.push(20.0);
        assert!((timer.average_ms() - 15.0).abs() < 1e-5);
    }

    #[test]
    fn test_timer_window_rolls() {
        let mut timer = FrameTimer::new();
        // Fill the window with slow frames, then overwrite with fast ones
        for _ in 0..FrameTimer::WINDOW {
            timer.push(30.0);
        }
        for _ in 0..FrameTimer::WINDOW {
            timer.push(10.0);
        }
        assert!((timer.average_ms() - 10.0).abs() < 1e-4);
        assert_eq!(timer.sample_count(), FrameTimer::WINDOW);
    }

    #[test]
    fn test_timer_fps() {
        let mut timer = FrameTimer::new();
        for _ in 0..10 {
            timer.push(16.666667);
        }
        assert!((timer.fps() - 60.0).abs() < 0.01);
    }

    #[test]
    fn test_governor_no_op_under_budget() {
        let governor = QualityGovernor::default();
        let mut config = RenderConfig::default();
        let before = config;
        assert!(!governor.regulate(10.0, &mut config));
        assert_eq!(config, before);
    }

    #[test]
    fn test_governor_reduces_when_sustained_over_budget() {
        // Sustained 25ms frames against a 16.67ms budget must trigger
        // at least one reduction step
        let governor = QualityGovernor::default();
        let mut timer = FrameTimer::new();
        for _ in 0..60 {
            timer.push(25.0);
        }

        let mut config = RenderConfig::default();
        let face_before = config.face_opacity;
        let edge_before = config.edge_thickness;

        assert!(governor.regulate(timer.average_ms(), &mut config));
        assert!(config.face_opacity < face_before);
        assert!(config.edge_thickness < edge_before);
        assert!((config.face_opacity - face_before * 0.9).abs() < 1e-6);
        assert!((config.edge_thickness - edge_before * 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_governor_floors_never_reach_zero() {
        let governor = QualityGovernor::default();
        let mut config = RenderConfig::default();
        for _ in 0..10_000 {
            governor.regulate(100.0, &mut config);
        }
        assert!(config.face_opacity >= MIN_FACE_OPACITY);
        assert!(config.edge_thickness >= MIN_EDGE_THICKNESS);
    }
}
