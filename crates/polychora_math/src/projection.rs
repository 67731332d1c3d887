//! Perspective projection: 4D -> 3D -> 2D
//!
//! Both stages are the same perspective-divide pattern, first along W with a
//! viewer placed on the W axis, then along Z into pixel space. Points at or
//! behind the viewer are returned unscaled rather than dividing toward a
//! singularity; 4D rotation sweeps vertices through the viewer plane every
//! few seconds, so this is an expected case, not an error.

use crate::{Vec3, Vec4};

/// Divisors at or below this are treated as degenerate (point at or behind
/// the viewer) and skip the perspective divide.
pub const DEGENERATE_EPS: f32 = 1e-3;

/// Pixel dimensions of the output surface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Project a 4D point to 3D with a perspective divide along W.
///
/// Scale factor is `viewer_distance / (viewer_distance - p.w)`, applied to
/// x, y, z. A degenerate divisor returns the point truncated but unscaled.
pub fn project_4d_to_3d(p: Vec4, viewer_distance: f32) -> Vec3 {
    let divisor = viewer_distance - p.w;
    if divisor <= DEGENERATE_EPS {
        return p.xyz();
    }
    let factor = viewer_distance / divisor;
    Vec3::new(p.x * factor, p.y * factor, p.z * factor)
}

/// Project a 3D point into pixel space with a perspective divide along Z.
///
/// The mapping centers on the viewport and scales by half the smaller
/// viewport dimension, so a resize rescales output consistently with the new
/// aspect ratio. Y points up in 3D and down in pixel space.
pub fn project_3d_to_2d(p: Vec3, viewer_distance: f32, viewport: Viewport) -> [f32; 2] {
    let divisor = viewer_distance - p.z;
    let factor = if divisor <= DEGENERATE_EPS {
        1.0
    } else {
        viewer_distance / divisor
    };
    let half_extent = 0.5 * viewport.width.min(viewport.height) as f32;
    [
        viewport.width as f32 * 0.5 + p.x * factor * half_extent,
        viewport.height as f32 * 0.5 - p.y * factor * half_extent,
    ]
}

/// Project a 4D vertex list to 3D.
///
/// The output is index-aligned with the input; edge and face rendering
/// indexes into it with the polytope's vertex indices.
pub fn project_polytope(vertices: &[Vec4], viewer_distance: f32) -> Vec<Vec3> {
    vertices
        .iter()
        .map(|&v| project_4d_to_3d(v, viewer_distance))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_origin_projects_to_origin() {
        for &d in &[0.5, 1.0, 3.0, 100.0] {
            let p = project_4d_to_3d(Vec4::ZERO, d);
            assert_eq!(p, Vec3::ZERO, "viewer distance {}", d);
        }
    }

    #[test]
    fn test_positive_w_enlarges() {
        // A point with w > 0 sits closer to the viewer and projects larger
        let p = project_4d_to_3d(Vec4::new(1.0, 0.0, 0.0, 1.0), 3.0);
        assert!((p.x - 1.5).abs() < EPSILON, "got {:?}", p);
    }

    #[test]
    fn test_negative_w_shrinks() {
        let p = project_4d_to_3d(Vec4::new(1.0, 0.0, 0.0, -3.0), 3.0);
        assert!((p.x - 0.5).abs() < EPSILON, "got {:?}", p);
    }

    #[test]
    fn test_point_at_viewer_returns_unscaled() {
        // w == viewer distance would divide by zero; the point passes
        // through untouched and produces no NaN
        let p = project_4d_to_3d(Vec4::new(2.0, -1.0, 0.5, 3.0), 3.0);
        assert_eq!(p, Vec3::new(2.0, -1.0, 0.5));
        assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
    }

    #[test]
    fn test_point_behind_viewer_returns_unscaled() {
        let p = project_4d_to_3d(Vec4::new(1.0, 1.0, 1.0, 10.0), 3.0);
        assert_eq!(p, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_project_polytope_index_aligned() {
        let vertices = vec![
            Vec4::ZERO,
            Vec4::new(1.0, 0.0, 0.0, 1.0),
            Vec4::new(0.0, 2.0, 0.0, -1.0),
        ];
        let projected = project_polytope(&vertices, 3.0);
        assert_eq!(projected.len(), vertices.len());
        for (v, p) in vertices.iter().zip(projected.iter()) {
            assert_eq!(*p, project_4d_to_3d(*v, 3.0));
        }
    }

    #[test]
    fn test_screen_center() {
        let vp = Viewport::new(800, 600);
        let px = project_3d_to_2d(Vec3::ZERO, 5.0, vp);
        assert_eq!(px, [400.0, 300.0]);
    }

    #[test]
    fn test_screen_y_flips() {
        let vp = Viewport::new(800, 600);
        let px = project_3d_to_2d(Vec3::new(0.0, 1.0, 0.0), 5.0, vp);
        assert!(px[1] < 300.0, "positive y should land above center, got {:?}", px);
    }

    #[test]
    fn test_resize_scales_consistently() {
        // The same point scales with the smaller viewport dimension, so a
        // resize changes magnitude but not direction from center
        let p = Vec3::new(0.5, 0.25, 0.0);
        let small = project_3d_to_2d(p, 5.0, Viewport::new(800, 600));
        let large = project_3d_to_2d(p, 5.0, Viewport::new(1920, 1080));

        let small_off = [small[0] - 400.0, small[1] - 300.0];
        let large_off = [large[0] - 960.0, large[1] - 540.0];
        let ratio = 1080.0 / 600.0;
        assert!((large_off[0] - small_off[0] * ratio).abs() < EPSILON);
        assert!((large_off[1] - small_off[1] * ratio).abs() < EPSILON);
    }

    #[test]
    fn test_screen_degenerate_z_guard() {
        let vp = Viewport::new(100, 100);
        let px = project_3d_to_2d(Vec3::new(1.0, 0.0, 5.0), 5.0, vp);
        assert!(px[0].is_finite() && px[1].is_finite());
        // Unscaled: factor 1.0
        assert_eq!(px, [100.0, 50.0]);
    }
}
