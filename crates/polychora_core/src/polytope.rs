//! Polytope topology
//!
//! A polytope is a vertex list plus edges and faces that index into it. The
//! three regular 4D solids modeled here have fixed combinatorics; the
//! generators produce them from closed-form coordinate rules and any
//! deviation from the canonical counts is a generation bug.

use polychora_math::Vec4;
use serde::{Deserialize, Serialize};

use crate::{cell16, cell24, tesseract};

/// An edge between two vertices, by index into the owning polytope
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    #[inline]
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }
}

/// A face: an ordered vertex loop (triangle or quad) with a 4D normal
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    pub vertices: Vec<usize>,
    pub normal: Vec4,
}

impl Face {
    pub fn new(vertices: Vec<usize>, normal: Vec4) -> Self {
        Self { vertices, normal }
    }
}

/// The three regular 4D solids the visualizer renders
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolytopeKind {
    /// 8-cell hypercube: 16 vertices, 32 edges, 24 square faces
    #[default]
    Tesseract,
    /// 4D cross-polytope: 8 vertices, 24 edges, 32 triangular faces
    Cell16,
    /// The self-dual 24-cell: 24 vertices, 96 edges, 96 triangular faces
    Cell24,
}

impl PolytopeKind {
    pub const ALL: [PolytopeKind; 3] = [
        PolytopeKind::Tesseract,
        PolytopeKind::Cell16,
        PolytopeKind::Cell24,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PolytopeKind::Tesseract => "tesseract",
            PolytopeKind::Cell16 => "16-cell",
            PolytopeKind::Cell24 => "24-cell",
        }
    }

    /// Canonical (vertex, edge, face) counts for this solid
    pub fn canonical_counts(self) -> (usize, usize, usize) {
        match self {
            PolytopeKind::Tesseract => (16, 32, 24),
            PolytopeKind::Cell16 => (8, 24, 32),
            PolytopeKind::Cell24 => (24, 96, 96),
        }
    }
}

/// One polytope: canonical shape regenerated each tick, then deformed by the
/// instance's [`crate::ReactiveTransform`].
#[derive(Clone, Debug)]
pub struct Polytope {
    kind: PolytopeKind,
    pub vertices: Vec<Vec4>,
    pub edges: Vec<Edge>,
    pub faces: Vec<Face>,
}

impl Polytope {
    /// Create a polytope with its canonical geometry already generated
    pub fn new(kind: PolytopeKind) -> Self {
        let mut polytope = Self {
            kind,
            vertices: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
        };
        polytope.generate_geometry();
        polytope
    }

    /// Reset to the canonical base shape.
    ///
    /// Deterministic and idempotent; called once per frame before the tick's
    /// transform is applied, so transforms never accumulate across frames.
    pub fn generate_geometry(&mut self) {
        let (vertices, edges, faces) = match self.kind {
            PolytopeKind::Tesseract => tesseract::generate(),
            PolytopeKind::Cell16 => cell16::generate(),
            PolytopeKind::Cell24 => cell24::generate(),
        };
        self.vertices = vertices;
        self.edges = edges;
        self.faces = faces;
    }

    #[inline]
    pub fn kind(&self) -> PolytopeKind {
        self.kind
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of triangles the faces produce when fan-triangulated
    pub fn triangle_count(&self) -> usize {
        self.faces
            .iter()
            .map(|f| f.vertices.len().saturating_sub(2))
            .sum()
    }
}

/// Normal for a face: the normalized centroid direction of its corners.
/// Zero-safe, like all normalization in this workspace.
pub(crate) fn centroid_normal(vertices: &[Vec4], indices: &[usize]) -> Vec4 {
    let mut sum = Vec4::ZERO;
    for &i in indices {
        sum += vertices[i];
    }
    sum.normalized()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_counts_all_kinds() {
        for kind in PolytopeKind::ALL {
            let p = Polytope::new(kind);
            let (v, e, f) = kind.canonical_counts();
            assert_eq!(p.vertex_count(), v, "{} vertices", kind.name());
            assert_eq!(p.edge_count(), e, "{} edges", kind.name());
            assert_eq!(p.face_count(), f, "{} faces", kind.name());
        }
    }

    #[test]
    fn test_generate_geometry_idempotent() {
        for kind in PolytopeKind::ALL {
            let mut p = Polytope::new(kind);
            let vertices = p.vertices.clone();
            let edges = p.edges.clone();
            let faces = p.faces.clone();

            p.generate_geometry();

            assert_eq!(p.vertices, vertices, "{} vertices changed", kind.name());
            assert_eq!(p.edges, edges, "{} edges changed", kind.name());
            assert_eq!(p.faces, faces, "{} faces changed", kind.name());
        }
    }

    #[test]
    fn test_indices_in_range() {
        for kind in PolytopeKind::ALL {
            let p = Polytope::new(kind);
            let n = p.vertex_count();
            for edge in &p.edges {
                assert!(edge.a < n && edge.b < n, "{} edge out of range", kind.name());
                assert_ne!(edge.a, edge.b);
            }
            for face in &p.faces {
                assert!(face.vertices.len() >= 3);
                for &i in &face.vertices {
                    assert!(i < n, "{} face index out of range", kind.name());
                }
            }
        }
    }

    #[test]
    fn test_generate_resets_mutation() {
        let mut p = Polytope::new(PolytopeKind::Tesseract);
        let canonical = p.vertices.clone();

        for v in p.vertices.iter_mut() {
            *v = *v * 3.0 + Vec4::splat(1.0);
        }
        assert_ne!(p.vertices, canonical);

        p.generate_geometry();
        assert_eq!(p.vertices, canonical);
    }

    #[test]
    fn test_face_normals_unit_or_zero() {
        for kind in PolytopeKind::ALL {
            let p = Polytope::new(kind);
            for face in &p.faces {
                let len = face.normal.length();
                assert!(
                    (len - 1.0).abs() < 1e-4 || len == 0.0,
                    "{} normal length {}",
                    kind.name(),
                    len
                );
            }
        }
    }

    #[test]
    fn test_triangle_count() {
        // Tesseract: 24 quads fan to 2 triangles each
        let p = Polytope::new(PolytopeKind::Tesseract);
        assert_eq!(p.triangle_count(), 48);

        // 24-cell faces are already triangles
        let p = Polytope::new(PolytopeKind::Cell24);
        assert_eq!(p.triangle_count(), 96);
    }
}
