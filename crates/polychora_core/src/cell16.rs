//! 16-cell (4D cross-polytope) generator
//!
//! 8 vertices sit at ±1 on each axis. Every pair of vertices except exact
//! opposites is an edge, and every triple of mutually non-opposite vertices
//! is a triangular face.

use polychora_math::Vec4;

use crate::polytope::{centroid_normal, Edge, Face};

/// Two vertices are opposite when their sum collapses to (near) zero. The
/// threshold only rejects floating-point residue on the sum, it is not a
/// tunable parameter.
const OPPOSITE_EPS: f32 = 0.1;

fn non_opposite(a: Vec4, b: Vec4) -> bool {
    (a + b).length() > OPPOSITE_EPS
}

pub(crate) fn generate() -> (Vec<Vec4>, Vec<Edge>, Vec<Face>) {
    // Vertices: plus and minus unit on each axis, axis-major order
    let mut vertices = Vec::with_capacity(8);
    for axis in [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W] {
        vertices.push(axis);
        vertices.push(-axis);
    }

    // Edges: every non-opposite pair
    let mut edges = Vec::with_capacity(24);
    for i in 0..8usize {
        for j in (i + 1)..8 {
            if non_opposite(vertices[i], vertices[j]) {
                edges.push(Edge::new(i, j));
            }
        }
    }

    // Faces: every mutually non-opposite triple
    let mut faces = Vec::with_capacity(32);
    for i in 0..8usize {
        for j in (i + 1)..8 {
            if !non_opposite(vertices[i], vertices[j]) {
                continue;
            }
            for k in (j + 1)..8 {
                if non_opposite(vertices[i], vertices[k]) && non_opposite(vertices[j], vertices[k]) {
                    let triangle = vec![i, j, k];
                    let normal = centroid_normal(&vertices, &triangle);
                    faces.push(Face::new(triangle, normal));
                }
            }
        }
    }

    (vertices, edges, faces)
}
