//! Tesseract (4D hypercube) generator
//!
//! 16 vertices are all sign combinations of (±1, ±1, ±1, ±1); bit k of the
//! vertex index selects the sign of axis k. An edge connects two vertices
//! whose sign patterns differ in exactly one bit, and each of the 24 square
//! faces holds two axes fixed while the other two sweep the quad.

use polychora_math::Vec4;

use crate::polytope::{centroid_normal, Edge, Face};

pub(crate) fn generate() -> (Vec<Vec4>, Vec<Edge>, Vec<Face>) {
    // Vertices: binary counting over the four sign bits
    let mut vertices = Vec::with_capacity(16);
    for i in 0..16usize {
        let sign = |bit: usize| if i >> bit & 1 == 1 { 1.0 } else { -1.0 };
        vertices.push(Vec4::new(sign(0), sign(1), sign(2), sign(3)));
    }

    // Edges: Hamming distance 1 over the sign pattern
    let mut edges = Vec::with_capacity(32);
    for i in 0..16usize {
        for j in (i + 1)..16 {
            if (i ^ j).count_ones() == 1 {
                edges.push(Edge::new(i, j));
            }
        }
    }

    // Faces: pick the two varying axes (a, b), then one sign combination for
    // the two held axes. Corners walk (-,-) (+,-) (+,+) (-,+) over (a, b) so
    // the quad closes.
    let mut faces = Vec::with_capacity(24);
    for a in 0..4usize {
        for b in (a + 1)..4 {
            let held: Vec<usize> = (0..4).filter(|&k| k != a && k != b).collect();
            for signs in 0..4usize {
                let base = ((signs & 1) << held[0]) | ((signs >> 1 & 1) << held[1]);
                let quad = vec![base, base | 1 << a, base | 1 << a | 1 << b, base | 1 << b];
                let normal = centroid_normal(&vertices, &quad);
                faces.push(Face::new(quad, normal));
            }
        }
    }

    (vertices, edges, faces)
}
