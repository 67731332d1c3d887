//! 24-cell generator
//!
//! The D4 construction: 8 axis vertices at ±√2 plus the 16 vertices whose
//! four coordinates are all ±√2/2. Every vertex pair at Euclidean distance
//! √2 is an edge, and faces are derived from the edge adjacency: a triple is
//! a face only when all three of its pairwise edges already exist.

use std::collections::HashSet;

use polychora_math::Vec4;

use crate::polytope::{centroid_normal, Edge, Face};

/// Edge-length tolerance; neighbor distances in this vertex set are √2, 2,
/// √6 and 2√2, so the window only has to absorb floating-point noise.
const EDGE_EPS: f32 = 0.1;

pub(crate) fn generate() -> (Vec<Vec4>, Vec<Edge>, Vec<Face>) {
    use std::f32::consts::{FRAC_1_SQRT_2, SQRT_2};

    // 8 axis vertices at ±√2
    let mut vertices = Vec::with_capacity(24);
    for axis in [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W] {
        vertices.push(axis * SQRT_2);
        vertices.push(axis * -SQRT_2);
    }

    // 16 vertices with all four coordinates ±√2/2, binary counting over the
    // sign bits as for the tesseract
    for i in 0..16usize {
        let sign = |bit: usize| if i >> bit & 1 == 1 { FRAC_1_SQRT_2 } else { -FRAC_1_SQRT_2 };
        vertices.push(Vec4::new(sign(0), sign(1), sign(2), sign(3)));
    }

    // Edges: pairs at distance √2
    let mut edges = Vec::with_capacity(96);
    let mut adjacency: HashSet<(usize, usize)> = HashSet::new();
    for i in 0..24usize {
        for j in (i + 1)..24 {
            let dist = (vertices[i] - vertices[j]).length();
            if (dist - SQRT_2).abs() < EDGE_EPS {
                edges.push(Edge::new(i, j));
                adjacency.insert((i, j));
            }
        }
    }

    // Faces from adjacency: triples whose three pairwise edges all exist
    let mut faces = Vec::with_capacity(96);
    for i in 0..24usize {
        for j in (i + 1)..24 {
            if !adjacency.contains(&(i, j)) {
                continue;
            }
            for k in (j + 1)..24 {
                if adjacency.contains(&(i, k)) && adjacency.contains(&(j, k)) {
                    let triangle = vec![i, j, k];
                    let normal = centroid_normal(&vertices, &triangle);
                    faces.push(Face::new(triangle, normal));
                }
            }
        }
    }

    (vertices, edges, faces)
}
