//! Indexed triangle mesh built from a triangle soup.

use crate::Point;
use crate::Triangle;
use crate::TriangleIndex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A triangle mesh defined by deduplicated vertices and face indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Point>,
    pub faces: Vec<TriangleIndex>,
}

const DEDUP_SCALE: f64 = 1e9;

fn vertex_key(p: Point) -> (i64, i64, i64) {
    (
        (p.x * DEDUP_SCALE).round() as i64,
        (p.y * DEDUP_SCALE).round() as i64,
        (p.z * DEDUP_SCALE).round() as i64,
    )
}

fn add_dedup_vertex(
    map: &mut HashMap<(i64, i64, i64), usize>,
    vertices: &mut Vec<Point>,
    p: Point,
) -> usize {
    let key = vertex_key(p);
    if let Some(&idx) = map.get(&key) {
        return idx;
    }
    let idx = vertices.len();
    vertices.push(p);
    map.insert(key, idx);
    idx
}

impl Mesh {
    /// Indexes a triangle soup.
    ///
    /// Vertices are considered identical when they quantize to the same
    /// `(i64, i64, i64)` key at 1e9 scale (≈ 1 nm precision). Face order
    /// equals the order of the input triangles and no triangle is dropped.
    pub fn from_triangles(triangles: &[Triangle]) -> Self {
        let mut key_map: HashMap<(i64, i64, i64), usize> = HashMap::new();
        let mut vertices: Vec<Point> = Vec::new();
        let mut faces: Vec<TriangleIndex> = Vec::with_capacity(triangles.len());

        for tri in triangles {
            let [i0, i1, i2] = tri
                .vertices()
                .map(|p| add_dedup_vertex(&mut key_map, &mut vertices, p));
            faces.push(TriangleIndex(i0, i1, i2));
        }

        Self { vertices, faces }
    }

    /// Reconstructs the triangle soup in face order.
    pub fn triangles(&self) -> Vec<Triangle> {
        self.faces
            .iter()
            .map(|f| Triangle::new(self.vertices[f.0], self.vertices[f.1], self.vertices[f.2]))
            .collect()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces (triangles).
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}
