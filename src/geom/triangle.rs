use crate::Point;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Type for holding vertex indices for a triangle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriangleIndex(pub usize, pub usize, pub usize);

/// A single triangle with three owned vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle(pub Point, pub Point, pub Point);

impl Triangle {
    pub fn new(p0: Point, p1: Point, p2: Point) -> Self {
        Self(p0, p1, p2)
    }

    /// Builds a triangle from the first nine values of a numeric row.
    ///
    /// The values are read in row-major order, so the row `[a0, ..., a8]`
    /// becomes the vertices `(a0, a1, a2)`, `(a3, a4, a5)` and
    /// `(a6, a7, a8)`. Values past the ninth are ignored.
    pub fn from_row(row: &[f64]) -> Result<Self> {
        if row.len() < 9 {
            return Err(anyhow!(
                "Expected at least 9 values per row, got {}",
                row.len()
            ));
        }
        Ok(Self::new(
            Point::new(row[0], row[1], row[2]),
            Point::new(row[3], row[4], row[5]),
            Point::new(row[6], row[7], row[8]),
        ))
    }

    /// Vertices in order.
    pub fn vertices(&self) -> [Point; 3] {
        [self.0, self.1, self.2]
    }
}
