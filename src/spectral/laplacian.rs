//! Discrete 1-D Laplacian (second-difference) operator.

use nalgebra::DMatrix;
use std::f64::consts::PI;

/// Builds the n x n second-difference matrix: 2 on the main diagonal and
/// -1 on both adjacent off-diagonals, zero elsewhere. Symmetric for any n.
pub fn second_difference(n: usize) -> DMatrix<f64> {
    let mut m = DMatrix::zeros(n, n);
    for i in 0..n {
        m[(i, i)] = 2.0;
        if i + 1 < n {
            m[(i, i + 1)] = -1.0;
            m[(i + 1, i)] = -1.0;
        }
    }
    m
}

/// Eigenvalues of [`second_difference`] in closed form.
///
/// They are `2 - 2 cos(k pi / (n + 1))` for k = 1..=n, returned ascending.
/// All of them lie strictly inside (0, 4).
pub fn analytic_eigenvalues(n: usize) -> Vec<f64> {
    (1..=n)
        .map(|k| 2.0 - 2.0 * (k as f64 * PI / (n as f64 + 1.0)).cos())
        .collect()
}
