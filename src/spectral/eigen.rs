//! Dominant eigenpair selection and the Rayleigh-quotient consistency check.

use anyhow::{Result, anyhow};
use nalgebra::{DMatrix, DVector};

/// Computes the full symmetric eigen-decomposition of `m` and returns the
/// pair with the largest eigenvalue.
///
/// Ties resolve to the first occurrence in the order the solver returns
/// them. The eigenvector comes back normalized by the solver.
pub fn dominant_eigenpair(m: &DMatrix<f64>) -> Result<(f64, DVector<f64>)> {
    if m.nrows() == 0 {
        return Err(anyhow!("Cannot decompose an empty matrix"));
    }

    let eigen = m.clone().symmetric_eigen();
    let mut idx = 0;
    for (i, value) in eigen.eigenvalues.iter().enumerate() {
        if *value > eigen.eigenvalues[idx] {
            idx = i;
        }
    }

    Ok((
        eigen.eigenvalues[idx],
        eigen.eigenvectors.column(idx).into_owned(),
    ))
}

/// The Rayleigh quotient `(v^T M v) / (v^T v)`.
///
/// Equals the corresponding eigenvalue exactly when `v` is an eigenvector
/// of `M`.
pub fn rayleigh_quotient(m: &DMatrix<f64>, v: &DVector<f64>) -> f64 {
    v.dot(&(m * v)) / v.dot(v)
}
