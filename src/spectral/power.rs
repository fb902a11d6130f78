//! Power iteration for the dominant eigenpair.
//!
//! Independent cross-check of the dense symmetric solver: repeated
//! multiply-and-normalize converges to the dominant eigenvector whenever
//! the start vector has a component along it.

use crate::spectral::eigen::rayleigh_quotient;
use nalgebra::{DMatrix, DVector};

/// Outcome of [`power_method`].
#[derive(Debug, Clone)]
pub struct PowerResult {
    /// Rayleigh-quotient estimate of the dominant eigenvalue.
    pub value: f64,
    /// Normalized iterate at the stopping point.
    pub vector: DVector<f64>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Norm of the last iterate update.
    pub error: f64,
}

/// Normalized power iteration starting from `b0`.
///
/// Stops when the iterate moves less than `tol` between steps or after
/// `max_iter` iterations. `b0` must be nonzero and not orthogonal to the
/// dominant eigenvector.
pub fn power_method(m: &DMatrix<f64>, b0: DVector<f64>, max_iter: usize, tol: f64) -> PowerResult {
    let mut b = b0.normalize();
    let mut err = 1.0;
    let mut iter = 0;

    while err > tol && iter < max_iter {
        let mut b_new = m * &b;
        let norm = b_new.norm();
        b_new /= norm;
        err = (&b_new - &b).norm();
        b = b_new;
        iter += 1;
    }

    let value = rayleigh_quotient(m, &b);
    PowerResult {
        value,
        vector: b,
        iterations: iter,
        error: err,
    }
}
