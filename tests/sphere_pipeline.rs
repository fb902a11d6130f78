//! Cross-module scenarios: the sphere-to-viewer data path and the
//! fixed-size Laplacian eigen-analysis.

use anyhow::Result;
use nalgebra::DVector;
use numlab::io::csv::{read_triangles, write_triangles};
use numlab::spectral::eigen::{dominant_eigenpair, rayleigh_quotient};
use numlab::spectral::laplacian::{analytic_eigenvalues, second_difference};
use numlab::spectral::power::power_method;
use numlab::{Mesh, sphere_mesh};
use tempfile::tempdir;

#[test]
fn test_sphere_to_csv_to_mesh() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("sphere.csv");

    // Resolution 10 gives 2 * 10^2 triangles.
    let triangles = sphere_mesh(10);
    assert_eq!(triangles.len(), 200);

    write_triangles(&path, &triangles)?;
    let loaded = read_triangles(&path)?;

    // Row count invariant: one triangle per row, order preserved.
    assert_eq!(loaded.len(), triangles.len());
    for (a, b) in triangles.iter().zip(loaded.iter()) {
        for (pa, pb) in a.vertices().iter().zip(b.vertices().iter()) {
            assert!(pa.is_close(pb), "vertex mismatch: {pa} vs {pb}");
        }
    }

    // Indexing merges shared grid vertices but keeps every face.
    let mesh = Mesh::from_triangles(&loaded);
    assert_eq!(mesh.face_count(), 200);
    assert!(mesh.vertex_count() < 3 * loaded.len());

    // Everything stays inside the fixed [-1, 1] viewing cube.
    for p in &mesh.vertices {
        assert!(p.x.abs() <= 1.0 + 1e-12);
        assert!(p.y.abs() <= 1.0 + 1e-12);
        assert!(p.z.abs() <= 1.0 + 1e-12);
    }

    Ok(())
}

#[test]
fn test_laplacian_dominant_mode_n100() -> Result<()> {
    let n = 100;
    let m = second_difference(n);
    assert_eq!(m, m.transpose());

    let (value, vector) = dominant_eigenpair(&m)?;

    // Known analytic bound for this operator family.
    assert!(value > 0.0 && value < 4.0, "eigenvalue out of (0, 4): {value}");
    let expected = *analytic_eigenvalues(n).last().unwrap();
    assert!(
        (value - expected).abs() < 1e-9,
        "dense = {value}, analytic = {expected}"
    );

    // Rayleigh quotient of the selected eigenvector matches its eigenvalue.
    let rayleigh = rayleigh_quotient(&m, &vector);
    assert!(
        (rayleigh - value).abs() < 1e-6,
        "rayleigh = {rayleigh}, eigenvalue = {value}"
    );

    // The pair actually solves M v = lambda v.
    let residual = (&m * &vector - &vector * value).norm();
    assert!(residual < 1e-8, "residual = {residual}");

    Ok(())
}

#[test]
fn test_power_iteration_cross_check() -> Result<()> {
    let n = 30;
    let m = second_difference(n);
    let b0 = DVector::from_fn(n, |i, _| (i + 1) as f64);

    let result = power_method(&m, b0, 5000, 1e-12);
    let (value, _) = dominant_eigenpair(&m)?;

    assert!(
        (result.value - value).abs() < 1e-8,
        "power = {}, dense = {value}",
        result.value
    );

    Ok(())
}
