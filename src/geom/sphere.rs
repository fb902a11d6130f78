//! Unit-sphere surface meshing.

use crate::Point;
use crate::Triangle;
use std::f64::consts::PI;

/// Meshes the surface of the unit sphere on a `resolution x resolution`
/// grid in spherical coordinates.
///
/// Each grid cell contributes two triangles, so the result holds exactly
/// `2 * resolution^2` triangles. Cells touching the poles degenerate to
/// zero area but are kept so the count stays regular.
pub fn sphere_mesh(resolution: usize) -> Vec<Triangle> {
    let res = resolution as f64;
    let mut triangles: Vec<Triangle> = Vec::with_capacity(2 * resolution * resolution);

    for i in 0..resolution {
        for j in 0..resolution {
            let theta1 = (i as f64) * 2.0 * PI / res;
            let theta2 = ((i + 1) as f64) * 2.0 * PI / res;
            let phi1 = (j as f64) * PI / res;
            let phi2 = ((j + 1) as f64) * PI / res;

            let p00 = spherical_point(theta1, phi1);
            let p10 = spherical_point(theta2, phi1);
            let p01 = spherical_point(theta1, phi2);
            let p11 = spherical_point(theta2, phi2);

            triangles.push(Triangle::new(p00, p10, p01));
            triangles.push(Triangle::new(p10, p11, p01));
        }
    }

    triangles
}

/// Point on the unit sphere at azimuth `theta` and polar angle `phi`.
fn spherical_point(theta: f64, phi: f64) -> Point {
    Point::new(theta.cos() * phi.sin(), theta.sin() * phi.sin(), phi.cos())
}
