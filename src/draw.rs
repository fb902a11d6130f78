use anyhow::Result;
use three_d::Blend;
use three_d::Camera;
use three_d::ColorMaterial;
use three_d::CpuMesh;
use three_d::Gm;
use three_d::Indices;
use three_d::Positions;
use three_d::RenderStates;
use three_d::Srgba;
use three_d::WriteMask;
use three_d::control::OrbitControl;
use three_d::degrees;
use three_d::vec3;
use three_d::{
    ClearState, DepthTest, FrameOutput, InnerSpace, InstancedMesh, Instances, Mat4, Quat, Vec3,
};
use three_d::{Window, WindowSettings};

use crate::Mesh;
use crate::Point;
use crate::Triangle;
use crate::TriangleIndex;
use std::collections::HashSet;

/// Half-extent of the fixed viewing cube.
const AXIS_LIMIT: f32 = 1.0;
/// Radius of the black triangle edge cylinders.
const EDGE_RADIUS: f32 = 0.004;
/// Radius of the gray viewing cube frame cylinders.
const FRAME_RADIUS: f32 = 0.006;
const MAX_DISTANCE: f32 = 1000.0;

fn points_to_positions(pts: &[Point]) -> Positions {
    Positions::F64(pts.iter().map(|p| vec3(p.x, p.y, p.z)).collect())
}

fn triangles_to_indices(tri: &[TriangleIndex]) -> Indices {
    Indices::U32(
        tri.iter()
            .flat_map(|x| [x.0 as u32, x.1 as u32, x.2 as u32])
            .collect(),
    )
}

/// Collects each undirected triangle edge once, skipping degenerate ones.
fn unique_edges(faces: &[TriangleIndex]) -> Vec<(usize, usize)> {
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut edges: Vec<(usize, usize)> = Vec::new();
    for t in faces {
        for (a, b) in [(t.0, t.1), (t.1, t.2), (t.2, t.0)] {
            if a == b {
                continue;
            }
            let key = if a < b { (a, b) } else { (b, a) };
            if seen.insert(key) {
                edges.push(key);
            }
        }
    }
    edges
}

/// Transform placing a unit cylinder along the segment p1 -> p2.
fn edge_transform(p1: Vec3, p2: Vec3) -> Mat4 {
    Mat4::from_translation(p1)
        * Into::<Mat4>::into(Quat::from_arc(
            vec3(1.0, 0.0, 0.0),
            (p2 - p1).normalize(),
            None,
        ))
        * Mat4::from_nonuniform_scale((p2 - p1).magnitude(), 1.0, 1.0)
}

/// The 12 edges of the cube spanning [-l, l] on each axis.
fn cube_edges(l: f32) -> Vec<(Vec3, Vec3)> {
    let mut edges: Vec<(Vec3, Vec3)> = Vec::with_capacity(12);
    for &s in &[-l, l] {
        for &t in &[-l, l] {
            edges.push((vec3(-l, s, t), vec3(l, s, t)));
            edges.push((vec3(s, -l, t), vec3(s, l, t)));
            edges.push((vec3(s, t, -l), vec3(s, t, l)));
        }
    }
    edges
}

/// Renders a triangle soup in an interactive window.
///
/// Triangles are drawn as a translucent faceted surface with each edge
/// outlined in black, inside a fixed viewing cube spanning [-1, 1] on every
/// axis. Blocks until the window is closed.
pub fn draw_triangles(triangles: &[Triangle]) -> Result<()> {
    let mesh = Mesh::from_triangles(triangles);

    // Window & GL
    let window = Window::new(WindowSettings {
        title: "Triangle mesh".into(),
        ..Default::default()
    })?;
    let context = window.gl();

    // Build mesh
    let mut cpu = CpuMesh {
        positions: points_to_positions(&mesh.vertices),
        indices: triangles_to_indices(&mesh.faces),
        ..Default::default()
    };
    cpu.compute_normals();

    // Translucent fill
    let fill = Gm::new(
        three_d::Mesh::new(&context, &cpu),
        ColorMaterial {
            color: Srgba::new(0, 90, 255, 128),
            render_states: RenderStates {
                depth_test: DepthTest::Always,
                write_mask: WriteMask::COLOR,
                blend: Blend::TRANSPARENCY,
                ..Default::default()
            },
            is_transparent: true,
            ..Default::default()
        },
    );

    // Positions as Vec3<f32> for the edge transforms
    let positions = mesh
        .vertices
        .iter()
        .map(|p| vec3(p.x as f32, p.y as f32, p.z as f32))
        .collect::<Vec<Vec3>>();

    // Triangle edges (black, thin)
    let mut cyl_edge = CpuMesh::cylinder(12);
    cyl_edge.transform(Mat4::from_nonuniform_scale(1.0, EDGE_RADIUS, EDGE_RADIUS))?;
    let edge_transforms = unique_edges(&mesh.faces)
        .into_iter()
        .filter(|&(a, b)| (positions[b] - positions[a]).magnitude() > 1e-6)
        .map(|(a, b)| edge_transform(positions[a], positions[b]))
        .collect::<Vec<Mat4>>();
    let edge_gm = Gm::new(
        InstancedMesh::new(
            &context,
            &Instances {
                transformations: edge_transforms,
                ..Default::default()
            },
            &cyl_edge,
        ),
        ColorMaterial {
            color: Srgba::new_opaque(0, 0, 0),
            render_states: RenderStates {
                depth_test: DepthTest::Always,
                write_mask: WriteMask::COLOR,
                ..Default::default()
            },
            ..Default::default()
        },
    );

    // Viewing cube frame (gray)
    let mut cyl_frame = CpuMesh::cylinder(12);
    cyl_frame.transform(Mat4::from_nonuniform_scale(1.0, FRAME_RADIUS, FRAME_RADIUS))?;
    let frame_transforms = cube_edges(AXIS_LIMIT)
        .into_iter()
        .map(|(p1, p2)| edge_transform(p1, p2))
        .collect::<Vec<Mat4>>();
    let frame_gm = Gm::new(
        InstancedMesh::new(
            &context,
            &Instances {
                transformations: frame_transforms,
                ..Default::default()
            },
            &cyl_frame,
        ),
        ColorMaterial {
            color: Srgba::new_opaque(120, 120, 120),
            render_states: RenderStates {
                depth_test: DepthTest::Always,
                write_mask: WriteMask::COLOR,
                ..Default::default()
            },
            ..Default::default()
        },
    );

    // Camera fixed on the viewing cube, regardless of mesh extent
    let center = vec3(0.0, 0.0, 0.0);
    let radius = AXIS_LIMIT * 3.0_f32.sqrt();
    let mut camera = Camera::new_perspective(
        window.viewport(),
        center + vec3(1.0, 1.0, 1.0).normalize() * (radius * 2.0),
        center,
        vec3(0.0, 0.0, 1.0),
        degrees(45.0),
        0.1,
        radius * MAX_DISTANCE,
    );
    let mut control = OrbitControl::new(center, radius * 0.5, radius * MAX_DISTANCE);

    // Render loop
    window.render_loop(move |mut frame_input| {
        camera.set_viewport(frame_input.viewport);
        control.handle_events(&mut camera, &mut frame_input.events);

        frame_input
            .screen()
            .clear(ClearState::color_and_depth(1.0, 1.0, 1.0, 1.0, 1.0))
            .render(
                &camera,
                fill.into_iter().chain(&edge_gm).chain(&frame_gm),
                &[],
            );

        FrameOutput::default()
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_edges_shared_diagonal() {
        // Two triangles sharing one edge: 5 unique edges, not 6.
        let faces = vec![TriangleIndex(0, 1, 2), TriangleIndex(0, 2, 3)];
        assert_eq!(unique_edges(&faces).len(), 5);
    }

    #[test]
    fn test_unique_edges_skips_degenerate() {
        let faces = vec![TriangleIndex(0, 0, 1)];
        assert_eq!(unique_edges(&faces).len(), 1);
    }

    #[test]
    fn test_cube_edges_count() {
        assert_eq!(cube_edges(1.0).len(), 12);
    }
}
