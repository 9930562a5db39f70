use std::f32::consts::{PI, TAU};

use nalgebra::{vector, Vector2, Vector3};

use super::{subdivisions, BuildError, MeshBuffers, Shape};
use crate::{Geometry, Topology};

/// Approximate circumference of an ellipse with diameters `a` & `c` (Ramanujan).
#[inline]
fn ellipse_circumference(a: f32, c: f32) -> f32 {
    PI * ((3.0 * (a + c)) - ((3.0 * a + c) * (a + 3.0 * c)).sqrt())
}

/// Generate a capped cylinder of size `dims`, centred on the origin with its axis along Y.
///
/// Caps are `slices` triangles each. The wall is `stacks × slices` quads, each split into 2
/// triangles, with smooth normals pointing directly away from the axis.
///
/// # Errors
/// * `stacks` == 0 or `slices` == 0
#[tracing::instrument(level = "debug")]
pub fn create_cylinder(stacks: u32, slices: u32, dims: Vector3<f32>) -> Result<Geometry, BuildError> {
    let stacks = subdivisions("stacks", stacks)?;
    let slices = subdivisions("slices", slices)?;
    let mut mesh = MeshBuffers::with_capacity(
        Shape::Cylinder {
            stacks,
            slices,
            dims,
        }
        .vertex_count(),
    );

    let delta_angle = TAU / slices as f32;
    let centre_uv = vector![0.5f32, 0.5];

    // top
    let up = vector![0.0, 1.0, 0.0];
    let centre = vector![0.0, 0.5 * dims.y, 0.0];
    let mut prev = vector![0.5, 0.5, 0.0].component_mul(&dims);
    for i in 1..=slices {
        let angle = i as f32 * delta_angle;
        let curr = (vector![angle.cos(), 1.0, -angle.sin()] / 2.0).component_mul(&dims);
        mesh.push(centre, up, centre_uv);
        mesh.push(prev, up, vector![centre_uv.x + prev.x, centre_uv.y - prev.z]);
        mesh.push(curr, up, vector![centre_uv.x + curr.x, centre_uv.y - curr.z]);
        prev = curr;
    }

    // bottom
    let down = vector![0.0, -1.0, 0.0];
    let centre = vector![0.0, -0.5 * dims.y, 0.0];
    let mut prev = vector![0.5, -0.5, 0.0].component_mul(&dims);
    for i in 1..=slices {
        let angle = i as f32 * delta_angle;
        let curr = (vector![angle.cos(), -1.0, angle.sin()] / 2.0).component_mul(&dims);
        mesh.push(centre, down, centre_uv);
        mesh.push(prev, down, vector![centre_uv.x - prev.x, centre_uv.y - prev.z]);
        mesh.push(curr, down, vector![centre_uv.x - curr.x, centre_uv.y - curr.z]);
        prev = curr;
    }

    // wall
    let delta_height = 2.0 / stacks as f32;
    let delta_width = ellipse_circumference(dims.x, dims.z) / slices as f32;
    let half = dims * 0.5;
    let ring = |j: u32, i: u32| -> Vector3<f32> {
        let angle = j as f32 * delta_angle;
        vector![angle.cos(), 1.0 - delta_height * i as f32, angle.sin()].component_mul(&half)
    };
    let coord = |j: u32, i: u32| -> Vector2<f32> {
        vector![
            (-delta_width * j as f32) / PI,
            dims.y - (delta_height * i as f32 * dims.y) / 2.0
        ]
    };
    let radial = |v: &Vector3<f32>| vector![v.x, 0.0, v.z].normalize();
    for i in 0..stacks {
        for j in 0..slices {
            let verts = [ring(j, i), ring(j + 1, i), ring(j, i + 1), ring(j + 1, i + 1)];
            let coords = [coord(j, i), coord(j + 1, i), coord(j, i + 1), coord(j + 1, i + 1)];
            for k in [0, 3, 2, 0, 1, 3] {
                mesh.push(verts[k], radial(&verts[k]), coords[k]);
            }
        }
    }

    mesh.finish(Topology::Triangles)
}
