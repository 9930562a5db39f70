use std::f32::consts::{PI, TAU};

use nalgebra::{vector, Vector2, Vector3};

use super::{subdivisions, BuildError, MeshBuffers, Shape};
use crate::{Geometry, Topology};

/// Generate a torus around the Y axis, with a tube of radius `ring_radius` whose centre is
/// `outer_radius` from the axis.
///
/// Each stack emits `slices + 1` quads; the extra quad overlaps the first.
///
/// # Errors
/// * `stacks` == 0 or `slices` == 0
#[tracing::instrument(level = "debug")]
pub fn create_torus(
    stacks: u32,
    slices: u32,
    ring_radius: f32,
    outer_radius: f32,
) -> Result<Geometry, BuildError> {
    let stacks = subdivisions("stacks", stacks)?;
    let slices = subdivisions("slices", slices)?;
    let mut mesh = MeshBuffers::with_capacity(
        Shape::Torus {
            stacks,
            slices,
            ring_radius,
            outer_radius,
        }
        .vertex_count(),
    );

    let delta_stack = TAU / stacks as f32;
    let delta_slice = TAU / slices as f32;
    let outer_circ = TAU * outer_radius;
    let ring_circ = TAU * ring_radius;

    let coord = |i: u32, j: u32| -> Vector2<f32> {
        vector![
            (i as f32 / stacks as f32) * outer_circ / PI,
            (j as f32 / slices as f32) * ring_circ / PI
        ]
    };

    for i in 0..stacks {
        let a0 = i as f32 * delta_stack;
        let a1 = a0 + delta_stack;
        for j in 0..=slices {
            let b0 = j as f32 * delta_slice;
            let b1 = (j + 1) as f32 * delta_slice;
            // every corner's normal uses the slice's starting angle
            let corner = |a: f32, b: f32| -> (Vector3<f32>, Vector3<f32>) {
                let c = b.cos() * ring_radius;
                let r = c + outer_radius;
                (
                    vector![a.sin() * r, b.sin() * ring_radius, a.cos() * r],
                    vector![a.sin() * c, a.cos() * c, b0.sin()].normalize(),
                )
            };
            let verts = [corner(a0, b0), corner(a1, b0), corner(a0, b1), corner(a1, b1)];
            let coords = [coord(i, j), coord(i + 1, j), coord(i, j + 1), coord(i + 1, j + 1)];
            for k in [0, 1, 2, 1, 3, 2] {
                mesh.push(verts[k].0, verts[k].1, coords[k]);
            }
        }
    }

    mesh.finish(Topology::Triangles)
}
