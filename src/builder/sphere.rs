use std::f32::consts::{PI, TAU};

use nalgebra::{vector, Vector2, Vector3};

use super::{subdivisions, BuildError, MeshBuffers, Shape};
use crate::{Geometry, Topology};

/// Generate an ellipsoid with radii `dims`, as `stacks × slices` quads split into triangles.
///
/// The poles lie on the Z axis. Normals are the normalized positions, which is only exact for a
/// sphere.
///
/// # Errors
/// * `stacks` == 0 or `slices` == 0
#[tracing::instrument(level = "debug")]
pub fn create_sphere(stacks: u32, slices: u32, dims: Vector3<f32>) -> Result<Geometry, BuildError> {
    let stacks = subdivisions("stacks", stacks)?;
    let slices = subdivisions("slices", slices)?;
    let mut mesh = MeshBuffers::with_capacity(
        Shape::Sphere {
            stacks,
            slices,
            dims,
        }
        .vertex_count(),
    );

    let delta_rho = PI / stacks as f32;
    let delta_theta = TAU / slices as f32;
    let delta_t = dims.y / stacks as f32;
    let delta_s = dims.x / slices as f32;

    let surface = |theta: f32, rho: f32| -> Vector3<f32> {
        vector![
            dims.x * -theta.sin() * rho.sin(),
            dims.y * theta.cos() * rho.sin(),
            dims.z * rho.cos()
        ]
    };

    let mut t = dims.y;
    for i in 0..stacks {
        let rho = i as f32 * delta_rho;
        let mut s = 0.0;
        for j in 0..slices {
            let theta = j as f32 * delta_theta;
            // the last column wraps exactly onto the first
            let next_theta = if j + 1 == slices {
                0.0
            } else {
                (j + 1) as f32 * delta_theta
            };
            let verts = [
                surface(theta, rho),
                surface(theta, rho + delta_rho),
                surface(next_theta, rho),
                surface(next_theta, rho + delta_rho),
            ];
            let coords: [Vector2<f32>; 4] = [
                vector![s, t],
                vector![s, t - delta_t],
                vector![s + delta_s, t],
                vector![s + delta_s, t - delta_t],
            ];
            s += delta_s;
            for k in [0, 1, 2, 1, 3, 2] {
                mesh.push(verts[k], verts[k].normalize(), coords[k]);
            }
        }
        t -= delta_t;
    }

    mesh.finish(Topology::Triangles)
}
