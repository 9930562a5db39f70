use nalgebra::{vector, Vector2};

use super::{subdivisions, BuildError, MeshBuffers};
use crate::{Geometry, Topology};

/// Generate a flat, upward-facing elliptical disk with diameters `dims` (along X & Z), as a
/// triangle fan.
///
/// The fan starts at the centre, then at `(dims.x / 2, 0, 0)`, then winds once around the
/// rim; the last rim vertex coincides with the first.
///
/// # Errors
/// * `slices` == 0
#[tracing::instrument(level = "debug")]
pub fn create_disk(slices: u32, dims: Vector2<f32>) -> Result<Geometry, BuildError> {
    let slices = subdivisions("slices", slices)?;
    let up = vector![0.0, 1.0, 0.0];
    let centre_uv = vector![0.5f32, 0.5];
    let rim_uv = |p: &nalgebra::Vector3<f32>| vector![centre_uv.x + p.x, centre_uv.y - p.z];

    let mut mesh = MeshBuffers::with_capacity(slices as usize + 2);
    mesh.push(vector![0.0, 0.0, 0.0], up, centre_uv);

    let first = vector![0.5 * dims.x, 0.0, 0.0];
    mesh.push(first, up, rim_uv(&first));

    let delta = std::f64::consts::TAU / f64::from(slices);
    for i in 1..=slices {
        let angle = f64::from(i) * delta;
        let p = vector![
            (angle.cos() * f64::from(dims.x) / 2.0) as f32,
            0.0,
            (-angle.sin() * f64::from(dims.y) / 2.0) as f32
        ];
        mesh.push(p, up, rim_uv(&p));
    }
    mesh.finish(Topology::TriangleFan)
}
