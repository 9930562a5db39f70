use nalgebra::{vector, Vector2};

use super::{BuildError, MeshBuffers};
use crate::{Geometry, Topology};

/// Generate a flat, upward-facing grid of `width × depth` unit squares centred on the origin.
///
/// Texture coordinates are the grid coordinates divided by 10, so a texture repeats every 10
/// squares.
///
/// # Errors
/// * `width` == 0 or `depth` == 0
#[tracing::instrument(level = "debug")]
pub fn create_plane(width: u32, depth: u32) -> Result<Geometry, BuildError> {
    if width == 0 || depth == 0 {
        return Err(BuildError::EmptyPlane { width, depth });
    }
    let mut mesh = MeshBuffers::with_capacity(6 * (width as usize) * (depth as usize));
    let up = vector![0.0, 1.0, 0.0];
    let (half_w, half_d) = (width as f32 / 2.0, depth as f32 / 2.0);
    let corner = |x: u32, z: u32| vector![-half_w + x as f32, 0.0, half_d - z as f32];
    let coord = |x: u32, z: u32| -> Vector2<f32> { vector![x as f32, z as f32] / 10.0 };

    for x in 0..width {
        for z in 0..depth {
            let cells = [(x, z), (x + 1, z), (x, z + 1), (x + 1, z + 1)];
            for k in [0, 3, 2, 0, 1, 3] {
                let (cx, cz) = cells[k];
                mesh.push(corner(cx, cz), up, coord(cx, cz));
            }
        }
    }

    mesh.finish(Topology::Triangles)
}
