//! Procedural primitive generation.
//!
//! Every generator produces a [Geometry] with position, normal, colour, and texture coordinate
//! arrays, plus tangents & binormals derived from the normals. Primitives are centred on the
//! origin, and their bounds are folded starting from the origin.

use nalgebra::{Vector2, Vector3};

use crate::{BoundingBox, Geometry, Slot, Topology, DEFAULT_COLOUR};

mod error;
pub use error::*;

mod polyhedron;
pub use polyhedron::*;

mod disk;
pub use disk::*;

mod cylinder;
pub use cylinder::*;

mod sphere;
pub use sphere::*;

mod torus;
pub use torus::*;

mod plane;
pub use plane::*;

mod shape;
pub use shape::*;

/// Per-vertex arrays under construction.
#[derive(Debug, Default)]
pub(crate) struct MeshBuffers {
    positions: Vec<Vector3<f32>>,
    normals: Vec<Vector3<f32>>,
    texcoords: Vec<Vector2<f32>>,
}

impl MeshBuffers {
    pub(crate) fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            texcoords: Vec::with_capacity(vertices),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, position: Vector3<f32>, normal: Vector3<f32>, texcoord: Vector2<f32>) {
        self.positions.push(position);
        self.normals.push(normal);
        self.texcoords.push(texcoord);
    }

    /// Assemble a [Geometry] in the standard attribute order: position, normal, colour,
    /// texcoord 0, then tangent & binormal.
    pub(crate) fn finish(self, topology: Topology) -> Result<Geometry, BuildError> {
        let Self {
            positions,
            normals,
            texcoords,
        } = self;
        let bounds = BoundingBox::from_points(positions.iter().copied());
        let colours = vec![DEFAULT_COLOUR; positions.len()];
        tracing::debug!(%topology, vertices = positions.len(), "assembling mesh");

        let mut geom = Geometry::new();
        geom.set_topology(topology);
        geom.add_attribute(Slot::POSITION, positions)?;
        geom.add_attribute(Slot::NORMAL, normals)?;
        geom.add_attribute(Slot::COLOUR, colours)?;
        geom.add_attribute(Slot::TEXCOORD_0, texcoords)?;
        geom.generate_tangent_space()?;
        geom.set_bounds(bounds);
        Ok(geom)
    }
}
