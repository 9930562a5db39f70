use nalgebra::{Vector2, Vector3};

use super::*;
use crate::Geometry;

/// Parameters for any of the generated primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Box {
        dims: Vector3<f32>,
    },
    Tetrahedron {
        dims: Vector3<f32>,
    },
    Pyramid {
        dims: Vector3<f32>,
    },
    Disk {
        slices: u32,
        dims: Vector2<f32>,
    },
    Cylinder {
        stacks: u32,
        slices: u32,
        dims: Vector3<f32>,
    },
    Sphere {
        stacks: u32,
        slices: u32,
        dims: Vector3<f32>,
    },
    Torus {
        stacks: u32,
        slices: u32,
        ring_radius: f32,
        outer_radius: f32,
    },
    Plane {
        width: u32,
        depth: u32,
    },
}

const UNIT: Vector3<f32> = Vector3::new(1.0, 1.0, 1.0);
const SUBDIVISIONS: u32 = 10;

impl Shape {
    pub const fn unit_box() -> Self {
        Self::Box { dims: UNIT }
    }

    pub const fn unit_tetrahedron() -> Self {
        Self::Tetrahedron { dims: UNIT }
    }

    pub const fn unit_pyramid() -> Self {
        Self::Pyramid { dims: UNIT }
    }

    pub const fn unit_disk() -> Self {
        Self::Disk {
            slices: SUBDIVISIONS,
            dims: Vector2::new(1.0, 1.0),
        }
    }

    pub const fn unit_cylinder() -> Self {
        Self::Cylinder {
            stacks: SUBDIVISIONS,
            slices: SUBDIVISIONS,
            dims: UNIT,
        }
    }

    pub const fn unit_sphere() -> Self {
        Self::Sphere {
            stacks: SUBDIVISIONS,
            slices: SUBDIVISIONS,
            dims: UNIT,
        }
    }

    /// A torus with a tube radius of 1 & an outer radius of 3.
    pub const fn default_torus() -> Self {
        Self::Torus {
            stacks: SUBDIVISIONS,
            slices: SUBDIVISIONS,
            ring_radius: 1.0,
            outer_radius: 3.0,
        }
    }

    /// A 100 × 100 plane.
    pub const fn default_plane() -> Self {
        Self::Plane {
            width: 100,
            depth: 100,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Shape::Box { .. } => "box",
            Shape::Tetrahedron { .. } => "tetrahedron",
            Shape::Pyramid { .. } => "pyramid",
            Shape::Disk { .. } => "disk",
            Shape::Cylinder { .. } => "cylinder",
            Shape::Sphere { .. } => "sphere",
            Shape::Torus { .. } => "torus",
            Shape::Plane { .. } => "plane",
        }
    }

    /// The number of vertices [build](Self::build) will produce.
    pub const fn vertex_count(&self) -> usize {
        match *self {
            Shape::Box { .. } => 24,
            Shape::Tetrahedron { .. } => 12,
            Shape::Pyramid { .. } => 18,
            Shape::Disk { slices, .. } => slices as usize + 2,
            Shape::Cylinder { stacks, slices, .. } => {
                6 * slices as usize + 6 * stacks as usize * slices as usize
            }
            Shape::Sphere { stacks, slices, .. } => 6 * stacks as usize * slices as usize,
            Shape::Torus { stacks, slices, .. } => 6 * stacks as usize * (slices as usize + 1),
            Shape::Plane { width, depth } => 6 * width as usize * depth as usize,
        }
    }

    pub fn build(&self) -> Result<Geometry, BuildError> {
        match *self {
            Shape::Box { dims } => create_box(dims),
            Shape::Tetrahedron { dims } => create_tetrahedron(dims),
            Shape::Pyramid { dims } => create_pyramid(dims),
            Shape::Disk { slices, dims } => create_disk(slices, dims),
            Shape::Cylinder {
                stacks,
                slices,
                dims,
            } => create_cylinder(stacks, slices, dims),
            Shape::Sphere {
                stacks,
                slices,
                dims,
            } => create_sphere(stacks, slices, dims),
            Shape::Torus {
                stacks,
                slices,
                ring_radius,
                outer_radius,
            } => create_torus(stacks, slices, ring_radius, outer_radius),
            Shape::Plane { width, depth } => create_plane(width, depth),
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::unit_box()
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
