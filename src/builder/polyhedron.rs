use nalgebra::{vector, Vector2, Vector3};

use super::{BuildError, MeshBuffers};
use crate::{Geometry, Topology};

/// Unit cube, as 6 quads: front, right, back, left, top, bottom.
#[rustfmt::skip]
const BOX_POSITIONS: [[f32; 3]; 24] = [
    // front
    [ 0.5,  0.5,  0.5], [-0.5,  0.5,  0.5], [-0.5, -0.5,  0.5], [ 0.5, -0.5,  0.5],
    // right
    [ 0.5,  0.5, -0.5], [ 0.5,  0.5,  0.5], [ 0.5, -0.5,  0.5], [ 0.5, -0.5, -0.5],
    // back
    [-0.5,  0.5, -0.5], [ 0.5,  0.5, -0.5], [ 0.5, -0.5, -0.5], [-0.5, -0.5, -0.5],
    // left
    [-0.5,  0.5,  0.5], [-0.5,  0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5, -0.5,  0.5],
    // top
    [ 0.5,  0.5, -0.5], [-0.5,  0.5, -0.5], [-0.5,  0.5,  0.5], [ 0.5,  0.5,  0.5],
    // bottom
    [-0.5, -0.5, -0.5], [ 0.5, -0.5, -0.5], [ 0.5, -0.5,  0.5], [-0.5, -0.5,  0.5],
];

#[rustfmt::skip]
const BOX_NORMALS: [[f32; 3]; 6] = [
    [ 0.0,  0.0,  1.0],
    [ 1.0,  0.0,  0.0],
    [ 0.0,  0.0, -1.0],
    [-1.0,  0.0,  0.0],
    [ 0.0,  1.0,  0.0],
    [ 0.0, -1.0,  0.0],
];

const BOX_TEXCOORDS: [[f32; 2]; 4] = [[1.0, 1.0], [0.0, 1.0], [0.0, 0.0], [1.0, 0.0]];

/// Unit tetrahedron, as 3 sides & a bottom.
#[rustfmt::skip]
const TETRA_POSITIONS: [[f32; 3]; 12] = [
    [ 0.5, -0.5,  0.5], [ 0.0,  0.5,  0.0], [-0.5, -0.5,  0.5],
    [ 0.0, -0.5, -0.5], [ 0.0,  0.5,  0.0], [ 0.5, -0.5,  0.5],
    [-0.5, -0.5,  0.5], [ 0.0,  0.5,  0.0], [ 0.0, -0.5, -0.5],
    // bottom
    [-0.5, -0.5,  0.5], [ 0.0, -0.5, -0.5], [ 0.5, -0.5,  0.5],
];

const TETRA_TEXCOORDS: [[f32; 2]; 3] = [[1.0, 0.0], [0.5, 1.0], [0.0, 0.0]];

/// Unit square pyramid: front, right, back, left, then the base as 2 triangles.
#[rustfmt::skip]
const PYRAMID_POSITIONS: [[f32; 3]; 18] = [
    [ 0.5, -0.5,  0.5], [ 0.0,  0.5,  0.0], [-0.5, -0.5,  0.5],
    [ 0.5, -0.5, -0.5], [ 0.0,  0.5,  0.0], [ 0.5, -0.5,  0.5],
    [-0.5, -0.5, -0.5], [ 0.0,  0.5,  0.0], [ 0.5, -0.5, -0.5],
    [-0.5, -0.5,  0.5], [ 0.0,  0.5,  0.0], [-0.5, -0.5, -0.5],
    // base
    [ 0.5, -0.5,  0.5], [-0.5, -0.5,  0.5], [-0.5, -0.5, -0.5],
    [ 0.5, -0.5,  0.5], [-0.5, -0.5, -0.5], [ 0.5, -0.5, -0.5],
];

#[inline]
fn scaled(template: &[f32; 3], dims: &Vector3<f32>) -> Vector3<f32> {
    Vector3::from(*template).component_mul(dims)
}

#[inline]
fn uv(template: &[f32; 2], proj: Vector2<f32>) -> Vector2<f32> {
    Vector2::from(*template).component_mul(&proj)
}

/// Flat normals for a triangle list: `normalize((p1 - p0) × (p2 - p0))` for each triangle,
/// repeated for each of its 3 vertices.
fn face_normals(positions: &[Vector3<f32>]) -> Vec<Vector3<f32>> {
    positions
        .chunks_exact(3)
        .flat_map(|tri| {
            let n = (tri[1] - tri[0]).cross(&(tri[2] - tri[0])).normalize();
            [n; 3]
        })
        .collect()
}

/// Assemble a flat-shaded triangle list from scaled template positions & per-vertex uvs.
fn flat_triangles(
    template: &[[f32; 3]],
    dims: &Vector3<f32>,
    texcoords: Vec<Vector2<f32>>,
) -> Result<Geometry, BuildError> {
    let positions: Vec<_> = template.iter().map(|p| scaled(p, dims)).collect();
    let normals = face_normals(&positions);
    let mut mesh = MeshBuffers::with_capacity(positions.len());
    for ((p, n), t) in positions.into_iter().zip(normals).zip(texcoords) {
        mesh.push(p, n, t);
    }
    mesh.finish(Topology::Triangles)
}

/// Generate a box with side lengths `dims`, as 6 quads of 4 vertices each.
///
/// Each face has its own vertices, so normals are flat and texture coordinates run from 0 to the
/// face's size along each of its axes.
#[tracing::instrument(level = "debug")]
pub fn create_box(dims: Vector3<f32>) -> Result<Geometry, BuildError> {
    let (xy, zy, xz) = (dims.xy(), dims.zy(), dims.xz());
    let face_proj = [xy, zy, xy, zy, xz, xz];

    let mut mesh = MeshBuffers::with_capacity(BOX_POSITIONS.len());
    for (i, p) in BOX_POSITIONS.iter().enumerate() {
        mesh.push(
            scaled(p, &dims),
            Vector3::from(BOX_NORMALS[i / 4]),
            uv(&BOX_TEXCOORDS[i % 4], face_proj[i / 4]),
        );
    }
    mesh.finish(Topology::Quads)
}

/// Generate a tetrahedron fitting within a box of size `dims`, with its apex at the top.
#[tracing::instrument(level = "debug")]
pub fn create_tetrahedron(dims: Vector3<f32>) -> Result<Geometry, BuildError> {
    let face_proj = [dims.xy(), dims.zy(), dims.zy(), vector![dims.z, dims.x]];
    let texcoords = face_proj
        .iter()
        .flat_map(|&proj| TETRA_TEXCOORDS.iter().map(move |t| uv(t, proj)))
        .collect();
    flat_triangles(&TETRA_POSITIONS, &dims, texcoords)
}

/// Generate a square-based pyramid fitting within a box of size `dims`, with its apex at the top.
#[tracing::instrument(level = "debug")]
pub fn create_pyramid(dims: Vector3<f32>) -> Result<Geometry, BuildError> {
    let (xy, zy, xz) = (dims.xy(), dims.zy(), dims.xz());
    let sides = [xy, zy, xy, zy]
        .into_iter()
        .flat_map(|proj| TETRA_TEXCOORDS.iter().map(move |t| uv(t, proj)));
    let base = [0, 1, 2, 0, 2, 3]
        .into_iter()
        .map(|i| uv(&BOX_TEXCOORDS[i], xz));
    flat_triangles(&PYRAMID_POSITIONS, &dims, sides.chain(base).collect())
}
