mod common;

use common::*;
use nalgebra::{point, vector, Vector3};
use quickcheck_macros::quickcheck;
use tessel::{
    builder::{self, BuildError, Shape},
    Geometry, Slot, Topology, DEFAULT_COLOUR,
};

fn defaults() -> [Shape; 8] {
    [
        Shape::unit_box(),
        Shape::unit_tetrahedron(),
        Shape::unit_pyramid(),
        Shape::unit_disk(),
        Shape::unit_cylinder(),
        Shape::unit_sphere(),
        Shape::default_torus(),
        Shape::default_plane(),
    ]
}

const GENERATED_SLOTS: [Slot; 6] = [
    Slot::POSITION,
    Slot::COLOUR,
    Slot::NORMAL,
    Slot::BINORMAL,
    Slot::TANGENT,
    Slot::TEXCOORD_0,
];

#[test]
fn every_primitive_has_consistent_attributes() {
    for shape in defaults() {
        let g = shape.build().unwrap();
        assert_eq!(g.vertex_count(), shape.vertex_count(), "{shape}");
        let slots: Vec<Slot> = g.attributes().map(|(s, _)| s).collect();
        assert_eq!(slots, GENERATED_SLOTS, "{shape}");
        for (slot, data) in g.attributes() {
            assert_eq!(data.len(), g.vertex_count(), "{shape}: slot {slot}");
        }
        assert!(g.colours().unwrap().iter().all(|c| *c == DEFAULT_COLOUR));
        assert!(g.indices().is_none(), "{shape}");
    }
}

#[test]
fn every_primitive_has_unit_normals() {
    for shape in defaults() {
        let g = shape.build().unwrap();
        for n in g.normals().unwrap() {
            assert_near(n.norm(), 1.0);
        }
    }
}

#[test]
fn topologies() {
    let topo = |s: Shape| s.build().unwrap().topology();
    assert_eq!(topo(Shape::unit_box()), Topology::Quads);
    assert_eq!(topo(Shape::unit_disk()), Topology::TriangleFan);
    assert_eq!(topo(Shape::unit_sphere()), Topology::Triangles);
    assert_eq!(topo(Shape::default_plane()), Topology::Triangles);
}

#[test]
fn box_normals_per_face() {
    let g = builder::create_box(Vector3::repeat(1.0)).unwrap();
    let normals = g.normals().unwrap();
    assert_eq!(normals.len(), 24);
    let faces: Vec<Vector3<f32>> = normals
        .chunks_exact(4)
        .map(|face| {
            assert!(face.iter().all(|n| *n == face[0]));
            face[0]
        })
        .collect();
    for (i, a) in faces.iter().enumerate() {
        for b in &faces[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(faces[0], vector![0.0, 0.0, 1.0]);
    assert_eq!(faces[5], vector![0.0, -1.0, 0.0]);
}

#[test]
fn box_bounds() {
    let g = builder::create_box(vector![2.0, 4.0, 6.0]).unwrap();
    assert_eq!(g.bounds().min, point![-1.0, -2.0, -3.0]);
    assert_eq!(g.bounds().max, point![1.0, 2.0, 3.0]);
}

#[test]
fn box_texcoords_span_faces() {
    let g = builder::create_box(vector![2.0, 4.0, 6.0]).unwrap();
    let uv = g.texcoords(0).unwrap();
    // front
    assert_eq!(uv[0], vector![2.0, 4.0]);
    assert_eq!(uv[1], vector![0.0, 4.0]);
    assert_eq!(uv[2], vector![0.0, 0.0]);
    assert_eq!(uv[3], vector![2.0, 0.0]);
    // right
    assert_eq!(uv[4], vector![6.0, 4.0]);
    // top
    assert_eq!(uv[16], vector![2.0, 6.0]);
}

/// Flat-shaded triangle lists have normals perpendicular to each triangle's edges.
fn assert_flat(g: &Geometry) {
    let positions = g.positions().unwrap();
    let normals = g.normals().unwrap();
    for (tri, n) in positions.chunks_exact(3).zip(normals.chunks_exact(3)) {
        assert!(n.iter().all(|v| *v == n[0]));
        assert_near((tri[1] - tri[0]).dot(&n[0]), 0.0);
        assert_near((tri[2] - tri[0]).dot(&n[0]), 0.0);
    }
}

#[test]
fn tetrahedron_and_pyramid_are_flat() {
    let dims = vector![1.0, 2.0, 3.0];
    let tetra = builder::create_tetrahedron(dims).unwrap();
    assert_eq!(tetra.vertex_count(), 12);
    assert_flat(&tetra);
    let pyramid = builder::create_pyramid(dims).unwrap();
    assert_eq!(pyramid.vertex_count(), 18);
    assert_flat(&pyramid);
    // base faces down
    for n in &pyramid.normals().unwrap()[12..] {
        assert_vec_near(n, &vector![0.0, -1.0, 0.0]);
    }
}

#[test]
fn pyramid_base_texcoords() {
    let g = builder::create_pyramid(vector![2.0, 1.0, 3.0]).unwrap();
    let uv = &g.texcoords(0).unwrap()[12..];
    assert_eq!(uv[0], vector![2.0, 3.0]);
    assert_eq!(uv[1], vector![0.0, 3.0]);
    assert_eq!(uv[2], vector![0.0, 0.0]);
    assert_eq!(uv[3], vector![2.0, 3.0]);
    assert_eq!(uv[4], vector![0.0, 0.0]);
    assert_eq!(uv[5], vector![2.0, 0.0]);
}

#[test]
fn disk_fan() {
    let g = builder::create_disk(8, vector![2.0, 4.0]).unwrap();
    assert_eq!(g.vertex_count(), 10);
    let positions = g.positions().unwrap();
    let uv = g.texcoords(0).unwrap();
    assert_eq!(positions[0], Vector3::zeros());
    assert_eq!(uv[0], vector![0.5, 0.5]);
    assert_eq!(positions[1], vector![1.0, 0.0, 0.0]);
    assert_eq!(uv[1], vector![1.5, 0.5]);
    // a quarter turn is toward -Z
    assert_vec_near(&positions[3], &vector![0.0, 0.0, -2.0]);
    assert_vec_near(&uv[3], &vector![0.5, 2.5]);
    // the rim closes on itself
    assert_vec_near(&positions[9], &positions[1]);
    assert!(g.normals().unwrap().iter().all(|n| *n == vector![0.0, 1.0, 0.0]));
}

#[test]
fn cylinder_layout() {
    let (stacks, slices) = (3, 8);
    let g = builder::create_cylinder(stacks, slices, vector![1.0, 2.0, 1.0]).unwrap();
    let cap = 3 * slices as usize;
    assert_eq!(g.vertex_count(), 2 * cap + 6 * (stacks * slices) as usize);
    let normals = g.normals().unwrap();
    assert!(normals[..cap].iter().all(|n| *n == vector![0.0, 1.0, 0.0]));
    assert!(normals[cap..2 * cap]
        .iter()
        .all(|n| *n == vector![0.0, -1.0, 0.0]));
    assert!(normals[2 * cap..].iter().all(|n| n.y == 0.0));
    assert_vec_near(&g.bounds().min.coords, &vector![-0.5, -1.0, -0.5]);
    assert_vec_near(&g.bounds().max.coords, &vector![0.5, 1.0, 0.5]);
}

#[test]
fn torus_count() {
    let g = builder::create_torus(4, 4, 0.5, 2.0).unwrap();
    assert_eq!(g.vertex_count(), 6 * 4 * 5);
    assert_near(g.bounds().max.y, 0.5);
    assert_near(g.bounds().max.x, 2.5);
}

#[test]
fn cylinder_wall_texcoords() {
    let g = builder::create_cylinder(1, 4, vector![1.0, 2.0, 1.0]).unwrap();
    let wall = 2 * 3 * 4;
    let uv = &g.texcoords(0).unwrap()[wall..];
    // (v0, v3, v2) of the first quad
    assert_vec_near(&uv[0], &vector![0.0, 2.0]);
    assert_vec_near(&uv[1], &vector![-0.5, 0.0]);
    assert_vec_near(&uv[2], &vector![0.0, 0.0]);
    let positions = &g.positions().unwrap()[wall..];
    assert_vec_near(&positions[0], &vector![0.5, 1.0, 0.0]);
    assert_vec_near(&positions[1], &vector![0.0, -1.0, 0.5]);
    assert_vec_near(&g.normals().unwrap()[wall + 1], &vector![0.0, 0.0, 1.0]);

    // an elliptical wall is unrolled along Ramanujan's circumference, π(9 − √35) for 2 × 1
    let g = builder::create_cylinder(1, 4, vector![2.0, 2.0, 1.0]).unwrap();
    let uv = &g.texcoords(0).unwrap()[wall..];
    assert_near(uv[1].x, -(9.0 - 35f32.sqrt()) / 4.0);
    assert_near(uv[1].y, 0.0);
}

#[test]
fn torus_normals_and_texcoords() {
    let g = builder::create_torus(4, 4, 0.5, 2.0).unwrap();
    let normals = g.normals().unwrap();
    let positions = g.positions().unwrap();
    // the outermost point on the +Z side, whose normal comes from the ring term alone
    assert_vec_near(&positions[0], &vector![0.0, 0.0, 2.5]);
    assert_vec_near(&normals[0], &vector![0.0, 1.0, 0.0]);
    assert_vec_near(&normals[1], &vector![1.0, 0.0, 0.0]);
    // second slice: every corner shares sin(b0) = 1 in Z, including those at b1 = π
    assert_vec_near(&normals[6], &vector![0.0, 0.0, 1.0]);
    let s = 5f32.sqrt();
    assert_vec_near(&normals[8], &vector![0.0, -1.0 / s, 2.0 / s]);

    let uv = g.texcoords(0).unwrap();
    assert_vec_near(&uv[0], &vector![0.0, 0.0]);
    assert_vec_near(&uv[1], &vector![1.0, 0.0]);
    assert_vec_near(&uv[2], &vector![0.0, 0.25]);
}

#[test]
fn sphere_texcoords_and_wrap() {
    let g = builder::create_sphere(2, 3, Vector3::repeat(1.0)).unwrap();
    let uv = g.texcoords(0).unwrap();
    let third = 1.0 / 3.0;
    let expected = [
        vector![0.0, 1.0],
        vector![0.0, 0.5],
        vector![third, 1.0],
        vector![0.0, 0.5],
        vector![third, 0.5],
        vector![third, 1.0],
    ];
    for (found, expected) in uv.iter().zip(expected.iter()) {
        assert_vec_near(found, expected);
    }
    // t counts down by one stack; s restarts each stack
    assert_vec_near(&uv[18], &vector![0.0, 0.5]);
    assert_vec_near(&uv[19], &vector![0.0, 0.0]);
    // last column of the first stack ends at s = 1
    assert_vec_near(&uv[16], &vector![1.0, 0.5]);

    // the last column lands exactly on θ = 0
    let positions = g.positions().unwrap();
    assert_eq!(positions[16], positions[1]);
    assert_eq!(positions[16].x, 0.0);
}

#[test]
fn vertex_counts_do_not_overflow() {
    let (stacks, slices) = (70_000, 70_000);
    let dims = Vector3::repeat(1.0);
    let many = 6 * 70_000usize * 70_000;
    assert_eq!(Shape::Sphere { stacks, slices, dims }.vertex_count(), many);
    assert_eq!(
        Shape::Cylinder { stacks, slices, dims }.vertex_count(),
        6 * 70_000 + many
    );
    assert_eq!(
        Shape::Torus {
            stacks,
            slices,
            ring_radius: 1.0,
            outer_radius: 3.0
        }
        .vertex_count(),
        6 * 70_000usize * 70_001
    );
}

#[test]
fn plane_grid() {
    let g = builder::create_plane(4, 6).unwrap();
    assert_eq!(g.vertex_count(), 6 * 4 * 6);
    assert_eq!(g.bounds().min, point![-2.0, 0.0, -3.0]);
    assert_eq!(g.bounds().max, point![2.0, 0.0, 3.0]);
    let uv = g.texcoords(0).unwrap();
    assert_eq!(uv[0], vector![0.0, 0.0]);
    assert_eq!(uv[1], vector![0.1, 0.1]);
    assert!(g.normals().unwrap().iter().all(|n| *n == vector![0.0, 1.0, 0.0]));
}

#[test]
fn zero_subdivisions_are_rejected() {
    let dims = Vector3::repeat(1.0);
    assert_eq!(
        builder::create_sphere(0, 4, dims),
        Err(BuildError::ZeroSubdivision { what: "stacks" })
    );
    assert_eq!(
        builder::create_cylinder(4, 0, dims),
        Err(BuildError::ZeroSubdivision { what: "slices" })
    );
    assert!(builder::create_torus(0, 0, 1.0, 3.0).is_err());
    assert!(builder::create_disk(0, vector![1.0, 1.0]).is_err());
    assert_eq!(
        builder::create_plane(0, 3),
        Err(BuildError::EmptyPlane { width: 0, depth: 3 })
    );
}

#[quickcheck]
fn sphere_counts_and_normals(stacks: u8, slices: u8) -> bool {
    let (stacks, slices) = (subdiv(stacks), subdiv(slices));
    let g = builder::create_sphere(stacks, slices, Vector3::repeat(1.0)).unwrap();
    g.vertex_count() == (stacks * slices * 6) as usize
        && g.normals().unwrap().iter().all(|n| near(n.norm(), 1.0))
}

#[quickcheck]
fn generation_is_deterministic(stacks: u8, slices: u8, x: u8, y: u8, z: u8) -> bool {
    let (stacks, slices) = (subdiv(stacks), subdiv(slices));
    let dims = vector![dim(x), dim(y), dim(z)];
    [
        Shape::Box { dims },
        Shape::Tetrahedron { dims },
        Shape::Pyramid { dims },
        Shape::Disk {
            slices,
            dims: dims.xz(),
        },
        Shape::Plane {
            width: stacks,
            depth: slices,
        },
        Shape::Cylinder {
            stacks,
            slices,
            dims,
        },
        Shape::Sphere {
            stacks,
            slices,
            dims,
        },
        Shape::Torus {
            stacks,
            slices,
            ring_radius: dims.x,
            outer_radius: dims.y + dims.x,
        },
    ]
    .iter()
    .all(|s| s.build().unwrap() == s.build().unwrap())
}

#[quickcheck]
fn bounds_contain_every_vertex_and_origin(stacks: u8, slices: u8, x: u8, y: u8, z: u8) -> bool {
    let (stacks, slices) = (subdiv(stacks), subdiv(slices));
    let dims = vector![dim(x), dim(y), dim(z)];
    let g = builder::create_cylinder(stacks, slices, dims).unwrap();
    let b = g.bounds();
    b.contains(&nalgebra::Point3::origin())
        && g.positions().unwrap().iter().all(|p| b.contains(&(*p).into()))
}
