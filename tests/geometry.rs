use nalgebra::{vector, Vector2, Vector3, Vector4};
use quickcheck_macros::quickcheck;
use tessel::{AttributeData, AttributeError, AttributeWidth, Geometry, Slot, Topology};

fn vec3s(n: usize) -> Vec<Vector3<f32>> {
    (0..n).map(|i| vector![i as f32, 0.0, 0.0]).collect()
}

#[test]
fn new_is_empty() {
    let g = Geometry::new();
    assert_eq!(g.vertex_count(), 0);
    assert_eq!(g.index_count(), 0);
    assert_eq!(g.indices(), None);
    assert_eq!(g.topology(), Topology::Triangles);
    assert_eq!(g.attributes().count(), 0);
    assert_eq!(g.bounds(), &tessel::BoundingBox::default());
}

#[test]
fn first_add_fixes_vertex_count() {
    let mut g = Geometry::new();
    g.add_attribute(Slot::POSITION, vec3s(5)).unwrap();
    assert_eq!(g.vertex_count(), 5);
    g.add_attribute(Slot::TEXCOORD_0, vec![Vector2::<f32>::zeros(); 5])
        .unwrap();
    assert_eq!(
        g.add_attribute(Slot::NORMAL, vec3s(4)),
        Err(AttributeError::VertexCountMismatch {
            slot: Slot::NORMAL,
            expected: 5,
            found: 4
        })
    );
    assert!(!g.has_attribute(Slot::NORMAL));
    assert_eq!(g.vertex_count(), 5);
}

#[test]
fn empty_and_out_of_range() {
    let mut g = Geometry::new();
    assert_eq!(
        g.add_attribute(Slot::POSITION, Vec::<Vector3<f32>>::new()),
        Err(AttributeError::Empty(Slot::POSITION))
    );
    assert_eq!(
        g.add_attribute(Slot(16), vec3s(3)),
        Err(AttributeError::SlotOutOfRange(Slot(16)))
    );
    assert_eq!(
        g.add_attribute(Slot::texcoord(6), vec3s(3)),
        Err(AttributeError::SlotOutOfRange(Slot(16)))
    );
    assert_eq!(g, Geometry::new());
}

#[test]
fn replacing_a_slot() {
    let mut g = Geometry::new();
    g.add_attribute(Slot::COLOUR, vec![Vector4::<f32>::zeros(); 3])
        .unwrap();
    g.add_attribute(Slot::COLOUR, vec![Vector4::repeat(1.0f32); 3])
        .unwrap();
    assert_eq!(g.attribute_count(), 1);
    assert_eq!(g.colours().unwrap()[2], Vector4::repeat(1.0));
}

#[test]
fn attributes_in_slot_order() {
    let mut g = Geometry::new();
    g.add_attribute(Slot::TEXCOORD_0, vec![Vector2::<f32>::zeros(); 2])
        .unwrap();
    g.add_attribute(Slot::POSITION, vec3s(2)).unwrap();
    g.add_attribute(Slot::NORMAL, vec3s(2)).unwrap();
    let slots: Vec<Slot> = g.attributes().map(|(s, _)| s).collect();
    assert_eq!(slots, vec![Slot::POSITION, Slot::NORMAL, Slot::TEXCOORD_0]);
}

#[test]
fn typed_accessors() {
    let mut g = Geometry::new();
    g.add_attribute(Slot::POSITION, vec3s(2)).unwrap();
    g.add_attribute(Slot::NORMAL, vec![Vector4::<f32>::zeros(); 2])
        .unwrap();
    assert_eq!(g.positions().unwrap().len(), 2);
    assert_eq!(
        g.normals(),
        Err(AttributeError::WidthMismatch {
            slot: Slot::NORMAL,
            expected: AttributeWidth::Vec3,
            found: AttributeWidth::Vec4
        })
    );
    assert_eq!(g.tangents(), Err(AttributeError::NotFound(Slot::TANGENT)));
    assert_eq!(g.texcoords(9), Err(AttributeError::NotFound(Slot(19))));
    assert_eq!(
        g.texcoords(u32::MAX),
        Err(AttributeError::NotFound(Slot(u32::MAX)))
    );
    assert_eq!(Slot::texcoord(u32::MAX - 3), Slot(u32::MAX));
}

#[test]
fn as_floats_is_packed() {
    let data = AttributeData::from(vec![vector![1.0f32, 2.0], vector![3.0, 4.0]]);
    assert_eq!(data.width(), AttributeWidth::Vec2);
    assert_eq!(data.as_floats(), &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(
        data.as_floats().len(),
        data.len() * data.width().components()
    );
}

#[test]
fn index_array_rules() {
    let mut g = Geometry::new();
    assert_eq!(g.add_index_array(vec![0]), Err(AttributeError::NoVertices));
    g.add_attribute(Slot::POSITION, vec3s(3)).unwrap();
    assert_eq!(g.add_index_array(vec![]), Err(AttributeError::EmptyIndices));
    assert_eq!(
        g.add_index_array(vec![0, 1, 3]),
        Err(AttributeError::IndexOutOfRange {
            index: 3,
            vertex_count: 3
        })
    );
    assert_eq!(g.index_count(), 0);
    g.add_index_array(vec![0, 1, 2]).unwrap();
    assert_eq!(g.indices(), Some(&[0, 1, 2][..]));
    assert_eq!(
        g.add_index_array(vec![2, 1, 0]),
        Err(AttributeError::IndicesAlreadySet)
    );
    assert_eq!(g.index_count(), 3);
}

#[test]
fn topology_faces() {
    assert_eq!(Topology::Triangles.face_count(9), 3);
    assert_eq!(Topology::Quads.face_count(24), 6);
    assert_eq!(Topology::TriangleFan.face_count(12), 10);
    assert_eq!(Topology::TriangleStrip.face_count(1), 0);
}

/// A rejected add never changes the geometry.
#[quickcheck]
fn failed_add_is_atomic(first: u8, second: u8, slot: u8) -> bool {
    let (first, second) = (first as usize + 1, second as usize);
    let mut g = Geometry::new();
    g.add_attribute(Slot::POSITION, vec3s(first)).unwrap();
    let before = g.clone();
    let valid = second == first && (slot as usize) < tessel::MAX_SLOTS;
    match g.add_attribute(Slot(slot as u32), vec3s(second)) {
        Ok(()) => valid,
        Err(_) => !valid && g == before,
    }
}
