/// The method by which vertices are interpreted as faces.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Every 3 vertices form an independent triangle.
    #[default]
    Triangles,
    /// The first vertex is shared by every triangle; each subsequent vertex closes a triangle
    /// with its predecessor.
    TriangleFan,
    /// Each vertex after the second forms a triangle with the two preceding it.
    TriangleStrip,
    /// Every 4 vertices form an independent quad. Only drawable by legacy APIs; devices without
    /// quad support are expected to split each quad into 2 triangles.
    Quads,
}

impl Topology {
    /// The number of faces described by `count` vertices (or indices).
    pub const fn face_count(self, count: usize) -> usize {
        match self {
            Topology::Triangles => count / 3,
            Topology::Quads => count / 4,
            Topology::TriangleFan | Topology::TriangleStrip => count.saturating_sub(2),
        }
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Topology::Triangles => f.write_str("triangles"),
            Topology::TriangleFan => f.write_str("triangle fan"),
            Topology::TriangleStrip => f.write_str("triangle strip"),
            Topology::Quads => f.write_str("quads"),
        }
    }
}
