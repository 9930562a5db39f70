use super::{AttributeWidth, Slot};

/// Reasons an attribute or index array was rejected by a [Geometry](super::Geometry).
///
/// None of these are fatal: the geometry is left exactly as it was before the failed call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    #[error("attempted to add an empty attribute array to slot {0}")]
    Empty(Slot),
    #[error("attempted to add an empty index array")]
    EmptyIndices,
    #[error("slot out of range: 0..16 ∌ {0}")]
    SlotOutOfRange(Slot),
    #[error("slot {slot} has {found} vertices, but the geometry has {expected}")]
    VertexCountMismatch {
        slot: Slot,
        expected: usize,
        found: usize,
    },
    #[error("index out of range: 0..{vertex_count} ∌ {index}")]
    IndexOutOfRange { index: u32, vertex_count: usize },
    #[error("slot {slot} holds {found} data, not {expected}")]
    WidthMismatch {
        slot: Slot,
        expected: AttributeWidth,
        found: AttributeWidth,
    },
    #[error("attempted to add an index array to a geometry with no vertices")]
    NoVertices,
    #[error("geometry already has an index array")]
    IndicesAlreadySet,
    #[error("no attribute in slot {0}")]
    NotFound(Slot),
}
