//! Vertex attribute storage.

use nalgebra::{Vector2, Vector3, Vector4};
use slotarray::SlotArray;

use crate::BoundingBox;

mod attribute;
pub use attribute::*;

mod error;
pub use error::*;

mod topology;
pub use topology::*;

/// A set of per-vertex attribute arrays, with an optional index array.
///
/// # Invariants
///
/// * every attribute array holds exactly `vertex_count` elements
/// * `vertex_count == 0` ⟺ no attribute has been added
/// * every index is < `vertex_count`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Geometry {
    topology: Topology,
    attributes: SlotArray<AttributeData, MAX_SLOTS>,
    vertex_count: usize,
    indices: Option<Vec<u32>>,
    bounds: BoundingBox,
}

impl Geometry {
    /// Construct an empty [Geometry], with [Topology::Triangles] & zero-sized bounds at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    #[inline]
    pub fn set_topology(&mut self, topology: Topology) {
        self.topology = topology;
    }

    #[inline]
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    #[inline]
    pub fn set_bounds(&mut self, bounds: BoundingBox) {
        self.bounds = bounds;
    }

    /// The number of vertices in each attribute array; 0 if none have been added.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// The number of entries in the index array; 0 if there isn't one.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.as_ref().map_or(0, Vec::len)
    }

    #[inline]
    pub fn indices(&self) -> Option<&[u32]> {
        self.indices.as_deref()
    }

    /// Attach an attribute array to a slot.
    ///
    /// The first array added fixes the vertex count of the geometry. Adding to an occupied slot
    /// replaces the array in that slot.
    ///
    /// # Errors
    /// * `values` is empty
    /// * `slot` ∉ 0..[MAX_SLOTS]
    /// * the vertex count is fixed, and `values.len()` differs from it
    ///
    /// On error, `self` is unchanged.
    pub fn add_attribute(
        &mut self,
        slot: Slot,
        values: impl Into<AttributeData>,
    ) -> Result<(), AttributeError> {
        let values = values.into();
        let res = self.check_attribute(slot, &values);
        if let Err(e) = &res {
            tracing::warn!(%slot, width = %values.width(), count = values.len(), "rejected attribute: {e}");
            return res;
        }
        tracing::trace!(%slot, width = %values.width(), count = values.len(), "adding attribute");
        if self.vertex_count == 0 {
            self.vertex_count = values.len();
        }
        self.attributes.set(slot.index(), values);
        Ok(())
    }

    fn check_attribute(&self, slot: Slot, values: &AttributeData) -> Result<(), AttributeError> {
        if !slot.in_range() {
            return Err(AttributeError::SlotOutOfRange(slot));
        }
        if values.is_empty() {
            return Err(AttributeError::Empty(slot));
        }
        if self.vertex_count != 0 && values.len() != self.vertex_count {
            return Err(AttributeError::VertexCountMismatch {
                slot,
                expected: self.vertex_count,
                found: values.len(),
            });
        }
        Ok(())
    }

    /// Attach an index array.
    ///
    /// # Errors
    /// * `indices` is empty
    /// * no attribute arrays have been added
    /// * any index is >= [vertex_count](Self::vertex_count)
    /// * an index array has already been added
    ///
    /// On error, `self` is unchanged.
    pub fn add_index_array(&mut self, indices: Vec<u32>) -> Result<(), AttributeError> {
        let res = self.check_indices(&indices);
        if let Err(e) = &res {
            tracing::warn!(count = indices.len(), "rejected index array: {e}");
            return res;
        }
        tracing::trace!(count = indices.len(), "adding index array");
        self.indices = Some(indices);
        Ok(())
    }

    fn check_indices(&self, indices: &[u32]) -> Result<(), AttributeError> {
        if self.indices.is_some() {
            return Err(AttributeError::IndicesAlreadySet);
        }
        if indices.is_empty() {
            return Err(AttributeError::EmptyIndices);
        }
        if self.vertex_count == 0 {
            return Err(AttributeError::NoVertices);
        }
        match indices
            .iter()
            .find(|&&i| i as usize >= self.vertex_count)
        {
            Some(&index) => Err(AttributeError::IndexOutOfRange {
                index,
                vertex_count: self.vertex_count,
            }),
            None => Ok(()),
        }
    }

    /// # Errors
    /// * `slot` is unoccupied
    pub fn get_attribute(&self, slot: Slot) -> Result<&AttributeData, AttributeError> {
        self.attributes
            .get(slot.index())
            .ok_or(AttributeError::NotFound(slot))
    }

    #[inline]
    pub fn has_attribute(&self, slot: Slot) -> bool {
        self.attributes.is_occupied(slot.index())
    }

    /// Iterate through occupied slots in ascending order.
    pub fn attributes(&self) -> impl Iterator<Item = (Slot, &AttributeData)> + '_ {
        self.attributes
            .iter()
            .map(|(i, data)| (Slot(i as u32), data))
    }

    /// The number of occupied slots.
    #[inline]
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    fn typed<'s, T: ?Sized>(
        &'s self,
        slot: Slot,
        expected: AttributeWidth,
        f: impl FnOnce(&'s AttributeData) -> Option<&'s T>,
    ) -> Result<&'s T, AttributeError> {
        let data = self.get_attribute(slot)?;
        f(data).ok_or(AttributeError::WidthMismatch {
            slot,
            expected,
            found: data.width(),
        })
    }

    pub fn positions(&self) -> Result<&[Vector3<f32>], AttributeError> {
        self.typed(Slot::POSITION, AttributeWidth::Vec3, AttributeData::as_vec3)
    }

    pub fn normals(&self) -> Result<&[Vector3<f32>], AttributeError> {
        self.typed(Slot::NORMAL, AttributeWidth::Vec3, AttributeData::as_vec3)
    }

    pub fn tangents(&self) -> Result<&[Vector3<f32>], AttributeError> {
        self.typed(Slot::TANGENT, AttributeWidth::Vec3, AttributeData::as_vec3)
    }

    pub fn binormals(&self) -> Result<&[Vector3<f32>], AttributeError> {
        self.typed(Slot::BINORMAL, AttributeWidth::Vec3, AttributeData::as_vec3)
    }

    pub fn colours(&self) -> Result<&[Vector4<f32>], AttributeError> {
        self.typed(Slot::COLOUR, AttributeWidth::Vec4, AttributeData::as_vec4)
    }

    /// The `n`th set of 2D texture coordinates.
    pub fn texcoords(&self, n: u32) -> Result<&[Vector2<f32>], AttributeError> {
        self.typed(Slot::texcoord(n), AttributeWidth::Vec2, AttributeData::as_vec2)
    }
}
