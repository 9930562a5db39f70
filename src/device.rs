//! The seam between geometry and whatever draws it.

use slotarray::SlotArray;

use crate::{AttributeWidth, Geometry, Slot, Topology, MAX_SLOTS};

/// Something that can store vertex & index data for rendering; an OpenGL context, a wgpu
/// device, a software rasterizer, &c.
pub trait GraphicsDevice {
    /// Opaque reference to a buffer owned by the device.
    type Handle;
    type Error: std::error::Error + 'static;

    /// Store an attribute array, given as `width.components()` floats per vertex.
    fn create_attribute_buffer(
        &mut self,
        slot: Slot,
        width: AttributeWidth,
        data: &[f32],
    ) -> Result<Self::Handle, Self::Error>;

    fn create_index_buffer(&mut self, indices: &[u32]) -> Result<Self::Handle, Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError<E: std::error::Error + 'static> {
    #[error("attempted to upload geometry with no vertices")]
    NoVertices,
    #[error("graphics device error")]
    Device(#[source] E),
}

/// Device-side counterpart of a [Geometry]: everything a renderer needs to issue a draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceGeometry<H> {
    pub topology: Topology,
    pub buffers: SlotArray<H, MAX_SLOTS>,
    pub index_buffer: Option<H>,
    pub vertex_count: usize,
    pub index_count: usize,
}

impl<H> DeviceGeometry<H> {
    #[inline]
    pub fn buffer(&self, slot: Slot) -> Option<&H> {
        self.buffers.get(slot.index())
    }

    /// Whether draws should go through the index buffer.
    #[inline]
    pub fn is_indexed(&self) -> bool {
        self.index_buffer.is_some()
    }

    /// The number of vertices a draw call should process.
    #[inline]
    pub fn draw_count(&self) -> usize {
        if self.is_indexed() {
            self.index_count
        } else {
            self.vertex_count
        }
    }
}

impl Geometry {
    /// Create a device buffer for each attribute array, and for the index array if there is one.
    ///
    /// Device errors are returned as soon as they occur; buffers already created for this
    /// geometry are dropped along with their handles.
    ///
    /// # Errors
    /// * `self` has no vertices
    /// * any buffer creation fails
    #[tracing::instrument(level = "debug", skip_all, fields(vertices = self.vertex_count(), indices = self.index_count()))]
    pub fn upload<D: GraphicsDevice>(
        &self,
        device: &mut D,
    ) -> Result<DeviceGeometry<D::Handle>, UploadError<D::Error>> {
        if self.vertex_count() == 0 {
            return Err(UploadError::NoVertices);
        }
        let mut buffers = SlotArray::new();
        for (slot, data) in self.attributes() {
            tracing::trace!(%slot, width = %data.width(), "creating attribute buffer");
            let handle = device
                .create_attribute_buffer(slot, data.width(), data.as_floats())
                .map_err(UploadError::Device)?;
            buffers.set(slot.index(), handle);
        }
        let index_buffer = self
            .indices()
            .map(|indices| device.create_index_buffer(indices))
            .transpose()
            .map_err(UploadError::Device)?;
        Ok(DeviceGeometry {
            topology: self.topology(),
            buffers,
            index_buffer,
            vertex_count: self.vertex_count(),
            index_count: self.index_count(),
        })
    }
}
