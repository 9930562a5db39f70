//! Per-vertex tangent & binormal derivation from normals alone.
//!
//! This doesn't look at texture coordinates at all: the tangent is whichever of `n × ẑ` and
//! `n × ŷ` is longer, so it's only aligned with the texture's U axis on simple shapes. It is
//! always orthogonal to the normal, which is enough for most normal-mapping shaders.

use nalgebra::{vector, Vector3};

use crate::{AttributeError, Geometry, Slot};

/// Tangent & binormal arrays, in the same vertex order as the normals they came from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TangentSpace {
    pub tangents: Vec<Vector3<f32>>,
    pub binormals: Vec<Vector3<f32>>,
}

/// Derive `(tangent, binormal)` for a single normal.
///
/// The result is undefined (NaN) for a zero normal.
#[inline]
pub fn derive(normal: &Vector3<f32>) -> (Vector3<f32>, Vector3<f32>) {
    let c1 = normal.cross(&vector![0.0, 0.0, 1.0]);
    let c2 = normal.cross(&vector![0.0, 1.0, 0.0]);
    let tangent = if c1.norm() > c2.norm() {
        c1.normalize()
    } else {
        c2.normalize()
    };
    let binormal = normal.cross(&tangent).normalize();
    (tangent, binormal)
}

pub fn derive_all(normals: &[Vector3<f32>]) -> TangentSpace {
    let (tangents, binormals) = normals.iter().map(derive).unzip();
    TangentSpace {
        tangents,
        binormals,
    }
}

impl Geometry {
    /// Derive tangents & binormals from the normal array and add them to [Slot::TANGENT] and
    /// [Slot::BINORMAL].
    ///
    /// # Errors
    /// * there is no normal array, or it isn't [Vec3](crate::AttributeWidth::Vec3)
    pub fn generate_tangent_space(&mut self) -> Result<(), AttributeError> {
        let TangentSpace {
            tangents,
            binormals,
        } = derive_all(self.normals()?);
        tracing::trace!(count = tangents.len(), "generated tangent space");
        self.add_attribute(Slot::TANGENT, tangents)?;
        self.add_attribute(Slot::BINORMAL, binormals)
    }
}
