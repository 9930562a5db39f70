//! Object placement: translation, rotation, and scale.

use nalgebra::{Matrix3, Matrix4, UnitQuaternion, Vector3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub orientation: UnitQuaternion<f32>,
    pub scale: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
            scale: Vector3::repeat(1.0),
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn translate(&mut self, translation: &Vector3<f32>) {
        self.position += translation;
    }

    /// Rotate by euler angles `(x, y, z)`, applied in the order X, then Y, then Z.
    pub fn rotate_euler(&mut self, rotation: &Vector3<f32>) {
        self.rotate(&UnitQuaternion::from_euler_angles(
            rotation.x, rotation.y, rotation.z,
        ));
    }

    /// Rotate by `q`, in the local frame (i.e. `orientation × q`).
    pub fn rotate(&mut self, q: &UnitQuaternion<f32>) {
        self.orientation = self.orientation * q;
        self.orientation.renormalize();
    }

    /// The model matrix, `T × R × S`.
    pub fn matrix(&self) -> Matrix4<f32> {
        Matrix4::new_translation(&self.position)
            * self.orientation.to_homogeneous()
            * Matrix4::new_nonuniform_scaling(&self.scale)
    }

    /// Rotation-only matrix for transforming normals.
    ///
    /// Ignores scale entirely, so normals are only exact under uniform scaling.
    pub fn normal_matrix(&self) -> Matrix3<f32> {
        self.orientation.to_rotation_matrix().into_inner()
    }
}
