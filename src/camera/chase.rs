use nalgebra::{Point3, UnitQuaternion, Vector3};

use super::CameraState;

/// Follows a moving target from a fixed offset in the target's frame, easing toward its
/// desired position.
#[derive(Debug, Clone, PartialEq)]
pub struct ChaseCamera {
    pub state: CameraState,
    pub target_pos: Point3<f32>,
    /// Desired camera position, relative to the target & in the target's frame.
    pub pos_offset: Vector3<f32>,
    /// Euler angles of the target.
    pub target_rotation: Vector3<f32>,
    /// Point to look at, relative to the target & in the target's frame.
    pub target_offset: Vector3<f32>,
    /// Extra euler rotation applied on top of the target's.
    pub relative_rotation: Vector3<f32>,
    /// Fraction of the remaining distance covered per second; clamped so that the camera never
    /// overshoots.
    pub springiness: f32,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self {
            state: CameraState::default(),
            target_pos: Point3::origin(),
            pos_offset: Vector3::zeros(),
            target_rotation: Vector3::zeros(),
            target_offset: Vector3::zeros(),
            relative_rotation: Vector3::zeros(),
            springiness: 5.0,
        }
    }
}

impl ChaseCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position & rotation of the chased target.
    pub fn move_to(&mut self, target_pos: Point3<f32>, target_rotation: Vector3<f32>) {
        self.target_pos = target_pos;
        self.target_rotation = target_rotation;
    }

    pub fn rotate(&mut self, delta_rotation: &Vector3<f32>) {
        self.relative_rotation += delta_rotation;
    }

    pub fn update(&mut self, delta_time: f32) {
        let e = self.target_rotation + self.relative_rotation;
        let rotation = UnitQuaternion::from_euler_angles(e.x, e.y, e.z);

        let desired = self.target_pos + rotation * self.pos_offset;
        let t = (self.springiness * delta_time).clamp(0.0, 1.0);
        self.state.position = self.state.position.lerp(&desired, t);

        self.state.target = self.target_pos + rotation * self.target_offset;
        self.state.up = rotation * Vector3::y();
        let up = self.state.up;
        self.state.look_at(&up);
    }
}
