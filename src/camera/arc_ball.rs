use nalgebra::{UnitQuaternion, Vector3};

use super::CameraState;

/// Orbits its target at a fixed distance.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcBallCamera {
    pub state: CameraState,
    /// Rotation around the target's X axis.
    pub rot_x: f32,
    /// Rotation around the target's Y axis.
    pub rot_y: f32,
    pub distance: f32,
}

impl Default for ArcBallCamera {
    fn default() -> Self {
        Self {
            state: CameraState::default(),
            rot_x: 0.0,
            rot_y: 0.0,
            distance: 5.0,
        }
    }
}

impl ArcBallCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotate(&mut self, delta_x: f32, delta_y: f32) {
        self.rot_x += delta_x;
        self.rot_y += delta_y;
    }

    /// Move toward (negative) or away from (positive) the target.
    pub fn zoom(&mut self, magnitude: f32) {
        self.distance += magnitude;
    }

    /// Move the target, and the camera along with it.
    pub fn translate(&mut self, translation: &Vector3<f32>) {
        self.state.target += translation;
    }

    pub fn update(&mut self, _delta_time: f32) {
        let rotation = UnitQuaternion::from_euler_angles(self.rot_x, self.rot_y, 0.0);
        self.state.position = self.state.target + rotation * Vector3::new(0.0, 0.0, self.distance);
        self.state.up = rotation * Vector3::y();
        let up = self.state.up;
        self.state.look_at(&up);
    }
}
