use nalgebra::{vector, Rotation3, Vector3};

use super::CameraState;

/// A first-person camera, steered by pitch & yaw.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeCamera {
    pub state: CameraState,
    pub pitch: f32,
    pub yaw: f32,
    translation: Vector3<f32>,
}

impl Default for FreeCamera {
    fn default() -> Self {
        Self {
            state: CameraState::default(),
            pitch: 0.0,
            yaw: 0.0,
            translation: Vector3::zeros(),
        }
    }
}

impl FreeCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn by `delta_yaw` around Y and `delta_pitch` around the camera's X axis.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.pitch += delta_pitch;
        self.yaw -= delta_yaw;
    }

    /// Queue a move of `translation`, given as (right, up, forward) relative to the camera. The
    /// move is applied by the next update.
    pub fn translate(&mut self, translation: &Vector3<f32>) {
        self.translation += translation;
    }

    pub fn forward(&self) -> Vector3<f32> {
        let (p, y) = (self.pitch, self.yaw);
        vector![p.cos() * -y.sin(), p.sin(), -y.cos() * p.cos()].normalize()
    }

    pub fn update(&mut self, _delta_time: f32) {
        let forward = self.forward();
        let right = (Rotation3::from_axis_angle(&Vector3::y_axis(), self.yaw) * Vector3::x()).normalize();
        self.state.up = right.cross(&forward).normalize();

        let t = self.translation;
        self.state.position += t.x * right + t.y * self.state.up + t.z * forward;
        self.state.target = self.state.position + forward;
        self.translation = Vector3::zeros();

        let up = self.state.up;
        self.state.look_at(&up);
    }
}
