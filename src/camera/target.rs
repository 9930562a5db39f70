use super::CameraState;

/// Looks from a fixed position at a fixed target.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TargetCamera {
    pub state: CameraState,
}

impl TargetCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, _delta_time: f32) {
        // re-orthogonalize up against the view direction
        let forward = self.state.target - self.state.position;
        let side = self.state.up.cross(&forward);
        let up = forward.cross(&side).normalize();
        self.state.look_at(&up);
    }
}
