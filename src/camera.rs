//! View & projection matrices for a handful of common camera behaviours.
//!
//! Every camera keeps a [CameraState]; calling [Camera::update] recomputes its view matrix from
//! the camera-specific parameters.

use nalgebra::{point, vector, Matrix4, Perspective3, Point3, Vector3};

mod free;
pub use free::*;

mod arc_ball;
pub use arc_ball::*;

mod chase;
pub use chase::*;

mod target;
pub use target::*;

/// State shared by every kind of camera.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    view: Matrix4<f32>,
    projection: Matrix4<f32>,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            target: point![0.0, 0.0, -1.0],
            up: vector![0.0, 1.0, 0.0],
            view: Matrix4::identity(),
            projection: Matrix4::identity(),
        }
    }
}

impl CameraState {
    /// The view matrix as of the last update.
    #[inline]
    pub fn view(&self) -> &Matrix4<f32> {
        &self.view
    }

    #[inline]
    pub fn projection(&self) -> &Matrix4<f32> {
        &self.projection
    }

    /// Set a right-handed perspective projection, mapping depth to -1..1.
    ///
    /// `fov` is the vertical field of view, in radians.
    pub fn set_projection(&mut self, fov: f32, aspect: f32, near: f32, far: f32) {
        self.projection = Perspective3::new(aspect, fov, near, far).to_homogeneous();
    }

    #[inline]
    fn look_at(&mut self, up: &Vector3<f32>) {
        self.view = Matrix4::look_at_rh(&self.position, &self.target, up);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Camera {
    Free(FreeCamera),
    ArcBall(ArcBallCamera),
    Chase(ChaseCamera),
    Target(TargetCamera),
}

impl Camera {
    /// Recompute the view matrix. `delta_time` is in seconds.
    pub fn update(&mut self, delta_time: f32) {
        match self {
            Camera::Free(c) => c.update(delta_time),
            Camera::ArcBall(c) => c.update(delta_time),
            Camera::Chase(c) => c.update(delta_time),
            Camera::Target(c) => c.update(delta_time),
        }
    }

    pub fn state(&self) -> &CameraState {
        match self {
            Camera::Free(c) => &c.state,
            Camera::ArcBall(c) => &c.state,
            Camera::Chase(c) => &c.state,
            Camera::Target(c) => &c.state,
        }
    }

    pub fn state_mut(&mut self) -> &mut CameraState {
        match self {
            Camera::Free(c) => &mut c.state,
            Camera::ArcBall(c) => &mut c.state,
            Camera::Chase(c) => &mut c.state,
            Camera::Target(c) => &mut c.state,
        }
    }

    #[inline]
    pub fn view(&self) -> &Matrix4<f32> {
        self.state().view()
    }

    #[inline]
    pub fn projection(&self) -> &Matrix4<f32> {
        self.state().projection()
    }

    /// `projection × view`
    #[inline]
    pub fn view_projection(&self) -> Matrix4<f32> {
        self.projection() * self.view()
    }
}

macro_rules! impl_from_camera {
    ($($Kind:ident($Ty:ty)),+) => {
        $(impl From<$Ty> for Camera {
            fn from(value: $Ty) -> Self {
                Self::$Kind(value)
            }
        })+
    };
}

impl_from_camera!(
    Free(FreeCamera),
    ArcBall(ArcBallCamera),
    Chase(ChaseCamera),
    Target(TargetCamera)
);
