//! Axis-aligned bounds of generated geometry.

use nalgebra::{Point3, Vector3};

/// Axis-Aligned Bounding Box
///
/// The default box has both corners at the origin, and [from_points](Self::from_points) folds
/// starting from that default, so the origin is always inside the result. Use
/// [tight](Self::tight) when the true extents of a point set are needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(Point3::origin(), Point3::origin())
    }
}

impl BoundingBox {
    #[inline]
    pub fn new(min: Point3<f32>, max: Point3<f32>) -> Self {
        Self { min, max }
    }

    /// Grow `self` to contain `p`.
    #[inline]
    pub fn include(&mut self, p: &Point3<f32>) {
        self.min = self.min.inf(p);
        self.max = self.max.sup(p);
    }

    /// Fold `points` into a box seeded at the origin.
    pub fn from_points<P: Into<Point3<f32>>>(points: impl IntoIterator<Item = P>) -> Self {
        let mut res = Self::default();
        for p in points {
            res.include(&p.into());
        }
        res
    }

    /// The smallest box containing every point in `points`, or `None` if there aren't any.
    pub fn tight<P: Into<Point3<f32>>>(points: impl IntoIterator<Item = P>) -> Option<Self> {
        let mut points = points.into_iter().map(Into::into);
        let first = points.next()?;
        let mut res = Self::new(first, first);
        for p in points {
            res.include(&p);
        }
        Some(res)
    }

    /// Determine the center of `self`.
    #[inline]
    pub fn center(&self) -> Point3<f32> {
        nalgebra::center(&self.min, &self.max)
    }

    /// The size of `self` along each axis.
    #[inline]
    pub fn extents(&self) -> Vector3<f32> {
        self.max - self.min
    }

    #[inline]
    pub fn contains(&self, p: &Point3<f32>) -> bool {
        let Self { min: i, max: a } = self;
        (p.x >= i.x && p.y >= i.y && p.z >= i.z) && (p.x <= a.x && p.y <= a.y && p.z <= a.z)
    }
}
