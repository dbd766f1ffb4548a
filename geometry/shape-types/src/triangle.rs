//! Solid triangle.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Segment;

/// A triangle with concrete vertex positions.
///
/// Treated as a uniform area distribution when fitted as a surface, or as
/// its edges / vertices when fitted at a lower dimension.
///
/// # Example
///
/// ```
/// use shape_types::{Point3, Triangle};
///
/// // Right triangle with legs 3 and 4
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(3.0, 0.0, 0.0),
///     Point3::new(0.0, 4.0, 0.0),
/// );
/// assert!((tri.area() - 6.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3<f64>,
    /// Second vertex.
    pub v1: Point3<f64>,
    /// Third vertex.
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Create a new triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Create a triangle from coordinate arrays.
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_arrays(v0: [f64; 3], v1: [f64; 3], v2: [f64; 3]) -> Self {
        Self {
            v0: Point3::from(v0),
            v1: Point3::from(v1),
            v2: Point3::from(v2),
        }
    }

    /// The three vertices in order.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [Point3<f64>; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Edge vectors from `v0`: `(v1 - v0, v2 - v0)`.
    #[inline]
    #[must_use]
    pub fn edge_vectors(&self) -> (Vector3<f64>, Vector3<f64>) {
        (self.v1 - self.v0, self.v2 - self.v0)
    }

    /// Compute the (unnormalized) face normal via cross product.
    ///
    /// The magnitude equals twice the triangle's area.
    #[inline]
    #[must_use]
    pub fn normal_unnormalized(&self) -> Vector3<f64> {
        let (e1, e2) = self.edge_vectors();
        e1.cross(&e2)
    }

    /// Squared area of the triangle.
    #[inline]
    #[must_use]
    pub fn squared_area(&self) -> f64 {
        self.normal_unnormalized().norm_squared() * 0.25
    }

    /// Area of the triangle.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.normal_unnormalized().norm() * 0.5
    }

    /// Compute the centroid (center of mass of the solid triangle).
    #[inline]
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        Point3::from((self.v0.coords + self.v1.coords + self.v2.coords) / 3.0)
    }

    /// The three edges as segments: v0→v1, v1→v2, v2→v0.
    #[must_use]
    pub const fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.v0, self.v1),
            Segment::new(self.v1, self.v2),
            Segment::new(self.v2, self.v0),
        ]
    }
}
