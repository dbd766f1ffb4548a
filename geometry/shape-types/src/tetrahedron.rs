//! Solid tetrahedron.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Segment, Triangle};

/// A tetrahedron given by its four vertices.
///
/// Vertex order only affects the sign of [`Tetrahedron::signed_volume`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tetrahedron {
    /// First vertex (the anchor of the edge vectors).
    pub v0: Point3<f64>,
    /// Second vertex.
    pub v1: Point3<f64>,
    /// Third vertex.
    pub v2: Point3<f64>,
    /// Fourth vertex.
    pub v3: Point3<f64>,
}

impl Tetrahedron {
    /// Create a tetrahedron from four points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>, v3: Point3<f64>) -> Self {
        Self { v0, v1, v2, v3 }
    }

    /// The four vertices in order.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [Point3<f64>; 4] {
        [self.v0, self.v1, self.v2, self.v3]
    }

    /// Edge vectors from `v0` to the other three vertices.
    #[inline]
    #[must_use]
    pub fn edge_vectors(&self) -> [Vector3<f64>; 3] {
        [self.v1 - self.v0, self.v2 - self.v0, self.v3 - self.v0]
    }

    /// Signed volume `e1 · (e2 × e3) / 6`, positive for a right-handed vertex order.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let [e1, e2, e3] = self.edge_vectors();
        e1.dot(&e2.cross(&e3)) / 6.0
    }

    /// Unsigned volume.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.signed_volume().abs()
    }

    /// Centroid of the solid tetrahedron.
    #[inline]
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        Point3::from((self.v0.coords + self.v1.coords + self.v2.coords + self.v3.coords) * 0.25)
    }

    /// The four boundary faces, each opposite one vertex.
    #[must_use]
    pub const fn faces(&self) -> [Triangle; 4] {
        [
            Triangle::new(self.v1, self.v2, self.v3),
            Triangle::new(self.v0, self.v3, self.v2),
            Triangle::new(self.v0, self.v1, self.v3),
            Triangle::new(self.v0, self.v2, self.v1),
        ]
    }

    /// The six edges.
    #[must_use]
    pub const fn edges(&self) -> [Segment; 6] {
        [
            Segment::new(self.v0, self.v1),
            Segment::new(self.v0, self.v2),
            Segment::new(self.v0, self.v3),
            Segment::new(self.v1, self.v2),
            Segment::new(self.v1, self.v3),
            Segment::new(self.v2, self.v3),
        ]
    }
}
