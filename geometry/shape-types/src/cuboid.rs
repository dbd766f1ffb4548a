//! Axis-aligned box.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Segment;

/// An axis-aligned box defined by its minimum and maximum corners.
///
/// A cuboid can be fitted as a solid (its interior volume) or as a shell
/// (its six faces).
///
/// # Example
///
/// ```
/// use shape_types::{Cuboid, Point3};
///
/// let b = Cuboid::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 2.0, 3.0));
/// assert!((b.volume() - 6.0).abs() < 1e-12);
/// assert!((b.surface_area() - 22.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cuboid {
    /// Minimum corner (smallest x, y, z values).
    pub min: Point3<f64>,
    /// Maximum corner (largest x, y, z values).
    pub max: Point3<f64>,
}

/// One rectangular face of a [`Cuboid`].
///
/// The face spans `corner + s * u + t * v` for `s, t ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CuboidFace {
    /// Corner the edge vectors start from.
    pub corner: Point3<f64>,
    /// First edge vector.
    pub u: Vector3<f64>,
    /// Second edge vector.
    pub v: Vector3<f64>,
}

impl CuboidFace {
    /// Area of the face.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.u.cross(&self.v).norm()
    }

    /// Center of the face.
    #[inline]
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        self.corner + (self.u + self.v) * 0.5
    }
}

impl Cuboid {
    /// Create a cuboid from two opposite corners.
    ///
    /// The corners are reordered per axis if `min > max`.
    #[must_use]
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self {
            min: Point3::new(min.x.min(max.x), min.y.min(max.y), min.z.min(max.z)),
            max: Point3::new(min.x.max(max.x), min.y.max(max.y), min.z.max(max.z)),
        }
    }

    /// Create a cube of side `side` with its minimum corner at `min`.
    #[must_use]
    pub fn cube(min: Point3<f64>, side: f64) -> Self {
        Self::new(min, min + Vector3::repeat(side))
    }

    /// Extents along x, y and z.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Center of the box.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Volume of the box.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> f64 {
        let s = self.size();
        s.x * s.y * s.z
    }

    /// Surface area: `2 (xy + yz + zx)`.
    #[inline]
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        let s = self.size();
        2.0 * s.z.mul_add(s.x, s.x.mul_add(s.y, s.y * s.z))
    }

    /// The eight corners.
    ///
    /// Index 0 is `min` and index 7 is `max`; indices 1, 3 and 5 are the
    /// corners one edge away from `min` along x, y and z respectively.
    #[must_use]
    pub fn corners(&self) -> [Point3<f64>; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            lo,
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(lo.x, hi.y, hi.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(hi.x, lo.y, hi.z),
            hi,
        ]
    }

    /// The six faces, in pairs perpendicular to x, y and z (min side first).
    #[must_use]
    pub fn faces(&self) -> [CuboidFace; 6] {
        let s = self.size();
        let dx = Vector3::new(s.x, 0.0, 0.0);
        let dy = Vector3::new(0.0, s.y, 0.0);
        let dz = Vector3::new(0.0, 0.0, s.z);
        let face =
            |corner: Point3<f64>, u: Vector3<f64>, v: Vector3<f64>| CuboidFace { corner, u, v };
        [
            face(self.min, dy, dz),
            face(self.min + dx, dy, dz),
            face(self.min, dz, dx),
            face(self.min + dy, dz, dx),
            face(self.min, dx, dy),
            face(self.min + dz, dx, dy),
        ]
    }

    /// The twelve edges.
    #[must_use]
    pub fn edges(&self) -> [Segment; 12] {
        let c = self.corners();
        let e = |a: usize, b: usize| Segment::new(c[a], c[b]);
        [
            e(0, 1),
            e(1, 2),
            e(2, 3),
            e(3, 0),
            e(5, 6),
            e(6, 7),
            e(7, 4),
            e(4, 5),
            e(0, 5),
            e(1, 6),
            e(2, 7),
            e(3, 4),
        ]
    }
}
