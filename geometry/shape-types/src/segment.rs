//! Straight line segment.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A straight segment between two points.
///
/// # Example
///
/// ```
/// use shape_types::{Point3, Segment};
///
/// let seg = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0));
/// assert!((seg.length() - 5.0).abs() < 1e-12);
/// assert_eq!(seg.midpoint(), Point3::new(1.5, 2.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    /// Start point.
    pub start: Point3<f64>,
    /// End point.
    pub end: Point3<f64>,
}

impl Segment {
    /// Create a segment from its two endpoints.
    #[inline]
    #[must_use]
    pub const fn new(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self { start, end }
    }

    /// Create a segment from coordinate arrays.
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_arrays(start: [f64; 3], end: [f64; 3]) -> Self {
        Self {
            start: Point3::from(start),
            end: Point3::from(end),
        }
    }

    /// Both endpoints, start first.
    #[inline]
    #[must_use]
    pub const fn endpoints(&self) -> [Point3<f64>; 2] {
        [self.start, self.end]
    }

    /// Vector from start to end.
    #[inline]
    #[must_use]
    pub fn vector(&self) -> Vector3<f64> {
        self.end - self.start
    }

    /// Squared length of the segment.
    #[inline]
    #[must_use]
    pub fn squared_length(&self) -> f64 {
        self.vector().norm_squared()
    }

    /// Length of the segment.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        self.squared_length().sqrt()
    }

    /// Midpoint, which is also the centroid of a uniform segment.
    #[inline]
    #[must_use]
    pub fn midpoint(&self) -> Point3<f64> {
        nalgebra::center(&self.start, &self.end)
    }

    /// Returns a segment with its endpoints swapped.
    #[inline]
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn length_and_midpoint() {
        let seg = Segment::from_arrays([1.0, 1.0, 1.0], [1.0, 1.0, 5.0]);
        assert_relative_eq!(seg.squared_length(), 16.0);
        assert_relative_eq!(seg.length(), 4.0);
        assert_relative_eq!(seg.midpoint().z, 3.0);
    }

    #[test]
    fn zero_length() {
        let p = Point3::new(2.0, -1.0, 0.5);
        let seg = Segment::new(p, p);
        assert!(seg.length().abs() < f64::EPSILON);
    }

    #[test]
    fn reversed_keeps_length() {
        let seg = Segment::from_arrays([0.0, 0.0, 0.0], [1.0, 2.0, 2.0]);
        let rev = seg.reversed();
        assert_eq!(rev.start, seg.end);
        assert_relative_eq!(rev.length(), 3.0);
    }
}
