//! Infinite line defined by an anchor point and unit direction.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A line in 3D space: `point + t * direction` for all real `t`.
///
/// # Example
///
/// ```
/// use shape_types::{Line, Point3, Vector3};
///
/// let line = Line::new(Point3::origin(), Vector3::new(2.0, 0.0, 0.0)).unwrap();
/// assert!((line.direction.x - 1.0).abs() < 1e-12);
/// assert!((line.distance(&Point3::new(5.0, 3.0, 4.0)) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    /// A point on the line.
    pub point: Point3<f64>,
    /// Direction of the line (unit vector).
    pub direction: Vector3<f64>,
}

impl Line {
    /// Create a line through `point` along `direction`.
    ///
    /// Returns `None` if `direction` is zero.
    #[must_use]
    pub fn new(point: Point3<f64>, direction: Vector3<f64>) -> Option<Self> {
        let norm = direction.norm();
        if norm < f64::EPSILON {
            return None;
        }
        Some(Self {
            point,
            direction: direction / norm,
        })
    }

    /// Line through `point` along `+X`.
    #[must_use]
    pub fn along_x(point: Point3<f64>) -> Self {
        Self {
            point,
            direction: Vector3::x(),
        }
    }

    /// Point at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.point + self.direction * t
    }

    /// Orthogonal projection of a point onto the line.
    #[must_use]
    pub fn project(&self, point: &Point3<f64>) -> Point3<f64> {
        self.point_at(self.direction.dot(&(point - self.point)))
    }

    /// Distance from a point to the line.
    #[must_use]
    pub fn distance(&self, point: &Point3<f64>) -> f64 {
        (point - self.project(point)).norm()
    }
}
