//! Sphere given by center and radius.

use std::f64::consts::PI;

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sphere.
///
/// Can be fitted either as a solid ball ([`Sphere::volume`]) or as a
/// spherical shell ([`Sphere::surface_area`]).
///
/// # Example
///
/// ```
/// use shape_types::{Point3, Sphere};
///
/// // Radius given squared, as when read from an implicit equation
/// let s = Sphere::from_squared_radius(Point3::origin(), 9.0);
/// assert!((s.radius - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sphere {
    /// Center point.
    pub center: Point3<f64>,
    /// Radius (non-negative).
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere from its center and radius.
    ///
    /// A negative radius is taken by absolute value.
    #[inline]
    #[must_use]
    pub fn new(center: Point3<f64>, radius: f64) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    /// Create a sphere from its center and squared radius.
    #[inline]
    #[must_use]
    pub fn from_squared_radius(center: Point3<f64>, squared_radius: f64) -> Self {
        Self::new(center, squared_radius.abs().sqrt())
    }

    /// Squared radius.
    #[inline]
    #[must_use]
    pub fn squared_radius(&self) -> f64 {
        self.radius * self.radius
    }

    /// Volume of the ball: `4/3 π r³`.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.radius * self.squared_radius()
    }

    /// Area of the spherical shell: `4 π r²`.
    #[inline]
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        4.0 * PI * self.squared_radius()
    }
}
