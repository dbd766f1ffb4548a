//! Packed symmetric second-moment tensors and centroid translation.
//!
//! A [`Moment6`] stores the six independent entries of a symmetric 3x3
//! matrix in row-major lower-triangular order:
//!
//! ```text
//! 0
//! 1 2
//! 3 4 5
//! ```

use std::ops::{Add, AddAssign, Index};

use nalgebra::{Matrix3, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{FitError, FitResult};

/// `(row, column)` of each packed entry.
const ENTRY_INDICES: [(usize, usize); 6] = [(0, 0), (1, 0), (1, 1), (2, 0), (2, 1), (2, 2)];

/// Six independent entries of a symmetric 3x3 second-moment matrix.
///
/// Used both for moments about the origin (the output of assembly) and for
/// covariances about a centroid (the input of fitting).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Moment6(pub [f64; 6]);

impl Moment6 {
    /// All-zero moment.
    #[must_use]
    pub const fn zeros() -> Self {
        Self([0.0; 6])
    }

    /// `(row, column)` of packed entry `k`.
    ///
    /// # Panics
    ///
    /// Panics if `k >= 6`.
    #[must_use]
    pub const fn entry_index(k: usize) -> (usize, usize) {
        ENTRY_INDICES[k]
    }

    /// Pack the lower triangle of `matrix`.
    ///
    /// The upper triangle is ignored; callers pass symmetric matrices.
    #[must_use]
    pub fn from_matrix(matrix: &Matrix3<f64>) -> Self {
        Self(ENTRY_INDICES.map(|(r, c)| matrix[(r, c)]))
    }

    /// Unpack into a full symmetric matrix.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix3<f64> {
        let m = &self.0;
        Matrix3::new(
            m[0], m[1], m[3], //
            m[1], m[2], m[4], //
            m[3], m[4], m[5],
        )
    }

    /// Outer product `v vᵀ` scaled by `weight`.
    #[must_use]
    pub fn outer(v: &Vector3<f64>, weight: f64) -> Self {
        Self(ENTRY_INDICES.map(|(r, c)| weight * v[r] * v[c]))
    }

    /// The packed entries.
    #[must_use]
    pub const fn entries(&self) -> &[f64; 6] {
        &self.0
    }

    /// Trace of the unpacked matrix.
    #[must_use]
    pub fn trace(&self) -> f64 {
        self.0[0] + self.0[2] + self.0[5]
    }

    /// Parallel-axis translation from the origin to `centroid`.
    ///
    /// `result[k] = self[k] - mass * centroid[row(k)] * centroid[col(k)]`
    #[must_use]
    pub fn translated(&self, mass: f64, centroid: &Point3<f64>) -> Self {
        let c = &centroid.coords;
        let mut out = *self;
        for (entry, &(r, col)) in out.0.iter_mut().zip(ENTRY_INDICES.iter()) {
            *entry -= mass * c[r] * c[col];
        }
        out
    }
}

impl Index<usize> for Moment6 {
    type Output = f64;

    fn index(&self, k: usize) -> &f64 {
        &self.0[k]
    }
}

impl AddAssign for Moment6 {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a += b;
        }
    }
}

impl Add for Moment6 {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl From<Matrix3<f64>> for Moment6 {
    fn from(matrix: Matrix3<f64>) -> Self {
        Self::from_matrix(&matrix)
    }
}

/// Accumulated second moment about the origin together with total mass.
///
/// Produced by [`assemble_moments`](crate::assemble_moments); feed it to
/// [`MomentSum::about`] to obtain the covariance about a centroid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MomentSum {
    /// Second moment about the origin.
    pub moment: Moment6,
    /// Total length, area, volume or point count.
    pub mass: f64,
    /// Number of placed pieces (boundary pieces count individually).
    pub placements: usize,
}

impl MomentSum {
    /// Covariance about `centroid`.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::ZeroMass`] if the accumulated mass is not positive.
    pub fn about(&self, centroid: &Point3<f64>) -> FitResult<Moment6> {
        translate_to_centroid(&self.moment, self.mass, centroid)
    }
}

/// Translate a moment about the origin into a covariance about `centroid`.
///
/// # Errors
///
/// Returns [`FitError::ZeroMass`] if `mass` is not positive (or is NaN).
///
/// # Example
///
/// ```
/// use principal_fit::{Moment6, translate_to_centroid};
/// use nalgebra::Point3;
///
/// // Two unit points at x = 1 and x = 3: moment xx = 1 + 9
/// let moment = Moment6([10.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
/// let cov = translate_to_centroid(&moment, 2.0, &Point3::new(2.0, 0.0, 0.0)).unwrap();
/// assert!((cov[0] - 2.0).abs() < 1e-12);
/// ```
pub fn translate_to_centroid(
    moment: &Moment6,
    mass: f64,
    centroid: &Point3<f64>,
) -> FitResult<Moment6> {
    if mass.is_nan() || mass <= 0.0 {
        return Err(FitError::ZeroMass { mass });
    }
    Ok(moment.translated(mass, centroid))
}
