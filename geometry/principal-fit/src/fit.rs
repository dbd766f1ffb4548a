//! Best-fit line and plane from a covariance matrix.
//!
//! The line follows the direction of greatest variance and the plane is
//! normal to the direction of least variance. Both pass through the
//! centroid. Fitting quality is `1 - λ1/λ0` for lines and `1 - λ2/λ0` for
//! planes, where `λ0 >= λ1 >= λ2` are the covariance eigenvalues.
//! Rounding can push `λ1` or `λ2` slightly negative, so quality is clamped
//! to `[0, 1]`.
//!
//! The end-to-end fits also know where the mass sits, and treat a `λ0` no
//! larger than what rounding the centroid could produce as coincident mass.

use nalgebra::Point3;
use shape_types::{Line, Plane};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::assemble::{Primitive, centered_moments};
use crate::centroid::mass_centroid;
use crate::dimension::PrimitiveDimension;
use crate::eigen::{EigenDecomposition, eigen_symmetric};
use crate::error::{FitError, FitResult};
use crate::moment::Moment6;
use crate::params::FitParams;

/// A fitted line with its quality.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineFit {
    /// Line through the centroid along the dominant direction.
    pub line: Line,
    /// Fitting quality in `[0, 1]`; 0 when the direction is ambiguous.
    pub quality: f64,
    /// Covariance eigenvalues, descending.
    pub eigenvalues: [f64; 3],
}

impl LineFit {
    /// Whether the fit fell back to the default direction.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.quality <= 0.0
    }
}

/// A fitted plane with its quality.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlaneFit {
    /// Plane through the centroid, normal to the least-variance direction.
    pub plane: Plane,
    /// Fitting quality in `[0, 1]`; 0 when the normal is ambiguous.
    pub quality: f64,
    /// Covariance eigenvalues, descending.
    pub eigenvalues: [f64; 3],
}

impl PlaneFit {
    /// Whether the fit fell back to the default horizontal plane.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.quality <= 0.0
    }
}

/// Decompose and reject covariances with no variance above `floor`.
fn decompose(covariance: &Moment6, floor: f64) -> FitResult<EigenDecomposition> {
    let eigen = eigen_symmetric(covariance);
    let largest = eigen.values[0];
    if largest.is_nan() || largest <= floor {
        return Err(FitError::CoincidentMass);
    }
    debug!(
        l0 = eigen.values[0],
        l1 = eigen.values[1],
        l2 = eigen.values[2],
        "Covariance eigenvalues"
    );
    Ok(eigen)
}

/// Fit a line to a covariance about `centroid`.
///
/// When `λ0` and `λ1` tie (under [`FitParams::tie_tolerance`]) the dominant
/// direction is not unique; the line then runs along `+X` with quality 0.
///
/// # Errors
///
/// Returns [`FitError::CoincidentMass`] if the largest eigenvalue is not
/// positive.
///
/// # Example
///
/// ```
/// use principal_fit::{FitParams, Moment6, fit_line};
/// use nalgebra::Point3;
///
/// // Variance only along y
/// let cov = Moment6([0.0, 0.0, 4.0, 0.0, 0.0, 0.0]);
/// let fit = fit_line(&cov, Point3::origin(), &FitParams::default()).unwrap();
/// assert!(fit.line.direction.y.abs() > 0.999);
/// assert!((fit.quality - 1.0).abs() < 1e-12);
/// ```
pub fn fit_line(
    covariance: &Moment6,
    centroid: Point3<f64>,
    params: &FitParams,
) -> FitResult<LineFit> {
    line_from(covariance, centroid, params, 0.0)
}

fn line_from(
    covariance: &Moment6,
    centroid: Point3<f64>,
    params: &FitParams,
    floor: f64,
) -> FitResult<LineFit> {
    let eigen = decompose(covariance, floor)?;
    let [l0, l1, _] = eigen.values;

    if params.is_tie(l0, l1, l0) {
        debug!("Dominant eigenvalue is tied, falling back to X axis");
        return Ok(LineFit {
            line: Line::along_x(centroid),
            quality: 0.0,
            eigenvalues: eigen.values,
        });
    }

    let line =
        Line::new(centroid, eigen.vectors[0]).unwrap_or_else(|| Line::along_x(centroid));
    let quality = (1.0 - l1 / l0).clamp(0.0, 1.0);
    debug!(quality, "Fitted line");
    Ok(LineFit {
        line,
        quality,
        eigenvalues: eigen.values,
    })
}

/// Fit a plane to a covariance about `centroid`.
///
/// When all three eigenvalues tie (`λ0 = λ2`) the distribution is isotropic
/// and no normal is preferred; the plane is then horizontal (`+Z` normal)
/// with quality 0.
///
/// # Errors
///
/// Returns [`FitError::CoincidentMass`] if the largest eigenvalue is not
/// positive.
///
/// # Example
///
/// ```
/// use principal_fit::{FitParams, Moment6, fit_plane};
/// use nalgebra::Point3;
///
/// // Flat in x: spread along y and z only
/// let cov = Moment6([0.0, 0.0, 2.0, 0.0, 0.0, 1.0]);
/// let fit = fit_plane(&cov, Point3::origin(), &FitParams::default()).unwrap();
/// assert!(fit.plane.normal.x.abs() > 0.999);
/// assert!((fit.quality - 1.0).abs() < 1e-12);
/// ```
pub fn fit_plane(
    covariance: &Moment6,
    centroid: Point3<f64>,
    params: &FitParams,
) -> FitResult<PlaneFit> {
    plane_from(covariance, centroid, params, 0.0)
}

fn plane_from(
    covariance: &Moment6,
    centroid: Point3<f64>,
    params: &FitParams,
    floor: f64,
) -> FitResult<PlaneFit> {
    let eigen = decompose(covariance, floor)?;
    let [l0, _, l2] = eigen.values;

    if params.is_tie(l0, l2, l0) {
        debug!("Covariance is isotropic, falling back to horizontal plane");
        return Ok(PlaneFit {
            plane: Plane::horizontal(centroid),
            quality: 0.0,
            eigenvalues: eigen.values,
        });
    }

    let plane =
        Plane::new(centroid, eigen.vectors[2]).unwrap_or_else(|| Plane::horizontal(centroid));
    let quality = (1.0 - l2 / l0).clamp(0.0, 1.0);
    debug!(quality, "Fitted plane");
    Ok(PlaneFit {
        plane,
        quality,
        eigenvalues: eigen.values,
    })
}

/// Covariance about a centroid, with the variance rounding alone can leave.
struct Centered {
    covariance: Moment6,
    centroid: Point3<f64>,
    floor: f64,
}

/// Variance `n` coincident pieces at `centroid` pick up from rounding.
///
/// Summing `n` copies of `c` and dividing by `n` lands within about
/// `n·ε·|c|` of `c`, so each piece carries at most that spread.
#[allow(clippy::cast_precision_loss)]
fn rounding_floor(centroid: &Point3<f64>, placements: usize) -> f64 {
    let n = placements as f64;
    let spread = n * f64::EPSILON * centroid.coords.norm();
    n * spread * spread
}

fn covariance_about<P: Primitive>(
    primitives: &[P],
    centroid: Option<Point3<f64>>,
    dimension: PrimitiveDimension,
    params: &FitParams,
) -> FitResult<Centered> {
    let centroid = match centroid {
        Some(c) => c,
        None => mass_centroid(primitives, dimension, params)?,
    };
    let (covariance, placements) = centered_moments(primitives, &centroid, dimension, params)?;
    Ok(Centered {
        covariance,
        centroid,
        floor: rounding_floor(&centroid, placements),
    })
}

/// Fit a line to `primitives`, computing their mass centroid.
///
/// # Errors
///
/// Any error from assembly, centroid computation, or [`fit_line`].
/// [`FitError::CoincidentMass`] also covers primitives that coincide up to
/// rounding.
///
/// # Example
///
/// ```
/// use principal_fit::{FitParams, PrimitiveDimension, fit_line_to};
/// use shape_types::{Point3, Sphere};
///
/// let spheres = [
///     Sphere::new(Point3::new(0.0, 0.0, 0.0), 1.0),
///     Sphere::new(Point3::new(0.0, 10.0, 0.0), 1.0),
/// ];
/// let fit = fit_line_to(&spheres, PrimitiveDimension::Volume, &FitParams::default()).unwrap();
/// assert!(fit.line.direction.y.abs() > 0.999);
/// assert!((fit.line.point.y - 5.0).abs() < 1e-9);
/// ```
pub fn fit_line_to<P: Primitive>(
    primitives: &[P],
    dimension: PrimitiveDimension,
    params: &FitParams,
) -> FitResult<LineFit> {
    let c = covariance_about(primitives, None, dimension, params)?;
    line_from(&c.covariance, c.centroid, params, c.floor)
}

/// Fit a line to `primitives` about a caller-supplied centroid.
///
/// # Errors
///
/// Any error from assembly or [`fit_line`].
pub fn fit_line_about<P: Primitive>(
    primitives: &[P],
    centroid: Point3<f64>,
    dimension: PrimitiveDimension,
    params: &FitParams,
) -> FitResult<LineFit> {
    let c = covariance_about(primitives, Some(centroid), dimension, params)?;
    line_from(&c.covariance, c.centroid, params, c.floor)
}

/// Fit a plane to `primitives`, computing their mass centroid.
///
/// # Errors
///
/// Any error from assembly, centroid computation, or [`fit_plane`].
/// [`FitError::CoincidentMass`] also covers primitives that coincide up to
/// rounding.
pub fn fit_plane_to<P: Primitive>(
    primitives: &[P],
    dimension: PrimitiveDimension,
    params: &FitParams,
) -> FitResult<PlaneFit> {
    let c = covariance_about(primitives, None, dimension, params)?;
    plane_from(&c.covariance, c.centroid, params, c.floor)
}

/// Fit a plane to `primitives` about a caller-supplied centroid.
///
/// # Errors
///
/// Any error from assembly or [`fit_plane`].
pub fn fit_plane_about<P: Primitive>(
    primitives: &[P],
    centroid: Point3<f64>,
    dimension: PrimitiveDimension,
    params: &FitParams,
) -> FitResult<PlaneFit> {
    let c = covariance_about(primitives, Some(centroid), dimension, params)?;
    plane_from(&c.covariance, c.centroid, params, c.floor)
}
