//! Parameters for moment assembly and eigen fitting.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed form used for the second moment of a solid triangle.
///
/// Both forms are exact and agree up to rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TriangleFormula {
    /// Transform the canonical triangle template by the vertex matrix
    /// `[v0 v1 v2]`, about the origin.
    #[default]
    VertexMoment,
    /// Transform an edge-vector template by `[v1 - v0, v2 - v0]` about the
    /// triangle's own centroid, then shift to the origin.
    CentroidEdges,
}

/// Parameters for fitting.
///
/// # Example
///
/// ```
/// use principal_fit::{FitParams, TriangleFormula};
///
/// // Exact tie detection, vertex-anchored triangle moments
/// let params = FitParams::default();
/// assert!(params.tie_tolerance.abs() < f64::EPSILON);
///
/// let params = FitParams::new()
///     .with_tie_tolerance(1e-9)
///     .with_triangle_formula(TriangleFormula::CentroidEdges);
/// assert_eq!(params.triangle_formula, TriangleFormula::CentroidEdges);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitParams {
    /// Relative tolerance for treating two eigenvalues as tied:
    /// `|λa - λb| <= tie_tolerance * λ0`.
    ///
    /// The default of `0.0` means exact floating-point equality.
    pub tie_tolerance: f64,

    /// Closed form used for solid triangles.
    pub triangle_formula: TriangleFormula,
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            tie_tolerance: 0.0,
            triangle_formula: TriangleFormula::VertexMoment,
        }
    }
}

impl FitParams {
    /// Create parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relative eigenvalue tie tolerance.
    ///
    /// Negative values are treated as zero.
    #[must_use]
    pub fn with_tie_tolerance(mut self, tolerance: f64) -> Self {
        self.tie_tolerance = tolerance.max(0.0);
        self
    }

    /// Set the triangle moment formula.
    #[must_use]
    pub const fn with_triangle_formula(mut self, formula: TriangleFormula) -> Self {
        self.triangle_formula = formula;
        self
    }

    /// Whether eigenvalues `a` and `b` count as tied, relative to the
    /// largest eigenvalue `scale`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_tie(&self, a: f64, b: f64, scale: f64) -> bool {
        if self.tie_tolerance > 0.0 {
            (a - b).abs() <= self.tie_tolerance * scale.abs()
        } else {
            a == b
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = FitParams::default();
        assert!(params.tie_tolerance.abs() < f64::EPSILON);
        assert_eq!(params.triangle_formula, TriangleFormula::VertexMoment);
    }

    #[test]
    fn test_builder_pattern() {
        let params = FitParams::new()
            .with_tie_tolerance(1e-6)
            .with_triangle_formula(TriangleFormula::CentroidEdges);
        assert!((params.tie_tolerance - 1e-6).abs() < f64::EPSILON);
        assert_eq!(params.triangle_formula, TriangleFormula::CentroidEdges);
    }

    #[test]
    fn negative_tolerance_clamps() {
        let params = FitParams::new().with_tie_tolerance(-1.0);
        assert!(params.tie_tolerance.abs() < f64::EPSILON);
    }

    #[test]
    fn exact_ties_by_default() {
        let params = FitParams::default();
        assert!(params.is_tie(2.0, 2.0, 2.0));
        assert!(!params.is_tie(2.0, 2.0 + 1e-15, 2.0));
    }

    #[test]
    fn relative_ties() {
        let params = FitParams::new().with_tie_tolerance(1e-6);
        assert!(params.is_tie(1000.0, 1000.0005, 1000.0));
        assert!(!params.is_tie(1000.0, 1000.01, 1000.0));
    }
}
