//! Error types for moment assembly and fitting.

use thiserror::Error;

use crate::dimension::{PrimitiveDimension, Shape};

/// Result type alias for fitting operations.
pub type FitResult<T> = Result<T, FitError>;

/// Errors that can occur while assembling moments or fitting.
///
/// All of these indicate malformed input; the computation is deterministic,
/// so retrying with the same input reproduces the same error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FitError {
    /// A primitive, or one of the boundary pieces it decomposes into, has
    /// zero (or non-finite) length, area or volume.
    #[error("degenerate {shape} at index {index}: measure {measure}")]
    DegeneratePrimitive {
        /// Shape of the offending primitive.
        shape: Shape,
        /// Position of the primitive in the input slice.
        index: usize,
        /// The measure that was rejected.
        measure: f64,
    },

    /// No formula set exists for this shape under this dimension.
    #[error("{shape} cannot be fitted as {dimension}")]
    UnsupportedDimension {
        /// Shape of the primitives.
        shape: Shape,
        /// Requested dimension.
        dimension: PrimitiveDimension,
    },

    /// The primitive slice is empty.
    #[error("no primitives to fit")]
    EmptyInput,

    /// Accumulated mass is not positive, so no centroid or covariance exists.
    #[error("accumulated mass {mass} is not positive")]
    ZeroMass {
        /// The rejected mass.
        mass: f64,
    },

    /// The covariance has no variance in any direction.
    #[error("all mass is concentrated at a single location")]
    CoincidentMass,
}

impl FitError {
    /// Create a degenerate primitive error.
    #[must_use]
    pub const fn degenerate(shape: Shape, index: usize, measure: f64) -> Self {
        Self::DegeneratePrimitive {
            shape,
            index,
            measure,
        }
    }

    /// Create an unsupported dimension error.
    #[must_use]
    pub const fn unsupported(shape: Shape, dimension: PrimitiveDimension) -> Self {
        Self::UnsupportedDimension { shape, dimension }
    }
}
