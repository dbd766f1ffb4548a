//! Mass-weighted principal component fitting of lines and planes.
//!
//! This crate fits a best line or plane to a collection of 3D primitives
//! (points, segments, triangles, tetrahedra, axis-aligned boxes, spheres),
//! treating each as a uniform mass distribution of a chosen dimension:
//!
//! - [`PrimitiveDimension::Volume`] - solids weighted by volume
//! - [`PrimitiveDimension::Surface`] - solids reduced to their boundary faces
//! - [`PrimitiveDimension::Curve`] - shapes reduced to their edges
//! - [`PrimitiveDimension::Point`] - shapes reduced to their vertices
//!
//! The pipeline is:
//!
//! 1. [`mass_centroid`] - measure-weighted centroid
//! 2. [`assemble_moments`] - closed-form second moments about the origin
//! 3. [`translate_to_centroid`] - parallel-axis shift to the covariance
//! 4. [`eigen_symmetric`] - sorted eigendecomposition
//! 5. [`fit_line`] / [`fit_plane`] - principal axis and quality
//!
//! [`fit_line_to`] and [`fit_plane_to`] run all five steps.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**.
//!
//! # Example
//!
//! ```
//! use principal_fit::{FitParams, PrimitiveDimension, fit_plane_to};
//! use shape_types::{Point3, Triangle};
//!
//! // Two triangles in the z = 1 plane
//! let triangles = [
//!     Triangle::from_arrays([0.0, 0.0, 1.0], [4.0, 0.0, 1.0], [0.0, 4.0, 1.0]),
//!     Triangle::from_arrays([4.0, 0.0, 1.0], [4.0, 4.0, 1.0], [0.0, 4.0, 1.0]),
//! ];
//!
//! let fit = fit_plane_to(&triangles, PrimitiveDimension::Surface, &FitParams::default()).unwrap();
//! assert!(fit.plane.normal.z.abs() > 0.999);
//! assert!((fit.plane.point.z - 1.0).abs() < 1e-12);
//! assert!((fit.quality - 1.0).abs() < 1e-9);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for moments and fits

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod assemble;
mod centroid;
mod dimension;
mod eigen;
mod error;
mod fit;
mod moment;
mod params;
mod template;

pub use assemble::{Primitive, PrimitiveRef, assemble_moments, covariance};
pub use centroid::mass_centroid;
pub use dimension::{PrimitiveDimension, Shape};
pub use eigen::{EigenDecomposition, eigen_symmetric};
pub use error::{FitError, FitResult};
pub use fit::{
    LineFit, PlaneFit, fit_line, fit_line_about, fit_line_to, fit_plane, fit_plane_about,
    fit_plane_to,
};
pub use moment::{Moment6, MomentSum, translate_to_centroid};
pub use params::{FitParams, TriangleFormula};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
