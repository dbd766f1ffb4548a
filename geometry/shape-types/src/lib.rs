//! Geometric primitive types for principal component fitting.
//!
//! This crate provides the read-only shapes that the fitting engine in
//! `principal-fit` consumes, plus the line and plane types it produces:
//!
//! - [`Segment`] - A straight segment between two points
//! - [`Triangle`] - A solid triangle
//! - [`Tetrahedron`] - A solid tetrahedron
//! - [`Cuboid`] - An axis-aligned box, with its [`CuboidFace`]s
//! - [`Sphere`] - A ball / spherical shell given by center and radius
//! - [`Line`] - An infinite line (anchor point + unit direction)
//! - [`Plane`] - An infinite plane (anchor point + unit normal)
//!
//! Every primitive exposes its measure (length, area or volume), its own
//! centroid, and the boundary pieces it decomposes into.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**.
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//!
//! # Example
//!
//! ```
//! use shape_types::{Point3, Tetrahedron};
//!
//! let tet = Tetrahedron::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//! );
//!
//! assert!((tet.volume() - 1.0 / 6.0).abs() < 1e-12);
//! assert_eq!(tet.faces().len(), 4);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for all types

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod cuboid;
mod line;
mod plane;
mod segment;
mod sphere;
mod tetrahedron;
mod triangle;

pub use cuboid::{Cuboid, CuboidFace};
pub use line::Line;
pub use plane::Plane;
pub use segment::Segment;
pub use sphere::Sphere;
pub use tetrahedron::Tetrahedron;
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
