//! Shape identifiers and primitive dimension tags.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dimension of the mass distribution a primitive is fitted as.
///
/// Orthogonal to the concrete shape: a [`Cuboid`](shape_types::Cuboid)
/// tagged [`Volume`](Self::Volume) is fitted by its solid interior, while the
/// same box tagged [`Surface`](Self::Surface) is fitted by its six faces.
/// A tag lower than the shape's own dimension fits its boundary skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrimitiveDimension {
    /// Isolated points, each of unit mass.
    Point,
    /// Curves weighted by length.
    Curve,
    /// Surfaces weighted by area.
    Surface,
    /// Solids weighted by volume.
    Volume,
}

impl PrimitiveDimension {
    /// Topological dimension: 0 for points up to 3 for volumes.
    #[must_use]
    pub const fn order(self) -> u8 {
        match self {
            Self::Point => 0,
            Self::Curve => 1,
            Self::Surface => 2,
            Self::Volume => 3,
        }
    }
}

impl fmt::Display for PrimitiveDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Point => "point",
            Self::Curve => "curve",
            Self::Surface => "surface",
            Self::Volume => "volume",
        };
        f.write_str(name)
    }
}

/// Concrete shape of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape {
    /// A single point.
    Point,
    /// A straight segment.
    Segment,
    /// A triangle.
    Triangle,
    /// A tetrahedron.
    Tetrahedron,
    /// An axis-aligned box.
    Cuboid,
    /// A sphere.
    Sphere,
}

impl Shape {
    /// The highest dimension this shape can be fitted as.
    ///
    /// Spheres are the exception to "any lower tag works": they support
    /// only [`PrimitiveDimension::Volume`] and [`PrimitiveDimension::Surface`].
    #[must_use]
    pub const fn native_dimension(self) -> PrimitiveDimension {
        match self {
            Self::Point => PrimitiveDimension::Point,
            Self::Segment => PrimitiveDimension::Curve,
            Self::Triangle => PrimitiveDimension::Surface,
            Self::Tetrahedron | Self::Cuboid | Self::Sphere => PrimitiveDimension::Volume,
        }
    }

    /// Whether a formula set exists for this shape under `dimension`.
    #[must_use]
    pub fn supports(self, dimension: PrimitiveDimension) -> bool {
        match self {
            Self::Sphere => dimension >= PrimitiveDimension::Surface,
            _ => dimension <= self.native_dimension(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Point => "point",
            Self::Segment => "segment",
            Self::Triangle => "triangle",
            Self::Tetrahedron => "tetrahedron",
            Self::Cuboid => "cuboid",
            Self::Sphere => "sphere",
        };
        f.write_str(name)
    }
}
