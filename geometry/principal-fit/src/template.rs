//! Canonical second-moment templates and their placement in world space.
//!
//! Every supported `(shape, dimension)` pair maps to a constant 3x3 template:
//! the second moment of a canonical unit instance of the shape. A concrete
//! primitive is a [`Placement`] of that template: an affine map `T` built
//! from its vertices (or radius), an anchor point, and its measure. Its
//! moment about the origin is
//!
//! ```text
//! scale * measure * T M Tᵀ + measure * (a oᵀ + o aᵀ + a aᵀ)
//! ```
//!
//! where `a` is the anchor and `o` the offset from the anchor to the
//! primitive's own centroid. The second term is the parallel-axis shift from
//! the anchor back to the origin. Taking `a` relative to another center `c`
//! gives the moment about `c` without forming the origin moment first.

use nalgebra::{Matrix3, Point3, Vector3};

use crate::moment::Moment6;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;

/// Unit point mass.
const POINT: [f64; 9] = [
    1.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, //
    0.0, 0.0, 1.0,
];

/// Segment with endpoint columns `[p0 p1 ·]`, parameterized over `[0, 1]`.
const SEGMENT: [f64; 9] = [
    ONE_THIRD, ONE_SIXTH, 0.0, //
    ONE_SIXTH, ONE_THIRD, 0.0, //
    0.0, 0.0, 0.0,
];

/// Triangle with vertex columns `[v0 v1 v2]` (barycentric second moments / 2).
const TRIANGLE: [f64; 9] = [
    1.0 / 12.0, 1.0 / 24.0, 1.0 / 24.0, //
    1.0 / 24.0, 1.0 / 12.0, 1.0 / 24.0, //
    1.0 / 24.0, 1.0 / 24.0, 1.0 / 12.0,
];

/// Triangle with edge columns `[e1 e2 ·]`, about its own centroid.
const TRIANGLE_EDGES: [f64; 9] = [
    1.0 / 36.0, -1.0 / 72.0, 0.0, //
    -1.0 / 72.0, 1.0 / 36.0, 0.0, //
    0.0, 0.0, 0.0,
];

/// Tetrahedron with edge columns from `v0`.
const TETRAHEDRON: [f64; 9] = [
    1.0 / 60.0, 1.0 / 120.0, 1.0 / 120.0, //
    1.0 / 120.0, 1.0 / 60.0, 1.0 / 120.0, //
    1.0 / 120.0, 1.0 / 120.0, 1.0 / 60.0,
];

/// Unit cube `[0, 1]³` about its corner. A face is the same box with one
/// edge column zeroed.
const CUBE: [f64; 9] = [
    ONE_THIRD, 0.25, 0.25, //
    0.25, ONE_THIRD, 0.25, //
    0.25, 0.25, ONE_THIRD,
];

/// Unit ball about its center.
const BALL: [f64; 9] = [
    4.0 / 15.0, 0.0, 0.0, //
    0.0, 4.0 / 15.0, 0.0, //
    0.0, 0.0, 4.0 / 15.0,
];

/// Unit sphere shell about its center.
const SHELL: [f64; 9] = [
    4.0 / 3.0, 0.0, 0.0, //
    0.0, 4.0 / 3.0, 0.0, //
    0.0, 0.0, 4.0 / 3.0,
];

/// Canonical second-moment template, one per formula set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Isolated unit point.
    Point,
    /// Uniform segment.
    Segment,
    /// Solid triangle, vertex-anchored.
    Triangle,
    /// Solid triangle, edge vectors about its centroid.
    TriangleEdges,
    /// Solid tetrahedron.
    Tetrahedron,
    /// Solid box.
    CuboidSolid,
    /// One rectangular box face.
    CuboidFace,
    /// Solid ball.
    SphereSolid,
    /// Spherical shell.
    SphereShell,
}

impl Template {
    /// The constant template matrix.
    #[must_use]
    pub fn matrix(self) -> Matrix3<f64> {
        let entries = match self {
            Self::Point => &POINT,
            Self::Segment => &SEGMENT,
            Self::Triangle => &TRIANGLE,
            Self::TriangleEdges => &TRIANGLE_EDGES,
            Self::Tetrahedron => &TETRAHEDRON,
            Self::CuboidSolid | Self::CuboidFace => &CUBE,
            Self::SphereSolid => &BALL,
            Self::SphereShell => &SHELL,
        };
        Matrix3::from_row_slice(entries)
    }

    /// Factor applied to the measure before scaling the transformed template.
    ///
    /// This is the ratio between the canonical instance's own measure and
    /// the normalization the template was integrated with (e.g. the
    /// reference triangle has area 1/2, so its factor is 2).
    #[must_use]
    pub const fn measure_scale(self) -> f64 {
        match self {
            Self::Point | Self::Segment | Self::CuboidSolid | Self::CuboidFace => 1.0,
            Self::Triangle | Self::TriangleEdges => 2.0,
            Self::Tetrahedron => 6.0,
            Self::SphereSolid => 0.75,
            Self::SphereShell => 0.25,
        }
    }
}

/// One placed instance of a [`Template`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Formula set.
    pub template: Template,
    /// Affine map from the canonical frame to world space.
    pub transform: Matrix3<f64>,
    /// Point the transformed template is expressed about.
    pub anchor: Vector3<f64>,
    /// Offset from `anchor` to this piece's own centroid.
    pub offset: Vector3<f64>,
    /// Length, area, volume, or 1 for a point.
    pub measure: f64,
}

impl Placement {
    /// Centroid of this piece.
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        Point3::from(self.anchor + self.offset)
    }

    /// Second moment of this piece about the origin.
    #[must_use]
    pub fn moment(&self) -> Moment6 {
        self.moment_about(&Vector3::zeros())
    }

    /// Second moment of this piece about `center`.
    ///
    /// A point mass is the outer product `(p - c)(p - c)ᵀ` with nothing to
    /// cancel, so a symmetric point set keeps exact eigenvalue ties wherever
    /// it sits.
    #[must_use]
    pub fn moment_about(&self, center: &Vector3<f64>) -> Moment6 {
        let a = self.anchor - center;
        if self.template == Template::Point {
            return Moment6::outer(&a, self.measure);
        }

        let t = &self.transform;
        let local = t * self.template.matrix() * t.transpose()
            * (self.template.measure_scale() * self.measure);

        let o = &self.offset;
        let shift = (a * o.transpose() + o * a.transpose() + a * a.transpose()) * self.measure;

        Moment6::from_matrix(&(local + shift))
    }
}
