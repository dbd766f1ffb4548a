//! Moment assembly over a collection of primitives.
//!
//! Each primitive is expanded into one or more [`Placement`]s according to
//! its shape and the requested [`PrimitiveDimension`], and the placements'
//! moments and measures are summed. Boundary skeletons (a tetrahedron's
//! faces, a box's edges, ...) are expanded into pieces of the lower shape.

use nalgebra::{Matrix3, Point3, Vector3};
use shape_types::{Cuboid, CuboidFace, Segment, Sphere, Tetrahedron, Triangle};
use tracing::debug;

use crate::dimension::{PrimitiveDimension, Shape};
use crate::error::{FitError, FitResult};
use crate::moment::{Moment6, MomentSum};
use crate::params::{FitParams, TriangleFormula};
use crate::template::{Placement, Template};

/// Borrowed view of one primitive, closed over the supported shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveRef<'a> {
    /// A point.
    Point(&'a Point3<f64>),
    /// A segment.
    Segment(&'a Segment),
    /// A triangle.
    Triangle(&'a Triangle),
    /// A tetrahedron.
    Tetrahedron(&'a Tetrahedron),
    /// An axis-aligned box.
    Cuboid(&'a Cuboid),
    /// A sphere.
    Sphere(&'a Sphere),
}

impl PrimitiveRef<'_> {
    /// Shape of the viewed primitive.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Point(_) => Shape::Point,
            Self::Segment(_) => Shape::Segment,
            Self::Triangle(_) => Shape::Triangle,
            Self::Tetrahedron(_) => Shape::Tetrahedron,
            Self::Cuboid(_) => Shape::Cuboid,
            Self::Sphere(_) => Shape::Sphere,
        }
    }
}

/// A geometric primitive that can contribute mass to a fit.
///
/// Implemented for [`Point3<f64>`] and every shape in `shape-types`.
pub trait Primitive {
    /// Borrow this primitive as a [`PrimitiveRef`].
    fn as_primitive(&self) -> PrimitiveRef<'_>;
}

impl Primitive for Point3<f64> {
    fn as_primitive(&self) -> PrimitiveRef<'_> {
        PrimitiveRef::Point(self)
    }
}

impl Primitive for Segment {
    fn as_primitive(&self) -> PrimitiveRef<'_> {
        PrimitiveRef::Segment(self)
    }
}

impl Primitive for Triangle {
    fn as_primitive(&self) -> PrimitiveRef<'_> {
        PrimitiveRef::Triangle(self)
    }
}

impl Primitive for Tetrahedron {
    fn as_primitive(&self) -> PrimitiveRef<'_> {
        PrimitiveRef::Tetrahedron(self)
    }
}

impl Primitive for Cuboid {
    fn as_primitive(&self) -> PrimitiveRef<'_> {
        PrimitiveRef::Cuboid(self)
    }
}

impl Primitive for Sphere {
    fn as_primitive(&self) -> PrimitiveRef<'_> {
        PrimitiveRef::Sphere(self)
    }
}

// Lets a single call mix shapes.
impl Primitive for PrimitiveRef<'_> {
    fn as_primitive(&self) -> PrimitiveRef<'_> {
        *self
    }
}

impl<P: Primitive + ?Sized> Primitive for &P {
    fn as_primitive(&self) -> PrimitiveRef<'_> {
        (**self).as_primitive()
    }
}

fn point_placement(p: &Point3<f64>) -> Placement {
    Placement {
        template: Template::Point,
        transform: Matrix3::zeros(),
        anchor: p.coords,
        offset: Vector3::zeros(),
        measure: 1.0,
    }
}

fn segment_placement(s: &Segment) -> Placement {
    Placement {
        template: Template::Segment,
        transform: Matrix3::from_columns(&[s.start.coords, s.end.coords, Vector3::z()]),
        anchor: Vector3::zeros(),
        offset: s.midpoint().coords,
        measure: s.length(),
    }
}

fn triangle_placement(t: &Triangle, formula: TriangleFormula) -> Placement {
    let area = t.area();
    match formula {
        TriangleFormula::VertexMoment => Placement {
            template: Template::Triangle,
            transform: Matrix3::from_columns(&[t.v0.coords, t.v1.coords, t.v2.coords]),
            anchor: Vector3::zeros(),
            offset: t.centroid().coords,
            measure: area,
        },
        TriangleFormula::CentroidEdges => {
            let (e1, e2) = t.edge_vectors();
            Placement {
                template: Template::TriangleEdges,
                transform: Matrix3::from_columns(&[e1, e2, Vector3::zeros()]),
                anchor: t.centroid().coords,
                offset: Vector3::zeros(),
                measure: area,
            }
        }
    }
}

fn tetrahedron_placement(t: &Tetrahedron) -> Placement {
    let edges = t.edge_vectors();
    Placement {
        template: Template::Tetrahedron,
        transform: Matrix3::from_columns(&edges),
        anchor: t.v0.coords,
        offset: (edges[0] + edges[1] + edges[2]) * 0.25,
        measure: t.volume(),
    }
}

fn cuboid_placement(b: &Cuboid) -> Placement {
    let size = b.size();
    Placement {
        template: Template::CuboidSolid,
        transform: Matrix3::from_diagonal(&size),
        anchor: b.min.coords,
        offset: size * 0.5,
        measure: b.volume(),
    }
}

// A face is a box with a zero third edge.
fn face_placement(f: &CuboidFace) -> Placement {
    Placement {
        template: Template::CuboidFace,
        transform: Matrix3::from_columns(&[f.u, f.v, Vector3::zeros()]),
        anchor: f.corner.coords,
        offset: (f.u + f.v) * 0.5,
        measure: f.area(),
    }
}

fn sphere_placement(s: &Sphere, dimension: PrimitiveDimension) -> Placement {
    let (template, measure) = if dimension == PrimitiveDimension::Volume {
        (Template::SphereSolid, s.volume())
    } else {
        (Template::SphereShell, s.surface_area())
    };
    Placement {
        template,
        transform: Matrix3::from_diagonal_element(s.radius),
        anchor: s.center.coords,
        offset: Vector3::zeros(),
        measure,
    }
}

/// Expand `primitive` into placements under `dimension`, passing each to `emit`.
///
/// # Errors
///
/// Returns [`FitError::UnsupportedDimension`] if the pair has no formula
/// set, or whatever `emit` returns.
pub(crate) fn for_each_placement<F>(
    primitive: PrimitiveRef<'_>,
    dimension: PrimitiveDimension,
    params: &FitParams,
    mut emit: F,
) -> FitResult<()>
where
    F: FnMut(Placement) -> FitResult<()>,
{
    use PrimitiveDimension as D;

    let shape = primitive.shape();
    if !shape.supports(dimension) {
        return Err(FitError::unsupported(shape, dimension));
    }

    match (primitive, dimension) {
        (PrimitiveRef::Point(p), _) => emit(point_placement(p)),

        (PrimitiveRef::Segment(s), D::Curve) => emit(segment_placement(s)),
        (PrimitiveRef::Segment(s), _) => {
            s.endpoints().iter().try_for_each(|p| emit(point_placement(p)))
        }

        (PrimitiveRef::Triangle(t), D::Surface) => {
            emit(triangle_placement(t, params.triangle_formula))
        }
        (PrimitiveRef::Triangle(t), D::Curve) => {
            t.edges().iter().try_for_each(|e| emit(segment_placement(e)))
        }
        (PrimitiveRef::Triangle(t), _) => {
            t.vertices().iter().try_for_each(|p| emit(point_placement(p)))
        }

        (PrimitiveRef::Tetrahedron(t), D::Volume) => emit(tetrahedron_placement(t)),
        (PrimitiveRef::Tetrahedron(t), D::Surface) => {
            let formula = params.triangle_formula;
            t.faces().iter().try_for_each(|f| emit(triangle_placement(f, formula)))
        }
        (PrimitiveRef::Tetrahedron(t), D::Curve) => {
            t.edges().iter().try_for_each(|e| emit(segment_placement(e)))
        }
        (PrimitiveRef::Tetrahedron(t), D::Point) => {
            t.vertices().iter().try_for_each(|p| emit(point_placement(p)))
        }

        (PrimitiveRef::Cuboid(b), D::Volume) => emit(cuboid_placement(b)),
        (PrimitiveRef::Cuboid(b), D::Surface) => {
            b.faces().iter().try_for_each(|f| emit(face_placement(f)))
        }
        (PrimitiveRef::Cuboid(b), D::Curve) => {
            b.edges().iter().try_for_each(|e| emit(segment_placement(e)))
        }
        (PrimitiveRef::Cuboid(b), D::Point) => {
            b.corners().iter().try_for_each(|p| emit(point_placement(p)))
        }

        (PrimitiveRef::Sphere(s), _) => emit(sphere_placement(s, dimension)),
    }
}

/// Visit every placement of every primitive, rejecting degenerate pieces.
pub(crate) fn visit_placements<P, F>(
    primitives: &[P],
    dimension: PrimitiveDimension,
    params: &FitParams,
    mut visit: F,
) -> FitResult<()>
where
    P: Primitive,
    F: FnMut(&Placement),
{
    if primitives.is_empty() {
        return Err(FitError::EmptyInput);
    }

    for (index, primitive) in primitives.iter().enumerate() {
        let primitive = primitive.as_primitive();
        let shape = primitive.shape();
        for_each_placement(primitive, dimension, params, |placement| {
            let measure = placement.measure;
            if !measure.is_finite() || measure <= 0.0 {
                return Err(FitError::degenerate(shape, index, measure));
            }
            visit(&placement);
            Ok(())
        })?;
    }
    Ok(())
}

/// Assemble the second moment about the origin and the total mass.
///
/// The result is **not** centered; use [`MomentSum::about`] (or
/// [`covariance`]) to translate it to a centroid.
///
/// # Errors
///
/// - [`FitError::EmptyInput`] if `primitives` is empty
/// - [`FitError::UnsupportedDimension`] if the shape cannot be fitted as `dimension`
/// - [`FitError::DegeneratePrimitive`] if any piece has zero measure
///
/// # Example
///
/// ```
/// use principal_fit::{FitParams, PrimitiveDimension, assemble_moments};
/// use shape_types::{Point3, Segment};
///
/// let segments = [Segment::new(Point3::origin(), Point3::new(2.0, 0.0, 0.0))];
/// let params = FitParams::default();
/// let sum = assemble_moments(&segments, PrimitiveDimension::Curve, &params).unwrap();
///
/// assert!((sum.mass - 2.0).abs() < 1e-12);
/// // ∫ x² ds over [0, 2]
/// assert!((sum.moment[0] - 8.0 / 3.0).abs() < 1e-12);
/// ```
pub fn assemble_moments<P: Primitive>(
    primitives: &[P],
    dimension: PrimitiveDimension,
    params: &FitParams,
) -> FitResult<MomentSum> {
    accumulate(primitives, &Vector3::zeros(), dimension, params)
}

/// Second moment about `center` and the number of placed pieces.
///
/// Each piece is expressed relative to `center` before it is summed, so point
/// masses contribute `(p - c)(p - c)ᵀ` directly.
///
/// # Errors
///
/// Same as [`assemble_moments`], plus [`FitError::ZeroMass`] if the total
/// measure is not positive.
pub(crate) fn centered_moments<P: Primitive>(
    primitives: &[P],
    center: &Point3<f64>,
    dimension: PrimitiveDimension,
    params: &FitParams,
) -> FitResult<(Moment6, usize)> {
    let sum = accumulate(primitives, &center.coords, dimension, params)?;
    if sum.mass.is_nan() || sum.mass <= 0.0 {
        return Err(FitError::ZeroMass { mass: sum.mass });
    }
    Ok((sum.moment, sum.placements))
}

fn accumulate<P: Primitive>(
    primitives: &[P],
    center: &Vector3<f64>,
    dimension: PrimitiveDimension,
    params: &FitParams,
) -> FitResult<MomentSum> {
    let mut sum = MomentSum::default();
    visit_placements(primitives, dimension, params, |placement| {
        sum.moment += placement.moment_about(center);
        sum.mass += placement.measure;
        sum.placements += 1;
    })?;

    debug!(
        primitives = primitives.len(),
        placements = sum.placements,
        mass = sum.mass,
        %dimension,
        "Assembled second moments"
    );
    Ok(sum)
}

/// Covariance of `primitives` about `centroid`.
///
/// `centroid` is normally the [`mass_centroid`](crate::mass_centroid) of the
/// same primitives under the same dimension, in which case the result equals
/// [`assemble_moments`] followed by [`MomentSum::about`]. Moments are
/// accumulated about `centroid` directly, so a point set yields
/// `Σ (p - c)(p - c)ᵀ` exactly and any other point yields the second moment
/// about that point.
///
/// # Errors
///
/// Same as [`assemble_moments`], plus [`FitError::ZeroMass`].
pub fn covariance<P: Primitive>(
    primitives: &[P],
    centroid: &Point3<f64>,
    dimension: PrimitiveDimension,
    params: &FitParams,
) -> FitResult<Moment6> {
    centered_moments(primitives, centroid, dimension, params).map(|(moment, _)| moment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params() -> FitParams {
        FitParams::default()
    }

    /// Sample covariance `Σ (p - c)(p - c)ᵀ` computed directly.
    fn direct_covariance(points: &[Point3<f64>]) -> (Point3<f64>, Matrix3<f64>) {
        let n = points.len() as f64;
        let c = Point3::from(points.iter().fold(Vector3::zeros(), |acc, p| acc + p.coords) / n);
        let cov = points.iter().fold(Matrix3::zeros(), |acc, p| {
            let d = p - c;
            acc + d * d.transpose()
        });
        (c, cov)
    }

    #[test]
    fn point_set_matches_sample_covariance() {
        let points = vec![
            Point3::new(1.0, 2.0, 0.5),
            Point3::new(-1.0, 0.0, 2.0),
            Point3::new(3.0, -2.0, 1.0),
            Point3::new(0.0, 1.0, -1.0),
        ];
        let (c, expected) = direct_covariance(&points);
        let sum = assemble_moments(&points, PrimitiveDimension::Point, &params()).unwrap();
        assert_relative_eq!(sum.mass, 4.0);

        let cov = sum.about(&c).unwrap();
        assert_relative_eq!(cov.to_matrix(), expected, epsilon = 1e-12);
    }

    #[test]
    fn single_segment() {
        let segments = [Segment::new(Point3::origin(), Point3::new(2.0, 0.0, 0.0))];
        let cov = covariance(
            &segments,
            &Point3::new(1.0, 0.0, 0.0),
            PrimitiveDimension::Curve,
            &params(),
        )
        .unwrap();

        // L³ / 12
        assert_relative_eq!(cov[0], 2.0 / 3.0, epsilon = 1e-12);
        for k in 1..6 {
            assert_relative_eq!(cov[k], 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn triangle_formulas_agree() {
        let triangles = [
            Triangle::from_arrays([1.0, 0.0, 2.0], [4.0, 1.0, 0.0], [0.0, 3.0, 1.0]),
            Triangle::from_arrays([-2.0, 5.0, 1.0], [0.0, 0.0, 0.0], [3.0, 3.0, 3.0]),
        ];
        let by_vertex =
            assemble_moments(&triangles, PrimitiveDimension::Surface, &params()).unwrap();
        let by_edges = assemble_moments(
            &triangles,
            PrimitiveDimension::Surface,
            &params().with_triangle_formula(TriangleFormula::CentroidEdges),
        )
        .unwrap();

        assert_relative_eq!(by_vertex.mass, by_edges.mass);
        assert_relative_eq!(
            by_vertex.moment.to_matrix(),
            by_edges.moment.to_matrix(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn unit_triangle_moment() {
        // Right triangle with legs on x and y: ∫ x² dA = 1/12, ∫ x y dA = 1/24
        let triangles = [Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0])];
        let sum = assemble_moments(&triangles, PrimitiveDimension::Surface, &params()).unwrap();
        assert_relative_eq!(sum.mass, 0.5);
        assert_relative_eq!(sum.moment[0], 1.0 / 12.0, epsilon = 1e-15);
        assert_relative_eq!(sum.moment[1], 1.0 / 24.0, epsilon = 1e-15);
        assert_relative_eq!(sum.moment[5], 0.0);
    }

    #[test]
    fn tetrahedron_covariance_about_own_centroid() {
        // Offset corner tetrahedron: covariance is translation invariant
        let base = Tetrahedron::new(
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        );
        let shift = Vector3::new(3.0, -2.0, 5.0);
        let moved = Tetrahedron::new(
            base.v0 + shift,
            base.v1 + shift,
            base.v2 + shift,
            base.v3 + shift,
        );

        let dim = PrimitiveDimension::Volume;
        let a = covariance(&[base], &base.centroid(), dim, &params()).unwrap();
        let b = covariance(&[moved], &moved.centroid(), dim, &params()).unwrap();
        assert_relative_eq!(a.to_matrix(), b.to_matrix(), epsilon = 1e-12);

        // Var(x) of the unit corner tetrahedron: V * (1/10 - 1/16) * ... = (1/6) * 3/80
        assert_relative_eq!(a[0], 1.0 / 160.0, epsilon = 1e-12);
    }

    #[test]
    fn box_covariance_about_own_centroid() {
        let b = Cuboid::new(Point3::new(2.0, -1.0, 4.0), Point3::new(5.0, 1.0, 5.0));
        let cov = covariance(&[b], &b.center(), PrimitiveDimension::Volume, &params()).unwrap();
        let v = b.volume();
        // V * a² / 12 along each axis, no cross terms
        assert_relative_eq!(cov[0], v * 9.0 / 12.0, epsilon = 1e-10);
        assert_relative_eq!(cov[2], v * 4.0 / 12.0, epsilon = 1e-10);
        assert_relative_eq!(cov[5], v / 12.0, epsilon = 1e-10);
        assert_relative_eq!(cov[1], 0.0, epsilon = 1e-10);
        assert_relative_eq!(cov[3], 0.0, epsilon = 1e-10);
        assert_relative_eq!(cov[4], 0.0, epsilon = 1e-10);
    }

    #[test]
    fn sphere_measures_include_pi() {
        let spheres = [Sphere::new(Point3::new(1.0, 0.0, 0.0), 2.0)];
        let solid = assemble_moments(&spheres, PrimitiveDimension::Volume, &params()).unwrap();
        let shell = assemble_moments(&spheres, PrimitiveDimension::Surface, &params()).unwrap();
        assert_relative_eq!(solid.mass, spheres[0].volume());
        assert_relative_eq!(shell.mass, spheres[0].surface_area());

        // Shell: Var(x) = A r² / 3; ball: Var(x) = V r² / 5
        let c = spheres[0].center;
        let shell_cov = shell.about(&c).unwrap();
        let solid_cov = solid.about(&c).unwrap();
        assert_relative_eq!(shell_cov[0], shell.mass * 4.0 / 3.0, epsilon = 1e-10);
        assert_relative_eq!(solid_cov[0], solid.mass * 4.0 / 5.0, epsilon = 1e-10);
    }

    #[test]
    fn skeleton_pieces_are_counted() {
        let tet = Tetrahedron::new(
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        );
        let p = params();
        let faces = assemble_moments(&[tet], PrimitiveDimension::Surface, &p).unwrap();
        let edges = assemble_moments(&[tet], PrimitiveDimension::Curve, &p).unwrap();
        let vertices = assemble_moments(&[tet], PrimitiveDimension::Point, &p).unwrap();

        assert_eq!(faces.placements, 4);
        assert_eq!(edges.placements, 6);
        assert_eq!(vertices.placements, 4);
        assert_relative_eq!(vertices.mass, 4.0);
        assert_relative_eq!(edges.mass, 3.0 + 3.0 * 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn degenerate_primitive_reports_index() {
        let segments = [
            Segment::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            Segment::from_arrays([2.0, 2.0, 2.0], [2.0, 2.0, 2.0]),
        ];
        let result = assemble_moments(&segments, PrimitiveDimension::Curve, &params());
        assert_eq!(
            result,
            Err(FitError::DegeneratePrimitive {
                shape: Shape::Segment,
                index: 1,
                measure: 0.0,
            })
        );
    }

    #[test]
    fn flat_box_surface_is_degenerate() {
        let b = Cuboid::new(Point3::origin(), Point3::new(1.0, 1.0, 0.0));
        let result = assemble_moments(&[b], PrimitiveDimension::Surface, &params());
        assert!(matches!(result, Err(FitError::DegeneratePrimitive { index: 0, .. })));
    }

    #[test]
    fn unsupported_and_empty() {
        let spheres = [Sphere::new(Point3::origin(), 1.0)];
        let result = assemble_moments(&spheres, PrimitiveDimension::Curve, &params());
        assert!(matches!(result, Err(FitError::UnsupportedDimension { .. })));

        let points = [Point3::origin()];
        let result = assemble_moments(&points, PrimitiveDimension::Volume, &params());
        assert!(matches!(result, Err(FitError::UnsupportedDimension { .. })));

        let empty: [Triangle; 0] = [];
        let result = assemble_moments(&empty, PrimitiveDimension::Surface, &params());
        assert_eq!(result, Err(FitError::EmptyInput));
    }

    #[test]
    fn assembly_is_deterministic() {
        let triangles = [
            Triangle::from_arrays([0.1, 0.2, 0.3], [4.0, 1.5, -2.0], [0.7, 3.3, 1.1]),
            Triangle::from_arrays([-2.0, 5.0, 1.0], [0.0, 0.0, 0.0], [3.0, 3.0, 3.0]),
        ];
        let a = assemble_moments(&triangles, PrimitiveDimension::Surface, &params()).unwrap();
        let b = assemble_moments(&triangles, PrimitiveDimension::Surface, &params()).unwrap();
        assert_eq!(a, b);
    }
}
