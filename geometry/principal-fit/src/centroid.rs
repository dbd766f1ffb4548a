//! Mass-weighted centroid of a primitive collection.

use nalgebra::{Point3, Vector3};
use tracing::debug;

use crate::assemble::{Primitive, visit_placements};
use crate::dimension::PrimitiveDimension;
use crate::error::{FitError, FitResult};
use crate::params::FitParams;

/// Centroid of `primitives` weighted by the measure used for `dimension`.
///
/// Uses the same decomposition as [`assemble_moments`](crate::assemble_moments),
/// so a cuboid fitted as a surface is weighted by face area and a
/// tetrahedron fitted as points by its four vertices.
///
/// # Errors
///
/// Same as [`assemble_moments`](crate::assemble_moments), plus
/// [`FitError::ZeroMass`] if the total measure is not positive.
///
/// # Example
///
/// ```
/// use principal_fit::{FitParams, PrimitiveDimension, mass_centroid};
/// use shape_types::{Point3, Segment};
///
/// // A long and a short segment: the long one dominates
/// let segments = [
///     Segment::from_arrays([0.0, 0.0, 0.0], [3.0, 0.0, 0.0]),
///     Segment::from_arrays([10.0, 0.0, 0.0], [11.0, 0.0, 0.0]),
/// ];
/// let c = mass_centroid(&segments, PrimitiveDimension::Curve, &FitParams::default()).unwrap();
/// assert!((c.x - (3.0 * 1.5 + 1.0 * 10.5) / 4.0).abs() < 1e-12);
/// ```
pub fn mass_centroid<P: Primitive>(
    primitives: &[P],
    dimension: PrimitiveDimension,
    params: &FitParams,
) -> FitResult<Point3<f64>> {
    let mut weighted = Vector3::zeros();
    let mut mass = 0.0;
    visit_placements(primitives, dimension, params, |placement| {
        weighted += placement.centroid().coords * placement.measure;
        mass += placement.measure;
    })?;

    if mass <= 0.0 {
        return Err(FitError::ZeroMass { mass });
    }

    let centroid = Point3::from(weighted / mass);
    debug!(mass, x = centroid.x, y = centroid.y, z = centroid.z, "Computed mass centroid");
    Ok(centroid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use shape_types::{Cuboid, Sphere, Tetrahedron, Triangle};

    #[test]
    fn point_centroid_is_mean() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(1.0, 3.0, 0.0),
        ];
        let c = mass_centroid(&points, PrimitiveDimension::Point, &FitParams::default()).unwrap();
        assert_relative_eq!(c, Point3::new(1.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn triangles_weighted_by_area() {
        let small = Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let large = Triangle::from_arrays([10.0, 0.0, 0.0], [13.0, 0.0, 0.0], [10.0, 3.0, 0.0]);
        let params = FitParams::default();
        let c = mass_centroid(&[small, large], PrimitiveDimension::Surface, &params).unwrap();

        let expected = (small.centroid().coords * 0.5 + large.centroid().coords * 4.5) / 5.0;
        assert_relative_eq!(c.coords, expected, epsilon = 1e-12);
    }

    #[test]
    fn spheres_weighted_by_volume_or_area() {
        let spheres = [
            Sphere::new(Point3::new(0.0, 0.0, 0.0), 1.0),
            Sphere::new(Point3::new(0.0, 10.0, 0.0), 2.0),
        ];
        let params = FitParams::default();
        let solid = mass_centroid(&spheres, PrimitiveDimension::Volume, &params).unwrap();
        let shell = mass_centroid(&spheres, PrimitiveDimension::Surface, &params).unwrap();

        // Volume ratio 1:8, area ratio 1:4
        assert_relative_eq!(solid.y, 80.0 / 9.0, epsilon = 1e-12);
        assert_relative_eq!(shell.y, 40.0 / 5.0, epsilon = 1e-12);
    }

    #[test]
    fn skeleton_centroids() {
        let b = Cuboid::new(Point3::new(1.0, 2.0, 3.0), Point3::new(2.0, 6.0, 4.0));
        let params = FitParams::default();
        for dimension in [
            PrimitiveDimension::Volume,
            PrimitiveDimension::Surface,
            PrimitiveDimension::Curve,
            PrimitiveDimension::Point,
        ] {
            let c = mass_centroid(&[b], dimension, &params).unwrap();
            assert_relative_eq!(c, b.center(), epsilon = 1e-12);
        }

        let tet = Tetrahedron::new(
            Point3::origin(),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(0.0, 4.0, 0.0),
            Point3::new(0.0, 0.0, 4.0),
        );
        let c = mass_centroid(&[tet], PrimitiveDimension::Volume, &params).unwrap();
        assert_relative_eq!(c, Point3::new(1.0, 1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn empty_input() {
        let empty: [Point3<f64>; 0] = [];
        let result = mass_centroid(&empty, PrimitiveDimension::Point, &FitParams::default());
        assert_eq!(result, Err(FitError::EmptyInput));
    }
}
