//! Symmetric 3x3 eigendecomposition with descending ordering.

use nalgebra::{SymmetricEigen, Vector3};

use crate::moment::Moment6;

/// Eigenvalues and eigenvectors of a symmetric 3x3 matrix.
///
/// Sorted so that `values[0] >= values[1] >= values[2]`, with `vectors[i]`
/// the unit eigenvector of `values[i]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenDecomposition {
    /// Eigenvalues, descending.
    pub values: [f64; 3],
    /// Unit eigenvectors, matching `values`.
    pub vectors: [Vector3<f64>; 3],
}

/// Decompose a packed symmetric matrix.
///
/// Eigenvectors at exactly tied eigenvalues are not uniquely determined;
/// callers must not rely on their direction within the tied subspace.
///
/// # Example
///
/// ```
/// use principal_fit::{Moment6, eigen_symmetric};
///
/// let m = Moment6([1.0, 0.0, 3.0, 0.0, 0.0, 2.0]);
/// let eigen = eigen_symmetric(&m);
/// assert!((eigen.values[0] - 3.0).abs() < 1e-12);
/// assert!(eigen.vectors[0].y.abs() > 0.999);
/// ```
#[must_use]
pub fn eigen_symmetric(matrix: &Moment6) -> EigenDecomposition {
    let eigen = SymmetricEigen::new(matrix.to_matrix());
    let eigenvalues = eigen.eigenvalues;
    let eigenvectors = eigen.eigenvectors;

    // Sort by eigenvalue (descending)
    let mut indices = [0usize, 1, 2];
    indices.sort_by(|&a, &b| {
        eigenvalues[b]
            .partial_cmp(&eigenvalues[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    EigenDecomposition {
        values: indices.map(|i| eigenvalues[i]),
        vectors: indices.map(|i| eigenvectors.column(i).into_owned()),
    }
}
