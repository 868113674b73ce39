//! Dominant eigenvalue of dense adjacency matrices.
//!
//! # Definition
//!
//! λ_max is the largest real part over the full eigenvalue spectrum of
//! the adjacency matrix. For the symmetric 0/1 adjacency of an
//! undirected graph this coincides with the Perron root, which marks
//! the convergence boundary of the Katz resolvent: `(I - αA)⁻¹` has a
//! convergent path expansion only while `α < 1/λ_max`.
//!
//! # Numerical path
//!
//! Undirected adjacencies are symmetric, so the whole spectrum is real
//! and the largest real part is simply the largest eigenvalue. The
//! symmetric tridiagonal eigensolver computes it; the general Francis
//! iteration is not used because it fails to terminate on some valid
//! adjacencies (the n ≥ 3 zero matrix and the 3-node path among them).
//!
//! # References
//!
//! - Horn & Johnson, *Matrix Analysis*, ch. 8 (Perron–Frobenius)

use nalgebra::DMatrix;

/// Largest eigenvalue of the symmetric matrix `adjacency`.
///
/// Equals the largest real part of the spectrum, since a symmetric
/// matrix has only real eigenvalues. Returns 0.0 for an empty matrix.
///
/// # Example
///
/// ```
/// use nalgebra::DMatrix;
/// use spectrank_core::dominant_eigenvalue;
///
/// // Triangle: λ_max = 2.
/// let triangle = DMatrix::from_row_slice(3, 3, &[
///     0.0, 1.0, 1.0,
///     1.0, 0.0, 1.0,
///     1.0, 1.0, 0.0,
/// ]);
/// assert!((dominant_eigenvalue(&triangle) - 2.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn dominant_eigenvalue(adjacency: &DMatrix<f64>) -> f64 {
    if adjacency.is_empty() {
        return 0.0;
    }
    adjacency
        .symmetric_eigenvalues()
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_adjacency(n: usize) -> DMatrix<f64> {
        DMatrix::from_fn(n, n, |i, j| if i == j { 0.0 } else { 1.0 })
    }

    #[test]
    fn test_complete_graph_spectrum() {
        // K_n has λ_max = n - 1.
        for n in 2..6 {
            let lambda = dominant_eigenvalue(&complete_adjacency(n));
            assert!(
                (lambda - (n - 1) as f64).abs() < 1e-9,
                "K_{n} spectral radius: {lambda}"
            );
        }
    }

    #[test]
    fn test_star_spectrum() {
        // Star with k leaves has λ_max = sqrt(k).
        let star = DMatrix::from_fn(5, 5, |i, j| {
            if (i == 0 && j != 0) || (j == 0 && i != 0) {
                1.0
            } else {
                0.0
            }
        });
        let lambda = dominant_eigenvalue(&star);
        assert!((lambda - 2.0).abs() < 1e-9, "sqrt(4) expected, got {lambda}");
    }

    #[test]
    fn test_path_spectrum() {
        // P_3 has λ_max = sqrt(2).
        let path = DMatrix::from_row_slice(3, 3, &[0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
        let lambda = dominant_eigenvalue(&path);
        assert!((lambda - 2.0_f64.sqrt()).abs() < 1e-9, "got {lambda}");
    }

    #[test]
    fn test_edgeless_spectrum_is_zero() {
        // The zero matrix has spectrum exactly {0} at every size.
        for n in 1..6 {
            let isolated = DMatrix::zeros(n, n);
            assert!(
                dominant_eigenvalue(&isolated).abs() < 1e-12,
                "edgeless n = {n}"
            );
        }
    }

    #[test]
    fn test_empty_matrix() {
        let empty = DMatrix::<f64>::zeros(0, 0);
        assert_eq!(dominant_eigenvalue(&empty), 0.0);
    }
}
