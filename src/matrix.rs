//! Dense matrix algebra on square `f64` matrices.
//!
//! These routines never mutate their inputs, elimination works on an owned augmented copy. The
//! determinant is computed by cofactor expansion along the first row, which is `O(n!)` and only
//! suitable for small matrices.

use nalgebra::DMatrix;
use tracing::{debug, warn};

use crate::error::{GraphError, Result};

/// Returns the `n x n` identity matrix.
pub fn identity(n: usize) -> DMatrix<f64> {
    DMatrix::identity(n, n)
}

/// Multiplies every entry of the matrix by `scalar`.
pub fn scalar_multiply(matrix: &DMatrix<f64>, scalar: f64) -> DMatrix<f64> {
    matrix.scale(scalar)
}

/// Subtracts `right` from `left` entry by entry.
///
/// Fails with [`GraphError::DimensionMismatch`] if the shapes differ.
pub fn subtract(left: &DMatrix<f64>, right: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    if left.shape() != right.shape() {
        return Err(GraphError::DimensionMismatch {
            left: left.shape(),
            right: right.shape(),
        });
    }

    Ok(left - right)
}

/// Computes the determinant by recursive Laplace expansion along row 0.
pub fn determinant(matrix: &DMatrix<f64>) -> Result<f64> {
    ensure_square(matrix)?;

    if matrix.is_empty() {
        return Err(GraphError::EmptyMatrix);
    }

    Ok(cofactor_expansion(matrix))
}

/// Computes the inverse with Gauss-Jordan elimination on `[M | I]`.
///
/// The determinant is checked first. Elimination doesn't swap rows, so a zero on the diagonal
/// aborts with [`GraphError::NotInvertible`] even when a row swap would have produced a usable
/// pivot.
pub fn inverse(matrix: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    let n = ensure_square(matrix)?;

    if n == 0 {
        return Err(GraphError::EmptyMatrix);
    }

    debug!(n, "inverting matrix");

    if determinant(matrix)? == 0.0 {
        return Err(GraphError::NotInvertible);
    }

    let mut augmented = DMatrix::<f64>::zeros(n, 2 * n);
    augmented.columns_mut(0, n).copy_from(matrix);
    for i in 0..n {
        augmented[(i, i + n)] = 1.0;
    }

    for pivot in 0..n {
        let pivot_value = augmented[(pivot, pivot)];

        if pivot_value == 0.0 {
            warn!(pivot, "zero pivot during elimination, no row swap is attempted");
            return Err(GraphError::NotInvertible);
        }

        for col in 0..2 * n {
            augmented[(pivot, col)] /= pivot_value;
        }

        for row in (0..n).filter(|&row| row != pivot) {
            let factor = augmented[(row, pivot)];
            for col in 0..2 * n {
                augmented[(row, col)] -= factor * augmented[(pivot, col)];
            }
        }
    }

    Ok(augmented.columns(n, n).into_owned())
}

/// Returns whether the matrix has as many rows as columns.
pub fn is_square(matrix: &DMatrix<f64>) -> bool {
    matrix.nrows() == matrix.ncols()
}

/// Returns whether the matrix is square and equal to its transpose.
pub fn is_symmetric(matrix: &DMatrix<f64>) -> bool {
    is_square(matrix) && *matrix == matrix.transpose()
}

/// Returns whether the matrix is square and every diagonal entry is zero.
pub fn has_zero_diagonal(matrix: &DMatrix<f64>) -> bool {
    is_square(matrix) && matrix.diagonal().iter().all(|&value| value == 0.0)
}

/// Returns whether the matrix is square and no entry is negative.
pub fn is_non_negative(matrix: &DMatrix<f64>) -> bool {
    is_square(matrix) && matrix.iter().all(|&value| value >= 0.0)
}

/// Checks the matrix is square and returns its order.
pub(crate) fn ensure_square(matrix: &DMatrix<f64>) -> Result<usize> {
    if !is_square(matrix) {
        return Err(GraphError::NotSquare {
            rows: matrix.nrows(),
            cols: matrix.ncols(),
        });
    }

    Ok(matrix.nrows())
}

/// Checks the vertex addresses a row of a graph with `len` vertices.
pub(crate) fn ensure_vertex(vertex: usize, len: usize) -> Result<()> {
    if vertex >= len {
        return Err(GraphError::VertexOutOfBounds { vertex, len });
    }

    Ok(())
}

fn cofactor_expansion(matrix: &DMatrix<f64>) -> f64 {
    let n = matrix.nrows();

    if n == 1 {
        return matrix[(0, 0)];
    }

    let mut det = 0.0;
    let mut sign = 1.0;
    for col in 0..n {
        let minor = matrix.clone().remove_row(0).remove_column(col);
        det += sign * matrix[(0, col)] * cofactor_expansion(&minor);
        sign = -sign;
    }

    det
}

#[cfg(test)]
mod tests {
    use nalgebra::dmatrix;

    use super::*;

    #[test]
    fn identity_matrix() {
        assert_eq!(
            identity(3),
            dmatrix![1.0, 0.0, 0.0;
                     0.0, 1.0, 0.0;
                     0.0, 0.0, 1.0]
        );
        assert!(identity(0).is_empty());
    }

    #[test]
    fn scalar_multiply_scales_every_entry() {
        let matrix = dmatrix![1.0, 2.0;
                              3.0, 4.0];

        assert_eq!(
            scalar_multiply(&matrix, 2.0),
            dmatrix![2.0, 4.0;
                     6.0, 8.0]
        );
    }

    #[test]
    fn subtract_same_shape() {
        let matrix = dmatrix![1.0, 2.0;
                              3.0, 4.0];

        assert_eq!(
            subtract(&identity(2), &matrix),
            Ok(dmatrix![0.0, -2.0;
                        -3.0, -3.0])
        );
    }

    #[test]
    fn subtract_dimension_mismatch() {
        assert_eq!(
            subtract(&identity(2), &identity(3)),
            Err(GraphError::DimensionMismatch {
                left: (2, 2),
                right: (3, 3)
            })
        );
    }

    #[test]
    fn determinant_small() {
        assert_eq!(determinant(&dmatrix![5.0]), Ok(5.0));
        assert_eq!(
            determinant(&dmatrix![1.0, 2.0;
                                  3.0, 4.0]),
            Ok(-2.0)
        );
        assert_eq!(
            determinant(&dmatrix![2.0, 0.0, 1.0;
                                  1.0, 3.0, 2.0;
                                  1.0, 1.0, 2.0]),
            Ok(6.0)
        );
    }

    #[test]
    fn determinant_rejects_non_square() {
        let matrix = DMatrix::<f64>::zeros(2, 3);

        assert_eq!(
            determinant(&matrix),
            Err(GraphError::NotSquare { rows: 2, cols: 3 })
        );
        assert_eq!(
            determinant(&DMatrix::<f64>::zeros(0, 0)),
            Err(GraphError::EmptyMatrix)
        );
    }

    #[test]
    fn inverse_two_by_two() {
        let matrix = dmatrix![1.0, 2.0;
                              3.0, 4.0];

        assert_eq!(
            inverse(&matrix),
            Ok(dmatrix![-2.0, 1.0;
                        1.5, -0.5])
        );

        // The input is left untouched.
        assert_eq!(matrix, dmatrix![1.0, 2.0; 3.0, 4.0]);
    }

    #[test]
    fn inverse_singular() {
        let matrix = dmatrix![1.0, 2.0;
                              2.0, 4.0];

        assert_eq!(inverse(&matrix), Err(GraphError::NotInvertible));
    }

    #[test]
    fn inverse_zero_pivot_without_row_swap() {
        // The determinant is -1, but the first pivot is zero and rows are never swapped.
        let matrix = dmatrix![0.0, 1.0;
                              1.0, 0.0];

        assert_eq!(determinant(&matrix), Ok(-1.0));
        assert_eq!(inverse(&matrix), Err(GraphError::NotInvertible));
    }

    #[test]
    fn validators() {
        let symmetric = dmatrix![0.0, 1.0;
                                 1.0, 0.0];
        let directed = dmatrix![0.0, 1.0;
                                0.0, 2.0];
        let negative = dmatrix![0.0, -1.0;
                                -1.0, 0.0];

        assert!(is_symmetric(&symmetric));
        assert!(!is_symmetric(&directed));
        assert!(has_zero_diagonal(&symmetric));
        assert!(!has_zero_diagonal(&directed));
        assert!(is_non_negative(&directed));
        assert!(!is_non_negative(&negative));
        assert!(!is_square(&DMatrix::<f64>::zeros(1, 2)));
    }

    #[test]
    fn vertex_bounds() {
        assert!(ensure_vertex(2, 3).is_ok());
        assert_eq!(
            ensure_vertex(3, 3),
            Err(GraphError::VertexOutOfBounds { vertex: 3, len: 3 })
        );
    }
}
