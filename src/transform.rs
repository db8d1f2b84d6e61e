//! Matrices derived entry-wise from an adjacency matrix.

use nalgebra::DMatrix;

use crate::{error::Result, matrix::ensure_square};

/// Constructs the laplacian matrix of an adjacency matrix.
///
/// The diagonal holds the number of nonzero entries in each row (the unweighted out-degree) and
/// the off-diagonal entries are the negated edge weights. Self-loop weights don't contribute to the
/// diagonal.
pub fn laplacian(adjacency: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    let n = ensure_square(adjacency)?;

    Ok(DMatrix::from_fn(n, n, |i, j| {
        if i == j {
            adjacency.row(i).iter().filter(|&&w| w != 0.0).count() as f64
        } else {
            -adjacency[(i, j)]
        }
    }))
}

/// Masks the matrix to its upper Hessenberg shape, zeroing every entry below the first
/// subdiagonal.
///
/// This is a mask, not a similarity transform: the kept entries are copied as they are.
pub fn hessenberg(matrix: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    mask(matrix, |i, j| j <= i + 1)
}

/// Keeps the diagonal and everything below it.
pub fn lower_triangle(matrix: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    mask(matrix, |i, j| j <= i)
}

/// Keeps the diagonal and everything above it.
pub fn upper_triangle(matrix: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    mask(matrix, |i, j| j >= i)
}

fn mask(matrix: &DMatrix<f64>, keep: impl Fn(usize, usize) -> bool) -> Result<DMatrix<f64>> {
    let n = ensure_square(matrix)?;

    Ok(DMatrix::from_fn(n, n, |i, j| {
        if keep(i, j) {
            matrix[(i, j)]
        } else {
            0.0
        }
    }))
}
