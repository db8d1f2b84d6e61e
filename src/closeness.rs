//! A module for computing closeness centrality from shortest distances.

use nalgebra::DMatrix;
use tracing::debug;

use crate::{error::Result, matrix::ensure_square, path::floyd_warshall};

/// Computes `(n - 1) / Σ d(v, u)` for every vertex `v`, summing over the vertices `u` it reaches.
///
/// Unreachable vertices don't contribute to the sum. A vertex that reaches nothing scores `0.0`.
pub fn closeness_centrality(adjacency: &DMatrix<f64>) -> Result<Vec<f64>> {
    let distances = floyd_warshall(adjacency)?;

    closeness_from_distances(&distances)
}

/// Computes closeness centrality from an already computed distance matrix.
pub fn closeness_from_distances(distances: &DMatrix<f64>) -> Result<Vec<f64>> {
    let n = ensure_square(distances)?;

    debug!(n, "closeness centrality");

    Ok((0..n)
        .map(|v| {
            let total: f64 = (0..n)
                .filter(|&u| u != v && distances[(v, u)].is_finite())
                .map(|u| distances[(v, u)])
                .sum();

            if total == 0.0 {
                0.0
            } else {
                (n - 1) as f64 / total
            }
        })
        .collect())
}
