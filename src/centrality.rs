//! Degree and Katz centrality.

use nalgebra::DMatrix;
use tracing::{debug, warn};

use crate::{
    error::{GraphError, Result},
    matrix::{determinant, ensure_square, identity, inverse, scalar_multiply, subtract},
};

/// Which edges count towards a vertex's degree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Positive entries in the vertex's row. For a symmetric matrix this is the plain degree.
    #[default]
    Outgoing,
    /// Positive entries in the vertex's column.
    Incoming,
    /// Both of the above.
    Both,
}

/// Configuration for Katz centrality.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KatzConfig {
    /// Attenuation factor applied to the adjacency matrix.
    pub alpha: f64,
}

impl Default for KatzConfig {
    fn default() -> Self {
        Self { alpha: 0.5 }
    }
}

/// Computes `degree(v) / (n - 1)` for every vertex.
///
/// Only positive entries count as edges and self-loops are ignored. With [`Direction::Both`] the
/// in- and out-degrees are added and divided by `2(n - 1)`, so every score stays within `[0, 1]`.
/// A single vertex scores `0.0`.
pub fn degree_centrality(adjacency: &DMatrix<f64>, direction: Direction) -> Result<Vec<f64>> {
    let n = ensure_square(adjacency)?;

    if n < 2 {
        return Ok(vec![0.0; n]);
    }

    let outgoing = |v: usize| (0..n).filter(|&u| u != v && adjacency[(v, u)] > 0.0).count();
    let incoming = |v: usize| (0..n).filter(|&u| u != v && adjacency[(u, v)] > 0.0).count();
    let others = (n - 1) as f64;

    Ok((0..n)
        .map(|v| match direction {
            Direction::Outgoing => outgoing(v) as f64 / others,
            Direction::Incoming => incoming(v) as f64 / others,
            Direction::Both => (outgoing(v) + incoming(v)) as f64 / (2.0 * others),
        })
        .collect())
}

/// Computes Katz centrality as the row sums of `(I - αA)⁻¹`.
///
/// The adjacency matrix itself must have a nonzero determinant and survive elimination without
/// pivoting, otherwise [`GraphError::NotInvertible`] is returned before `I - αA` is formed. Since
/// elimination never swaps rows, any adjacency matrix with a zero in its top-left entry fails this
/// check.
pub fn katz_centrality(adjacency: &DMatrix<f64>, config: KatzConfig) -> Result<Vec<f64>> {
    let n = ensure_square(adjacency)?;

    debug!(n, alpha = config.alpha, "katz centrality");

    if determinant(adjacency)? == 0.0 || inverse(adjacency).is_err() {
        warn!(n, "adjacency matrix is not invertible, katz centrality is not computable");
        return Err(GraphError::NotInvertible);
    }

    let attenuated = subtract(&identity(n), &scalar_multiply(adjacency, config.alpha))?;
    let resolvent = inverse(&attenuated)?;

    Ok(resolvent.row_iter().map(|row| row.sum()).collect())
}

#[cfg(test)]
mod tests {
    use nalgebra::dmatrix;

    use super::*;

    #[test]
    fn degree_centrality_undirected() {
        let adjacency = dmatrix![0.0, 1.0, 1.0, 1.0;
                                 1.0, 0.0, 0.0, 0.0;
                                 1.0, 0.0, 0.0, 0.0;
                                 1.0, 0.0, 0.0, 0.0];

        assert_eq!(
            degree_centrality(&adjacency, Direction::Outgoing),
            Ok(vec![1.0, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0])
        );
        assert_eq!(
            degree_centrality(&adjacency, Direction::Both),
            degree_centrality(&adjacency, Direction::Outgoing)
        );
    }

    #[test]
    fn degree_centrality_directed() {
        let adjacency = dmatrix![0.0, 1.0, 1.0;
                                 0.0, 0.0, 0.0;
                                 0.0, 1.0, 0.0];

        assert_eq!(
            degree_centrality(&adjacency, Direction::Outgoing),
            Ok(vec![1.0, 0.0, 0.5])
        );
        assert_eq!(
            degree_centrality(&adjacency, Direction::Incoming),
            Ok(vec![0.0, 1.0, 0.5])
        );
        assert_eq!(
            degree_centrality(&adjacency, Direction::Both),
            Ok(vec![0.5, 0.5, 0.5])
        );
    }

    #[test]
    fn degree_centrality_ignores_self_loops() {
        let adjacency = dmatrix![1.0, 1.0;
                                 1.0, 0.0];

        assert_eq!(
            degree_centrality(&adjacency, Direction::Outgoing),
            Ok(vec![1.0, 1.0])
        );
        assert_eq!(
            degree_centrality(&dmatrix![0.0], Direction::Outgoing),
            Ok(vec![0.0])
        );
    }

    #[test]
    fn degree_centrality_ignores_negative_weights() {
        let adjacency = dmatrix![0.0, -1.0, 2.0;
                                 -1.0, 0.0, 0.0;
                                 2.0, 0.0, 0.0];

        assert_eq!(
            degree_centrality(&adjacency, Direction::Outgoing),
            Ok(vec![0.5, 0.0, 0.5])
        );
        assert_eq!(
            degree_centrality(&adjacency, Direction::Incoming),
            Ok(vec![0.5, 0.0, 0.5])
        );
    }

    #[test]
    fn katz_with_self_loop() {
        let adjacency = dmatrix![1.0, 1.0;
                                 1.0, 0.0];

        // I - A/2 = [0.5, -0.5; -0.5, 1.0], whose inverse is [4, 2; 2, 2].
        assert_eq!(
            katz_centrality(&adjacency, KatzConfig::default()),
            Ok(vec![6.0, 4.0])
        );
    }

    #[test]
    fn katz_not_computable() {
        // The determinant is nonzero but the first pivot is zero.
        let triangle = dmatrix![0.0, 1.0, 1.0;
                                1.0, 0.0, 1.0;
                                1.0, 1.0, 0.0];
        let singular = dmatrix![1.0, 1.0;
                                1.0, 1.0];

        assert_eq!(
            katz_centrality(&triangle, KatzConfig::default()),
            Err(GraphError::NotInvertible)
        );
        assert_eq!(
            katz_centrality(&singular, KatzConfig { alpha: 0.1 }),
            Err(GraphError::NotInvertible)
        );
    }
}
