//! A module for computing betweenness centrality from shortest distances.
//!
//! A vertex `v` lies between `i` and `j` when `d(i, v) + d(v, j) == d(i, j)`. The test only detects
//! that `v` sits on *some* shortest path, shortest paths are never enumerated or counted. Each
//! such ordered pair contributes `1 / d(i, j)`.

use itertools::iproduct;
use nalgebra::DMatrix;
use tracing::debug;

use crate::{error::Result, matrix::ensure_square, path::floyd_warshall};

/// Computes the betweenness of every vertex.
///
/// The distances are computed once with Floyd-Warshall, so the whole computation is `O(n³)`.
pub fn betweenness_centrality(adjacency: &DMatrix<f64>) -> Result<Vec<f64>> {
    let distances = floyd_warshall(adjacency)?;

    betweenness_from_distances(&distances)
}

/// Computes betweenness centrality from an already computed distance matrix.
pub fn betweenness_from_distances(distances: &DMatrix<f64>) -> Result<Vec<f64>> {
    let n = ensure_square(distances)?;

    debug!(n, "betweenness centrality");

    Ok((0..n)
        .map(|v| betweenness_for_vertex(v, distances))
        .collect())
}

fn betweenness_for_vertex(v: usize, distances: &DMatrix<f64>) -> f64 {
    let n = distances.nrows();

    iproduct!(0..n, 0..n)
        .filter(|&(i, j)| i != j && i != v && j != v)
        .filter_map(|(i, j)| {
            let direct = distances[(i, j)];
            if !direct.is_finite() || direct <= 0.0 {
                return None;
            }

            let (to_v, from_v) = (distances[(i, v)], distances[(v, j)]);
            if !to_v.is_finite() || !from_v.is_finite() {
                return None;
            }

            // Exact comparison, rounding in the detour keeps `v` off the path.
            (to_v + from_v == direct).then_some(1.0 / direct)
        })
        .fold(0.0, |total, weight| total + weight)
}

#[cfg(test)]
mod tests {
    use nalgebra::dmatrix;

    use super::*;

    #[test]
    fn betweenness_of_line() {
        let adjacency = dmatrix![0.0, 1.0, 0.0, 0.0;
                                 1.0, 0.0, 1.0, 0.0;
                                 0.0, 1.0, 0.0, 1.0;
                                 0.0, 0.0, 1.0, 0.0];

        let betweenness = betweenness_centrality(&adjacency).unwrap();

        // 1 sits on (0, 2) at distance 2 and on (0, 3) at distance 3, in both directions.
        let inner = 2.0 * (1.0 / 2.0 + 1.0 / 3.0);
        assert_eq!(betweenness[0], 0.0);
        assert!((betweenness[1] - inner).abs() < 1e-12);
        assert!((betweenness[2] - inner).abs() < 1e-12);
        assert_eq!(betweenness[3], 0.0);
    }

    #[test]
    fn betweenness_counts_membership_not_multiplicity() {
        // Two shortest paths from 0 to 3, through 1 and through 2.
        let adjacency = dmatrix![0.0, 1.0, 1.0, 0.0;
                                 1.0, 0.0, 0.0, 1.0;
                                 1.0, 0.0, 0.0, 1.0;
                                 0.0, 1.0, 1.0, 0.0];

        let betweenness = betweenness_centrality(&adjacency).unwrap();

        // Each of 1 and 2 gets the full 1 / 2 for (0, 3) and (3, 0), not half of it.
        assert_eq!(betweenness, vec![1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn disconnected_pairs_are_skipped() {
        let adjacency = dmatrix![0.0, 1.0, 0.0;
                                 1.0, 0.0, 0.0;
                                 0.0, 0.0, 0.0];

        assert_eq!(betweenness_centrality(&adjacency), Ok(vec![0.0, 0.0, 0.0]));
    }

    #[test]
    fn detour_must_match_exactly() {
        // 0.1 + 0.2 rounds above the direct 0.3, so 1 is not between 0 and 2.
        let adjacency = dmatrix![0.0, 0.1, 0.3;
                                 0.1, 0.0, 0.2;
                                 0.3, 0.2, 0.0];

        assert_eq!(betweenness_centrality(&adjacency), Ok(vec![0.0, 0.0, 0.0]));
    }

    #[test]
    fn no_contribution_is_positive_zero() {
        let adjacency = dmatrix![0.0, 1.0, 0.0;
                                 1.0, 0.0, 1.0;
                                 0.0, 1.0, 0.0];

        let betweenness = betweenness_centrality(&adjacency).unwrap();

        assert_eq!(betweenness, vec![0.0, 1.0, 0.0]);
        assert!(betweenness.iter().all(|b| b.is_sign_positive()));
    }
}
