//! PageRank by power iteration over a dense adjacency matrix.
//!
//! The iteration always runs for the configured number of rounds, there is no convergence check.
//! Vertices without outgoing edges keep the mass they receive out of the next round, it isn't
//! redistributed, so the scores of a graph with such vertices sum to less than one.

use nalgebra::DMatrix;
use tracing::{debug, trace, warn};

use crate::{
    error::{GraphError, Result},
    matrix::ensure_square,
    measures::row_degree,
};

/// Configuration for PageRank.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankConfig {
    /// Probability of following an edge rather than jumping to a random vertex.
    pub damping_factor: f64,
    /// Number of rounds of power iteration.
    pub iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            iterations: 100,
        }
    }
}

/// Computes the PageRank score of every vertex.
///
/// Scores start at `1 / n`. Each round a vertex receives `d * score(j) / out_degree(j)` from every
/// `j` with a positive entry `(j, i)`, plus `(1 - d) / n`.
pub fn pagerank(adjacency: &DMatrix<f64>, config: PageRankConfig) -> Result<Vec<f64>> {
    let n = ensure_square(adjacency)?;

    if !(0.0..=1.0).contains(&config.damping_factor) {
        return Err(GraphError::InvalidParameter(format!(
            "damping factor must be within [0, 1], got {}",
            config.damping_factor
        )));
    }

    if n == 0 {
        return Ok(vec![]);
    }

    debug!(
        n,
        damping_factor = config.damping_factor,
        iterations = config.iterations,
        "pagerank"
    );

    let out_degrees: Vec<usize> = (0..n).map(|v| row_degree(adjacency, v)).collect();

    let dangling = out_degrees.iter().filter(|&&d| d == 0).count();
    if dangling > 0 {
        warn!(dangling, "vertices without outgoing edges, their mass is not redistributed");
    }

    let teleport = (1.0 - config.damping_factor) / n as f64;
    let mut scores = vec![1.0 / n as f64; n];

    for iteration in 0..config.iterations {
        let next: Vec<f64> = (0..n)
            .map(|i| {
                let inflow: f64 = (0..n)
                    .filter(|&j| adjacency[(j, i)] > 0.0)
                    .map(|j| config.damping_factor * scores[j] / out_degrees[j] as f64)
                    .sum();

                inflow + teleport
            })
            .collect();

        scores = next;

        trace!(iteration, mass = scores.iter().sum::<f64>(), "pagerank round");
    }

    Ok(scores)
}
