//! Agglomerative clustering of vertices over a distance matrix.
//!
//! Clusters are compared through their representatives, the first point each of them received.
//! The closest pair is merged into a cluster holding the first cluster's points followed by the
//! second's, recorded at half the distance between the representatives. Merging stops once `k`
//! clusters remain.
//!
//! Any square matrix can be fed in. Passing an adjacency matrix uses its weights as distances
//! directly, without a shortest path transform.

use itertools::Itertools;
use nalgebra::DMatrix;
use tracing::{debug, trace};

use crate::{
    error::{GraphError, Result},
    matrix::ensure_square,
};

/// A group of vertices and the distance at which it was formed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cluster {
    points: Vec<usize>,
    distance: f64,
}

impl Cluster {
    fn singleton(point: usize) -> Self {
        Self {
            points: vec![point],
            distance: 0.0,
        }
    }

    /// Returns the vertices in the order they joined the cluster.
    pub fn points(&self) -> &[usize] {
        &self.points
    }

    /// Returns half the distance at which the cluster was merged, `0.0` for a singleton.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the number of vertices in the cluster.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the cluster holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn representative(&self) -> usize {
        self.points[0]
    }
}

/// Merges singleton clusters until `k` remain, `k == 0` merges down to a single cluster.
///
/// Ties are broken in favour of the pair with the lowest indices in the working list. The merged
/// cluster is appended to the end of the list.
pub fn hierarchical_clustering(distances: &DMatrix<f64>, k: usize) -> Result<Vec<Cluster>> {
    let n = ensure_square(distances)?;

    if k > n {
        return Err(GraphError::InvalidParameter(format!(
            "cannot form {k} clusters from {n} vertices"
        )));
    }

    let target = k.max(1);
    debug!(n, k, "hierarchical clustering");

    let mut clusters: Vec<Cluster> = (0..n).map(Cluster::singleton).collect();

    while clusters.len() > target {
        let Some((i, j, closest)) = closest_pair(&clusters, distances) else {
            break;
        };

        let merged = Cluster {
            points: clusters[i]
                .points
                .iter()
                .chain(&clusters[j].points)
                .copied()
                .collect(),
            distance: closest / 2.0,
        };

        trace!(points = ?merged.points, distance = merged.distance, "merge");

        clusters.push(merged);
        // i < j, so removing j first leaves i in place.
        clusters.remove(j);
        clusters.remove(i);
    }

    Ok(clusters)
}

/// Returns the points of the `k` clusters with the largest distances, largest first.
///
/// Clusters with equal distances keep their relative order.
pub fn tree_cut(clusters: &[Cluster], k: usize) -> Vec<Vec<usize>> {
    let mut sorted = clusters.to_vec();
    sorted.sort_by(|a, b| b.distance.total_cmp(&a.distance));

    sorted
        .into_iter()
        .take(k)
        .map(|cluster| cluster.points)
        .collect()
}

//
// Private
//

fn closest_pair(clusters: &[Cluster], distances: &DMatrix<f64>) -> Option<(usize, usize, f64)> {
    (0..clusters.len())
        .tuple_combinations::<(usize, usize)>()
        .fold(None, |best, (i, j)| {
            let distance =
                distances[(clusters[i].representative(), clusters[j].representative())];

            match best {
                Some((_, _, closest)) if distance >= closest => best,
                // NaN distances never replace a candidate.
                Some(_) if distance.is_nan() => best,
                _ => Some((i, j, distance)),
            }
        })
}
