//! Shortest paths over dense adjacency matrices.
//!
//! An entry of `0.0` means "no edge". Weighted searches assume non-negative weights, negative
//! entries are neither detected nor supported. Unreachable targets yield `None` and unreachable
//! pairs in a distance matrix hold `f64::INFINITY`.

use std::collections::VecDeque;

use nalgebra::DMatrix;
use tracing::debug;

use crate::{
    error::Result,
    matrix::{ensure_square, ensure_vertex},
};

/// A path between two vertices and its total weight.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPath {
    /// The vertices from source to target, both included.
    pub vertices: Vec<usize>,
    /// The sum of the edge weights along the path.
    pub distance: f64,
}

impl ShortestPath {
    /// Returns the number of edges in the path.
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Finds the shortest weighted path from `source` to `target` with Dijkstra's algorithm.
///
/// The unvisited vertex with the lowest tentative distance is selected by a linear scan, ties go to
/// the lowest index. Only entries strictly greater than zero are treated as edges.
pub fn dijkstra(
    adjacency: &DMatrix<f64>,
    source: usize,
    target: usize,
) -> Result<Option<ShortestPath>> {
    let n = ensure_square(adjacency)?;
    ensure_vertex(source, n)?;
    ensure_vertex(target, n)?;

    debug!(n, source, target, "dijkstra");

    let mut distance = vec![f64::INFINITY; n];
    let mut visited = vec![false; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];

    distance[source] = 0.0;

    for _ in 0..n.saturating_sub(1) {
        let mut closest: Option<usize> = None;
        for v in (0..n).filter(|&v| !visited[v]) {
            if closest.map_or(true, |c| distance[v] < distance[c]) {
                closest = Some(v);
            }
        }

        // Every remaining vertex is unreachable.
        let u = match closest {
            Some(u) if distance[u].is_finite() => u,
            _ => break,
        };

        visited[u] = true;

        for v in 0..n {
            let weight = adjacency[(u, v)];
            if !visited[v] && weight > 0.0 && distance[u] + weight < distance[v] {
                distance[v] = distance[u] + weight;
                predecessor[v] = Some(u);
            }
        }
    }

    if !distance[target].is_finite() {
        return Ok(None);
    }

    let Some(vertices) = walk_back(&predecessor, source, target) else {
        return Ok(None);
    };

    Ok(Some(ShortestPath {
        vertices,
        distance: distance[target],
    }))
}

/// Computes all-pairs shortest distances with the Floyd-Warshall algorithm.
///
/// Nonzero entries are edges, zero entries are `f64::INFINITY` off the diagonal and the diagonal is
/// always `0.0`. A zero-weight self-loop and a missing self-loop can't be told apart.
pub fn floyd_warshall(adjacency: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    ensure_square(adjacency)?;

    Ok(all_pairs_distances(adjacency))
}

/// Floyd-Warshall over a matrix already known to be square.
pub(crate) fn all_pairs_distances(adjacency: &DMatrix<f64>) -> DMatrix<f64> {
    let n = adjacency.nrows();

    debug!(n, "floyd-warshall");

    let mut distances = DMatrix::from_fn(n, n, |i, j| {
        if i == j {
            0.0
        } else if adjacency[(i, j)] != 0.0 {
            adjacency[(i, j)]
        } else {
            f64::INFINITY
        }
    });

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through_k = distances[(i, k)] + distances[(k, j)];
                if through_k < distances[(i, j)] {
                    distances[(i, j)] = through_k;
                }
            }
        }
    }

    distances
}

/// Finds the path with the fewest hops from `source` to `target`, ignoring edge weights.
///
/// Any nonzero entry is an edge. The search stops as soon as the target is discovered.
pub fn breadth_first_path(
    adjacency: &DMatrix<f64>,
    source: usize,
    target: usize,
) -> Result<Option<Vec<usize>>> {
    let n = ensure_square(adjacency)?;
    ensure_vertex(source, n)?;
    ensure_vertex(target, n)?;

    if source == target {
        return Ok(Some(vec![source]));
    }

    let mut visited = vec![false; n];
    let mut previous: Vec<Option<usize>> = vec![None; n];
    let mut queue = VecDeque::new();

    visited[source] = true;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for neighbour in 0..n {
            if adjacency[(current, neighbour)] == 0.0 || visited[neighbour] {
                continue;
            }

            visited[neighbour] = true;
            previous[neighbour] = Some(current);
            queue.push_back(neighbour);

            if neighbour == target {
                return Ok(walk_back(&previous, source, target));
            }
        }
    }

    Ok(None)
}

/// Computes all-pairs hop counts with a breadth-first search from every vertex.
///
/// Any nonzero entry is an edge of length one.
pub fn hop_distance_matrix(adjacency: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    let n = ensure_square(adjacency)?;
    let mut distances = DMatrix::from_element(n, n, f64::INFINITY);

    for source in 0..n {
        distances[(source, source)] = 0.0;

        let mut queue = VecDeque::from([source]);
        while let Some(current) = queue.pop_front() {
            for neighbour in 0..n {
                if adjacency[(current, neighbour)] != 0.0
                    && distances[(source, neighbour)] == f64::INFINITY
                {
                    distances[(source, neighbour)] = distances[(source, current)] + 1.0;
                    queue.push_back(neighbour);
                }
            }
        }
    }

    Ok(distances)
}

/// Rebuilds the path ending in `target` from a predecessor table.
///
/// Returns `None` if the chain doesn't lead back to `source`, the walk is bounded by the number of
/// vertices so a malformed table can't loop forever.
fn walk_back(predecessor: &[Option<usize>], source: usize, target: usize) -> Option<Vec<usize>> {
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        if path.len() > predecessor.len() {
            return None;
        }

        current = predecessor[current]?;
        path.push(current);
    }

    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use nalgebra::dmatrix;

    use super::*;
    use crate::error::GraphError;

    fn weighted() -> DMatrix<f64> {
        dmatrix![0.0, 1.0, 3.0, 0.0, 0.0;
                 1.0, 0.0, 1.0, 4.0, 0.0;
                 3.0, 1.0, 0.0, 1.0, 2.0;
                 0.0, 4.0, 1.0, 0.0, 2.0;
                 0.0, 0.0, 2.0, 2.0, 0.0]
    }

    fn disconnected() -> DMatrix<f64> {
        dmatrix![0.0, 1.0, 0.0, 0.0;
                 1.0, 0.0, 0.0, 0.0;
                 0.0, 0.0, 0.0, 1.0;
                 0.0, 0.0, 1.0, 0.0]
    }

    #[test]
    fn dijkstra_prefers_lighter_detour() {
        let path = dijkstra(&weighted(), 0, 4).unwrap().unwrap();

        assert_eq!(path.vertices, vec![0, 1, 2, 4]);
        assert_eq!(path.distance, 4.0);
        assert_eq!(path.hops(), 3);
    }

    #[test]
    fn dijkstra_source_is_target() {
        let path = dijkstra(&weighted(), 2, 2).unwrap().unwrap();

        assert_eq!(path.vertices, vec![2]);
        assert_eq!(path.distance, 0.0);
    }

    #[test]
    fn dijkstra_unreachable() {
        assert_eq!(dijkstra(&disconnected(), 0, 3), Ok(None));
    }

    #[test]
    fn dijkstra_out_of_bounds() {
        assert_eq!(
            dijkstra(&weighted(), 0, 5),
            Err(GraphError::VertexOutOfBounds { vertex: 5, len: 5 })
        );
    }

    #[test]
    fn dijkstra_ties_go_to_lowest_index() {
        // 0 reaches 3 through 1 or through 2 at the same cost.
        let adjacency = dmatrix![0.0, 1.0, 1.0, 0.0;
                                 1.0, 0.0, 0.0, 1.0;
                                 1.0, 0.0, 0.0, 1.0;
                                 0.0, 1.0, 1.0, 0.0];

        let path = dijkstra(&adjacency, 0, 3).unwrap().unwrap();

        assert_eq!(path.vertices, vec![0, 1, 3]);
        assert_eq!(path.distance, 2.0);
    }

    #[test]
    fn dijkstra_single_vertex() {
        let path = dijkstra(&dmatrix![0.0], 0, 0).unwrap().unwrap();

        assert_eq!(path.vertices, vec![0]);
    }

    #[test]
    fn floyd_warshall_distances() {
        let adjacency = dmatrix![0.0, 1.0, 1.0, 0.0;
                                 1.0, 0.0, 1.0, 0.0;
                                 1.0, 1.0, 0.0, 1.0;
                                 0.0, 0.0, 1.0, 0.0];

        let distances = floyd_warshall(&adjacency).unwrap();

        assert_eq!(distances[(0, 3)], 2.0);
        assert_eq!(
            distances,
            dmatrix![0.0, 1.0, 1.0, 2.0;
                     1.0, 0.0, 1.0, 2.0;
                     1.0, 1.0, 0.0, 1.0;
                     2.0, 2.0, 1.0, 0.0]
        );
    }

    #[test]
    fn floyd_warshall_unreachable_is_infinite() {
        let distances = floyd_warshall(&disconnected()).unwrap();

        assert_eq!(distances[(0, 1)], 1.0);
        assert_eq!(distances[(0, 2)], f64::INFINITY);
        assert_eq!(distances[(3, 3)], 0.0);
    }

    #[test]
    fn floyd_warshall_matches_dijkstra() {
        let adjacency = weighted();
        let distances = floyd_warshall(&adjacency).unwrap();

        for source in 0..5 {
            for target in 0..5 {
                let path = dijkstra(&adjacency, source, target).unwrap().unwrap();
                assert_eq!(path.distance, distances[(source, target)]);
            }
        }
    }

    #[test]
    fn breadth_first_ignores_weights() {
        assert_eq!(breadth_first_path(&weighted(), 0, 4), Ok(Some(vec![0, 2, 4])));
        assert_eq!(breadth_first_path(&weighted(), 3, 3), Ok(Some(vec![3])));
        assert_eq!(breadth_first_path(&disconnected(), 1, 2), Ok(None));
    }

    #[test]
    fn hop_distances() {
        let distances = hop_distance_matrix(&weighted()).unwrap();

        assert_eq!(distances[(0, 4)], 2.0);
        assert_eq!(distances[(0, 3)], 2.0);
        assert_eq!(distances[(4, 4)], 0.0);

        let distances = hop_distance_matrix(&disconnected()).unwrap();
        assert_eq!(distances[(0, 3)], f64::INFINITY);
        assert_eq!(distances[(2, 3)], 1.0);
    }

    #[test]
    fn walk_back_detects_broken_chain() {
        let predecessor = vec![None, Some(0), None];

        assert_eq!(walk_back(&predecessor, 0, 1), Some(vec![0, 1]));
        assert_eq!(walk_back(&predecessor, 0, 2), None);
    }
}
