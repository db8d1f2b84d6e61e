//! Depth-first traversals: simple path enumeration and component sizes.
//!
//! The searches backtrack over an explicit stack owned by each call rather than recursing, so
//! their depth is bounded by the heap and not by the call stack. Enumerating simple paths is
//! exponential in the worst case.

use nalgebra::DMatrix;

use crate::{
    error::Result,
    matrix::{ensure_square, ensure_vertex},
};

/// Returns every simple path from `start` to `end`, in depth-first discovery order.
///
/// Any nonzero entry is an edge. A vertex is never repeated within a path.
pub fn all_paths(
    adjacency: &DMatrix<f64>,
    start: usize,
    end: usize,
) -> Result<Vec<Vec<usize>>> {
    let mut paths = Vec::new();
    simple_paths(adjacency, start, end, |path| paths.push(path.to_vec()))?;

    Ok(paths)
}

/// Returns the simple path from `start` to `end` visiting the most vertices.
///
/// The first path found wins ties.
pub fn longest_path(
    adjacency: &DMatrix<f64>,
    start: usize,
    end: usize,
) -> Result<Option<Vec<usize>>> {
    let mut longest: Option<Vec<usize>> = None;
    simple_paths(adjacency, start, end, |path| {
        if longest.as_ref().map_or(true, |l| path.len() > l.len()) {
            longest = Some(path.to_vec());
        }
    })?;

    Ok(longest)
}

/// Returns the number of vertices reached by a depth-first search started from each not yet
/// visited vertex, in index order.
///
/// Edges are followed in their stored direction only, for a symmetric matrix these are the sizes
/// of the connected components.
pub fn component_sizes(adjacency: &DMatrix<f64>) -> Result<Vec<usize>> {
    let n = ensure_square(adjacency)?;
    let mut visited = vec![false; n];
    let mut sizes = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }

        visited[root] = true;
        let mut size = 0;
        let mut stack = vec![root];

        while let Some(vertex) = stack.pop() {
            size += 1;

            for neighbour in 0..n {
                if !visited[neighbour] && adjacency[(vertex, neighbour)] != 0.0 {
                    visited[neighbour] = true;
                    stack.push(neighbour);
                }
            }
        }

        sizes.push(size);
    }

    Ok(sizes)
}

/// Walks every simple path from `start` to `end` and hands each one to `found`.
fn simple_paths(
    adjacency: &DMatrix<f64>,
    start: usize,
    end: usize,
    mut found: impl FnMut(&[usize]),
) -> Result<()> {
    let n = ensure_square(adjacency)?;
    ensure_vertex(start, n)?;
    ensure_vertex(end, n)?;

    let mut path = vec![start];

    if start == end {
        found(&path);
        return Ok(());
    }

    let mut on_path = vec![false; n];
    on_path[start] = true;

    // The next neighbour to try for each vertex on the path.
    let mut cursors = vec![0];

    while let Some(&cursor) = cursors.last() {
        let depth = cursors.len() - 1;
        let current = path[depth];

        let next = (cursor..n).find(|&v| !on_path[v] && adjacency[(current, v)] != 0.0);

        match next {
            Some(v) if v == end => {
                cursors[depth] = v + 1;
                path.push(v);
                found(&path);
                path.pop();
            }
            Some(v) => {
                cursors[depth] = v + 1;
                on_path[v] = true;
                path.push(v);
                cursors.push(0);
            }
            None => {
                cursors.pop();
                if let Some(v) = path.pop() {
                    on_path[v] = false;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use nalgebra::dmatrix;

    use super::*;

    fn cycle() -> DMatrix<f64> {
        dmatrix![0.0, 1.0, 0.0, 1.0, 0.0;
                 1.0, 0.0, 1.0, 0.0, 0.0;
                 0.0, 1.0, 0.0, 0.0, 1.0;
                 1.0, 0.0, 0.0, 0.0, 1.0;
                 0.0, 0.0, 1.0, 1.0, 0.0]
    }

    #[test]
    fn all_paths_in_cycle() {
        assert_eq!(
            all_paths(&cycle(), 0, 4),
            Ok(vec![vec![0, 1, 2, 4], vec![0, 3, 4]])
        );
    }

    #[test]
    fn all_paths_to_self() {
        assert_eq!(all_paths(&cycle(), 2, 2), Ok(vec![vec![2]]));
    }

    #[test]
    fn all_paths_unreachable() {
        let adjacency = dmatrix![0.0, 1.0, 0.0;
                                 1.0, 0.0, 0.0;
                                 0.0, 0.0, 0.0];

        assert_eq!(all_paths(&adjacency, 0, 2), Ok(vec![]));
        assert_eq!(longest_path(&adjacency, 0, 2), Ok(None));
    }

    #[test]
    fn longest_path_in_cycle() {
        assert_eq!(longest_path(&cycle(), 0, 4), Ok(Some(vec![0, 1, 2, 4])));
    }

    #[test]
    fn longest_path_complete_graph() {
        let adjacency = dmatrix![0.0, 1.0, 1.0, 1.0;
                                 1.0, 0.0, 1.0, 1.0;
                                 1.0, 1.0, 0.0, 1.0;
                                 1.0, 1.0, 1.0, 0.0];

        assert_eq!(all_paths(&adjacency, 0, 3).unwrap().len(), 5);
        assert_eq!(longest_path(&adjacency, 0, 3), Ok(Some(vec![0, 1, 2, 3])));
    }

    #[test]
    fn component_sizes_disconnected() {
        let adjacency = dmatrix![0.0, 1.0, 0.0, 0.0, 0.0;
                                 1.0, 0.0, 1.0, 0.0, 0.0;
                                 0.0, 1.0, 0.0, 0.0, 0.0;
                                 0.0, 0.0, 0.0, 0.0, 1.0;
                                 0.0, 0.0, 0.0, 1.0, 0.0];

        assert_eq!(component_sizes(&adjacency), Ok(vec![3, 2]));
        assert_eq!(component_sizes(&cycle()), Ok(vec![5]));
        assert_eq!(component_sizes(&DMatrix::zeros(2, 2)), Ok(vec![1, 1]));
    }
}
