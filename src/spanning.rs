//! Minimum spanning trees with Prim's algorithm.

use std::{cmp::Ordering, collections::BinaryHeap};

use nalgebra::DMatrix;
use tracing::debug;

use crate::{edge::Edge, error::Result, matrix::ensure_square};

/// A candidate edge in the priority queue.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    weight: f64,
    /// Insertion order, keeps equal weights in the order they were offered.
    seq: usize,
    source: usize,
    target: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap.
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Builds a minimum spanning tree grown from vertex 0 with Prim's algorithm.
///
/// Positive entries are edges and are treated as undirected: `(i, j)` can be walked both ways. The
/// edges are returned in the order they join the tree. If the graph is disconnected only the
/// component containing vertex 0 is spanned.
pub fn minimum_spanning_tree(adjacency: &DMatrix<f64>) -> Result<Vec<Edge>> {
    let n = ensure_square(adjacency)?;

    if n == 0 {
        return Ok(vec![]);
    }

    debug!(n, "prim");

    let mut in_tree = vec![false; n];
    let mut heap = BinaryHeap::new();
    let mut seq = 0;
    let mut tree = Vec::with_capacity(n - 1);

    let mut offer = |vertex: usize, in_tree: &[bool], heap: &mut BinaryHeap<Candidate>| {
        for other in (0..n).filter(|&other| !in_tree[other]) {
            let weight = undirected_weight(adjacency, vertex, other);
            if weight > 0.0 {
                heap.push(Candidate {
                    weight,
                    seq,
                    source: vertex,
                    target: other,
                });
                seq += 1;
            }
        }
    };

    in_tree[0] = true;
    offer(0, &in_tree, &mut heap);

    while let Some(candidate) = heap.pop() {
        if in_tree[candidate.target] {
            continue;
        }

        in_tree[candidate.target] = true;
        tree.push(Edge::weighted(candidate.source, candidate.target, candidate.weight));
        offer(candidate.target, &in_tree, &mut heap);
    }

    Ok(tree)
}

/// The weight of `(i, j)`, falling back to `(j, i)` for one-sided entries.
fn undirected_weight(adjacency: &DMatrix<f64>, i: usize, j: usize) -> f64 {
    if adjacency[(i, j)] > 0.0 {
        adjacency[(i, j)]
    } else {
        adjacency[(j, i)]
    }
}
