//! Scalar and per-vertex measures reduced from an adjacency or a distance matrix.
//!
//! Degree counts treat any nonzero entry as an edge and ignore its weight.

use itertools::Itertools;
use nalgebra::DMatrix;

use crate::{
    error::Result,
    matrix::{ensure_square, ensure_vertex},
};

/// Returns the number of vertices.
pub fn vertex_count(adjacency: &DMatrix<f64>) -> Result<usize> {
    ensure_square(adjacency)
}

/// Returns the number of undirected edges, the count of nonzero entries halved.
pub fn edge_count(adjacency: &DMatrix<f64>) -> Result<usize> {
    ensure_square(adjacency)?;

    Ok(count_edges(adjacency))
}

/// Computes the density of the graph, the ratio of positive entries with respect to the `n(n - 1)`
/// possible directed edges.
///
/// Graphs with fewer than two vertices have a `NaN` density.
pub fn density(adjacency: &DMatrix<f64>) -> Result<f64> {
    ensure_square(adjacency)?;

    Ok(positive_density(adjacency))
}

/// Returns the number of nonzero entries in the vertex's row.
pub fn out_degree(adjacency: &DMatrix<f64>, vertex: usize) -> Result<usize> {
    let n = ensure_square(adjacency)?;
    ensure_vertex(vertex, n)?;

    Ok(row_degree(adjacency, vertex))
}

/// Returns the number of nonzero entries in the vertex's column.
pub fn in_degree(adjacency: &DMatrix<f64>, vertex: usize) -> Result<usize> {
    let n = ensure_square(adjacency)?;
    ensure_vertex(vertex, n)?;

    Ok(column_degree(adjacency, vertex))
}

/// Returns the in-degree plus the out-degree of every vertex.
///
/// For a symmetric matrix each value is twice the number of incident edges.
pub fn degrees(adjacency: &DMatrix<f64>) -> Result<Vec<usize>> {
    ensure_square(adjacency)?;

    Ok(total_degrees(adjacency))
}

/// Computes the global clustering coefficient, the number of triangles divided by the number of
/// vertex triples.
///
/// An entry counts as an edge in either direction. Graphs with fewer than three vertices have a
/// `NaN` coefficient.
pub fn clustering_coefficient(adjacency: &DMatrix<f64>) -> Result<f64> {
    let n = ensure_square(adjacency)?;

    let triangles = (0..n)
        .tuple_combinations::<(usize, usize, usize)>()
        .filter(|&(i, j, k)| {
            adjacency[(i, j)] != 0.0 && adjacency[(i, k)] != 0.0 && adjacency[(j, k)] != 0.0
        })
        .count() as f64;

    let n = n as f64;
    let triples = n * (n - 1.0) * (n - 2.0) / 6.0;

    Ok(triangles / triples)
}

/// Returns the minimum out-degree, a bound on the vertex connectivity.
///
/// `None` for an empty graph.
pub fn vertex_connectivity(adjacency: &DMatrix<f64>) -> Result<Option<usize>> {
    ensure_square(adjacency)?;

    Ok(min_out_degree(adjacency))
}

/// Returns the minimum number of nonzero entries in any row, a bound on the edge connectivity.
///
/// `None` for an empty graph.
pub fn edge_connectivity(adjacency: &DMatrix<f64>) -> Result<Option<usize>> {
    ensure_square(adjacency)?;

    Ok(adjacency
        .row_iter()
        .map(|row| row.iter().filter(|&&w| w != 0.0).count())
        .min())
}

/// Returns the largest finite distance from the vertex, unreachable vertices are skipped.
pub fn eccentricity(distances: &DMatrix<f64>, vertex: usize) -> Result<f64> {
    let n = ensure_square(distances)?;
    ensure_vertex(vertex, n)?;

    Ok(row_eccentricity(distances, vertex))
}

/// Returns the smallest eccentricity among the vertices that reach every other vertex.
///
/// `None` if no vertex has a fully finite row.
pub fn radius(distances: &DMatrix<f64>) -> Result<Option<f64>> {
    let n = ensure_square(distances)?;

    Ok((0..n)
        .filter(|&v| distances.row(v).iter().all(|d| d.is_finite()))
        .map(|v| row_eccentricity(distances, v))
        .min_by(f64::total_cmp))
}

/// Returns the largest finite distance in the matrix, `0.0` if there is none.
pub fn diameter(distances: &DMatrix<f64>) -> Result<f64> {
    ensure_square(distances)?;

    Ok(distances
        .iter()
        .copied()
        .filter(|d| d.is_finite())
        .fold(0.0, f64::max))
}

/// Returns the mean of the finite distances between distinct vertices.
///
/// `None` if no pair of distinct vertices is connected.
pub fn average_path_length(distances: &DMatrix<f64>) -> Result<Option<f64>> {
    let n = ensure_square(distances)?;

    let (sum, count) = (0..n)
        .cartesian_product(0..n)
        .filter(|&(i, j)| i != j && distances[(i, j)].is_finite())
        .fold((0.0, 0usize), |(sum, count), (i, j)| {
            (sum + distances[(i, j)], count + 1)
        });

    if count == 0 {
        return Ok(None);
    }

    Ok(Some(sum / count as f64))
}

//
// Helpers
//
// These take a matrix already known to be square.

pub(crate) fn count_edges(adjacency: &DMatrix<f64>) -> usize {
    adjacency.iter().filter(|&&w| w != 0.0).count() / 2
}

pub(crate) fn positive_density(adjacency: &DMatrix<f64>) -> f64 {
    let n = adjacency.nrows() as f64;
    let edges = adjacency.iter().filter(|&&w| w > 0.0).count() as f64;

    edges / (n * (n - 1.0))
}

pub(crate) fn total_degrees(adjacency: &DMatrix<f64>) -> Vec<usize> {
    (0..adjacency.nrows())
        .map(|v| row_degree(adjacency, v) + column_degree(adjacency, v))
        .collect()
}

pub(crate) fn min_out_degree(adjacency: &DMatrix<f64>) -> Option<usize> {
    (0..adjacency.nrows()).map(|v| row_degree(adjacency, v)).min()
}

pub(crate) fn row_degree(adjacency: &DMatrix<f64>, vertex: usize) -> usize {
    adjacency.row(vertex).iter().filter(|&&w| w != 0.0).count()
}

pub(crate) fn column_degree(adjacency: &DMatrix<f64>, vertex: usize) -> usize {
    adjacency.column(vertex).iter().filter(|&&w| w != 0.0).count()
}

fn row_eccentricity(distances: &DMatrix<f64>, vertex: usize) -> f64 {
    distances
        .row(vertex)
        .iter()
        .copied()
        .filter(|d| d.is_finite())
        .fold(0.0, f64::max)
}
