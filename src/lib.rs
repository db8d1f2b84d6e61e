//! Densegraph is a small toolkit for analysing graphs stored as dense weighted adjacency matrices.
//!
//! # Basic usage
//!
//! Every engine is a set of free functions over a square [`DMatrix<f64>`](nalgebra::DMatrix), an
//! entry of `0.0` meaning "no edge". The [`Graph`](graph::Graph) structure wraps a validated matrix,
//! caches the matrices derived from it and exposes every engine as a method.
//!
//! ```rust
//! use densegraph::edge::Edge;
//! use densegraph::graph::Graph;
//! use densegraph::path::dijkstra;
//!
//! // Construct an undirected graph of 4 vertices.
//! let mut graph = Graph::from_edges(
//!     4,
//!     &[
//!         Edge::weighted(0, 1, 1.0),
//!         Edge::weighted(1, 2, 1.0),
//!         Edge::weighted(0, 2, 3.0),
//!         Edge::weighted(2, 3, 1.0),
//!     ],
//! )
//! .unwrap();
//!
//! // Query the engines through the graph...
//! let path = graph.shortest_path(0, 3).unwrap().unwrap();
//! assert_eq!(path.vertices, vec![0, 1, 2, 3]);
//!
//! // ...or directly on the matrix.
//! assert_eq!(dijkstra(graph.adjacency_matrix(), 0, 3).unwrap(), Some(path));
//!
//! // Matrices can be pretty printed.
//! println!("{}", graph.distance_matrix());
//! ```

pub mod betweenness;
pub mod centrality;
pub mod closeness;
pub mod cluster;
pub mod edge;
pub mod error;
pub mod graph;
pub mod matrix;
pub mod measures;
pub mod pagerank;
pub mod path;
pub mod spanning;
pub mod summary;
pub mod transform;
pub mod traversal;

pub use error::{GraphError, Result};
