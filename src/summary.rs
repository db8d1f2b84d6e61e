//! A report of every measure computed for one graph.

use std::fmt;

use itertools::Itertools;
use nalgebra::DMatrix;
use tracing::debug;

use crate::{
    centrality::{Direction, KatzConfig},
    error::{GraphError, Result},
    graph::Graph,
    measures,
    pagerank::PageRankConfig,
};

/// The scalar measures and centrality vectors of a graph.
///
/// Katz centrality uses [`KatzConfig::default`] and PageRank [`PageRankConfig::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub density: f64,
    pub clustering_coefficient: f64,
    pub radius: Option<f64>,
    pub diameter: f64,
    pub average_path_length: Option<f64>,
    pub vertex_connectivity: Option<usize>,
    pub edge_connectivity: Option<usize>,
    /// Outgoing degree centrality.
    pub degree_centrality: Vec<f64>,
    pub closeness_centrality: Vec<f64>,
    pub betweenness_centrality: Vec<f64>,
    /// `None` when the adjacency matrix is empty or fails the inversion precondition.
    pub katz_centrality: Option<Vec<f64>>,
    pub pagerank: Vec<f64>,
}

impl Summary {
    /// Computes the summary of an adjacency matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use densegraph::summary::Summary;
    /// use nalgebra::dmatrix;
    ///
    /// let summary = Summary::of(&dmatrix![0.0, 1.0, 1.0, 0.0;
    ///                                     1.0, 0.0, 1.0, 0.0;
    ///                                     1.0, 1.0, 0.0, 1.0;
    ///                                     0.0, 0.0, 1.0, 0.0]).unwrap();
    ///
    /// assert_eq!(summary.edge_count, 4);
    /// assert_eq!(summary.diameter, 2.0);
    /// assert_eq!(summary.vertex_connectivity, Some(1));
    /// assert_eq!(summary.katz_centrality, None);
    /// ```
    pub fn of(adjacency: &DMatrix<f64>) -> Result<Self> {
        let mut graph = Graph::new(adjacency.clone())?;

        Self::from_graph(&mut graph)
    }

    pub(crate) fn from_graph(graph: &mut Graph) -> Result<Self> {
        debug!(n = graph.vertex_count(), "summary");

        let katz_centrality = match graph.katz_centrality(KatzConfig::default()) {
            Ok(scores) => Some(scores),
            Err(GraphError::NotInvertible | GraphError::EmptyMatrix) => None,
            Err(e) => return Err(e),
        };

        Ok(Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            density: graph.density(),
            clustering_coefficient: graph.clustering_coefficient()?,
            radius: graph.radius()?,
            diameter: graph.diameter()?,
            average_path_length: graph.average_path_length()?,
            vertex_connectivity: graph.vertex_connectivity(),
            edge_connectivity: measures::edge_connectivity(graph.adjacency_matrix())?,
            degree_centrality: graph.degree_centrality(Direction::Outgoing)?,
            closeness_centrality: graph.closeness_centrality()?,
            betweenness_centrality: graph.betweenness_centrality()?,
            katz_centrality,
            pagerank: graph.pagerank(PageRankConfig::default())?,
        })
    }
}

//
// Trait implementations
//

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "vertices:               {}", self.vertex_count)?;
        writeln!(f, "edges:                  {}", self.edge_count)?;
        writeln!(f, "density:                {:.4}", self.density)?;
        writeln!(f, "clustering coefficient: {:.4}", self.clustering_coefficient)?;
        writeln!(f, "radius:                 {}", optional(self.radius))?;
        writeln!(f, "diameter:               {:.4}", self.diameter)?;
        writeln!(f, "average path length:    {}", optional(self.average_path_length))?;
        writeln!(f, "vertex connectivity:    {}", optional(self.vertex_connectivity))?;
        writeln!(f, "edge connectivity:      {}", optional(self.edge_connectivity))?;
        writeln!(f, "degree centrality:      [{}]", scores(&self.degree_centrality))?;
        writeln!(f, "closeness centrality:   [{}]", scores(&self.closeness_centrality))?;
        writeln!(f, "betweenness centrality: [{}]", scores(&self.betweenness_centrality))?;
        match &self.katz_centrality {
            Some(katz) => writeln!(f, "katz centrality:        [{}]", scores(katz))?,
            None => writeln!(f, "katz centrality:        not computable")?,
        }
        write!(f, "pagerank:               [{}]", scores(&self.pagerank))
    }
}

fn optional<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |v| format!("{v:.4}"))
}

fn scores(values: &[f64]) -> String {
    values.iter().map(|v| format!("{v:.4}")).join(", ")
}
