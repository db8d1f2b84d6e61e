//! A module for working with graphs.

use nalgebra::DMatrix;
use tracing::trace;

use crate::{
    betweenness::betweenness_from_distances,
    centrality::{degree_centrality, katz_centrality, Direction, KatzConfig},
    closeness::closeness_from_distances,
    cluster::{hierarchical_clustering, Cluster},
    edge::Edge,
    error::Result,
    matrix::{ensure_square, ensure_vertex},
    measures::{self, row_degree},
    pagerank::{pagerank, PageRankConfig},
    path::{all_pairs_distances, breadth_first_path, dijkstra, ShortestPath},
    spanning::minimum_spanning_tree,
    summary::Summary,
    traversal,
};

/// A graph backed by a dense, square adjacency matrix.
///
/// An entry `(i, j)` different from `0.0` is an edge from `i` to `j` weighted by the entry.
#[derive(Clone, Debug)]
pub struct Graph {
    /// The adjacency matrix, guaranteed to be square.
    adjacency_matrix: DMatrix<f64>,
    /// Cache the degree matrix when possible.
    degree_matrix: Option<DMatrix<f64>>,
    /// Cache the laplacian matrix when possible.
    laplacian_matrix: Option<DMatrix<f64>>,
    /// Cache the all-pairs shortest distances when possible.
    distance_matrix: Option<DMatrix<f64>>,
}

impl Graph {
    /// Creates a graph from its adjacency matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use densegraph::graph::Graph;
    /// use densegraph::GraphError;
    /// use nalgebra::{dmatrix, DMatrix};
    ///
    /// let graph = Graph::new(dmatrix![0.0, 1.0;
    ///                                 1.0, 0.0]).unwrap();
    /// assert_eq!(graph.vertex_count(), 2);
    ///
    /// assert_eq!(
    ///     Graph::new(DMatrix::zeros(2, 3)).unwrap_err(),
    ///     GraphError::NotSquare { rows: 2, cols: 3 }
    /// );
    /// ```
    pub fn new(adjacency_matrix: DMatrix<f64>) -> Result<Self> {
        ensure_square(&adjacency_matrix)?;

        Ok(Self {
            adjacency_matrix,
            degree_matrix: None,
            laplacian_matrix: None,
            distance_matrix: None,
        })
    }

    /// Creates an undirected graph of `n` vertices from a list of edges.
    ///
    /// Both `(source, target)` and `(target, source)` are set to the edge's weight, later edges
    /// overwrite earlier ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use densegraph::edge::Edge;
    /// use densegraph::graph::Graph;
    /// use nalgebra::dmatrix;
    ///
    /// let graph = Graph::from_edges(3, &[Edge::new(0, 1), Edge::weighted(1, 2, 2.0)]).unwrap();
    ///
    /// assert_eq!(
    ///     graph.adjacency_matrix(),
    ///     &dmatrix![0.0, 1.0, 0.0;
    ///               1.0, 0.0, 2.0;
    ///               0.0, 2.0, 0.0]
    /// );
    /// assert!(Graph::from_edges(2, &[Edge::new(0, 2)]).is_err());
    /// ```
    pub fn from_edges(n: usize, edges: &[Edge]) -> Result<Self> {
        let mut graph = Self::new(DMatrix::zeros(n, n))?;

        for edge in edges {
            graph.insert(*edge)?;
        }

        Ok(graph)
    }

    /// Inserts an undirected edge, overwriting the weight of an existing one.
    ///
    /// Returns whether the matrix changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use densegraph::edge::Edge;
    /// use densegraph::graph::Graph;
    ///
    /// let mut graph = Graph::from_edges(3, &[]).unwrap();
    ///
    /// assert_eq!(graph.insert(Edge::new(0, 1)), Ok(true));
    /// assert_eq!(graph.insert(Edge::new(1, 0)), Ok(false));
    /// assert_eq!(graph.edge_count(), 1);
    /// ```
    pub fn insert(&mut self, edge: Edge) -> Result<bool> {
        self.set_undirected(edge.source(), edge.target(), edge.weight())
    }

    /// Removes an undirected edge, whatever its weight, and returns whether it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use densegraph::edge::Edge;
    /// use densegraph::graph::Graph;
    ///
    /// let mut graph = Graph::from_edges(3, &[Edge::new(0, 1)]).unwrap();
    ///
    /// assert_eq!(graph.remove(&Edge::new(0, 1)), Ok(true));
    /// assert_eq!(graph.remove(&Edge::new(0, 2)), Ok(false));
    /// ```
    pub fn remove(&mut self, edge: &Edge) -> Result<bool> {
        self.set_undirected(edge.source(), edge.target(), 0.0)
    }

    /// Checks if the graph has an edge in either direction between the edge's vertices.
    pub fn contains(&self, edge: &Edge) -> bool {
        let n = self.vertex_count();
        let (s, t) = (edge.source(), edge.target());

        s < n
            && t < n
            && (self.adjacency_matrix[(s, t)] != 0.0 || self.adjacency_matrix[(t, s)] != 0.0)
    }

    /// Returns the vertex count of the graph.
    pub fn vertex_count(&self) -> usize {
        self.adjacency_matrix.nrows()
    }

    /// Returns the edge count of the graph, the number of nonzero entries halved.
    pub fn edge_count(&self) -> usize {
        measures::count_edges(&self.adjacency_matrix)
    }

    /// Computes the density of the graph, the ratio of positive entries with respect to the
    /// `n(n - 1)` possible directed edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use densegraph::edge::Edge;
    /// use densegraph::graph::Graph;
    ///
    /// let mut graph = Graph::from_edges(3, &[Edge::new(0, 1)]).unwrap();
    /// assert_eq!(graph.density(), 2.0 / 6.0);
    ///
    /// graph.insert(Edge::new(0, 2)).unwrap();
    /// assert_eq!(graph.density(), 4.0 / 6.0);
    /// ```
    pub fn density(&self) -> f64 {
        measures::positive_density(&self.adjacency_matrix)
    }

    /// Returns the adjacency matrix of this graph.
    pub fn adjacency_matrix(&self) -> &DMatrix<f64> {
        &self.adjacency_matrix
    }

    /// Constructs the degree matrix for this graph, the diagonal holds the number of nonzero
    /// entries in each row.
    ///
    /// # Examples
    ///
    /// ```
    /// use densegraph::edge::Edge;
    /// use densegraph::graph::Graph;
    /// use nalgebra::dmatrix;
    ///
    /// let mut graph = Graph::from_edges(2, &[Edge::weighted(0, 1, 3.0)]).unwrap();
    /// assert_eq!(
    ///     graph.degree_matrix(),
    ///     dmatrix![1.0, 0.0;
    ///              0.0, 1.0]
    /// );
    /// ```
    pub fn degree_matrix(&mut self) -> DMatrix<f64> {
        // Check the cache.
        if let Some(matrix) = self.degree_matrix.clone() {
            return matrix;
        }

        let n = self.vertex_count();
        let mut matrix = DMatrix::<f64>::zeros(n, n);

        for i in 0..n {
            matrix[(i, i)] = row_degree(&self.adjacency_matrix, i) as f64;
        }

        // Cache the matrix.
        self.degree_matrix = Some(matrix.clone());

        matrix
    }

    /// Constructs the laplacian matrix for this graph: the degree matrix on the diagonal and the
    /// negated weights elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use densegraph::edge::Edge;
    /// use densegraph::graph::Graph;
    /// use nalgebra::dmatrix;
    ///
    /// let mut graph = Graph::from_edges(3, &[Edge::new(0, 1), Edge::new(0, 2)]).unwrap();
    /// assert_eq!(
    ///     graph.laplacian_matrix(),
    ///     dmatrix![2.0, -1.0, -1.0;
    ///              -1.0, 1.0, 0.0;
    ///              -1.0, 0.0, 1.0]
    /// );
    /// ```
    pub fn laplacian_matrix(&mut self) -> DMatrix<f64> {
        // Check the cache.
        if let Some(matrix) = self.laplacian_matrix.clone() {
            return matrix;
        }

        let degree_matrix = self.degree_matrix();

        let mut matrix = -&self.adjacency_matrix;
        matrix.set_diagonal(&degree_matrix.diagonal());

        // Cache the matrix.
        self.laplacian_matrix = Some(matrix.clone());

        matrix
    }

    /// Computes the shortest weighted distance between every pair of vertices with
    /// Floyd-Warshall, unreachable pairs hold `f64::INFINITY`.
    ///
    /// # Examples
    ///
    /// ```
    /// use densegraph::edge::Edge;
    /// use densegraph::graph::Graph;
    /// use nalgebra::dmatrix;
    ///
    /// let mut graph = Graph::from_edges(3, &[Edge::weighted(0, 1, 2.0)]).unwrap();
    /// let inf = f64::INFINITY;
    ///
    /// assert_eq!(
    ///     graph.distance_matrix(),
    ///     dmatrix![0.0, 2.0, inf;
    ///              2.0, 0.0, inf;
    ///              inf, inf, 0.0]
    /// );
    /// ```
    pub fn distance_matrix(&mut self) -> DMatrix<f64> {
        // Check the cache.
        if let Some(matrix) = self.distance_matrix.clone() {
            return matrix;
        }

        let matrix = all_pairs_distances(&self.adjacency_matrix);

        // Cache the matrix.
        self.distance_matrix = Some(matrix.clone());

        matrix
    }

    /// Returns the in-degree plus the out-degree of every vertex.
    pub fn degrees(&self) -> Vec<usize> {
        measures::total_degrees(&self.adjacency_matrix)
    }

    /// Computes the number of triangles divided by the number of vertex triples.
    pub fn clustering_coefficient(&self) -> Result<f64> {
        measures::clustering_coefficient(&self.adjacency_matrix)
    }

    /// Returns the minimum out-degree, `None` for an empty graph.
    pub fn vertex_connectivity(&self) -> Option<usize> {
        measures::min_out_degree(&self.adjacency_matrix)
    }

    /// Returns the largest finite distance from the vertex.
    pub fn eccentricity(&mut self, vertex: usize) -> Result<f64> {
        measures::eccentricity(&self.distance_matrix(), vertex)
    }

    /// Returns the smallest eccentricity among the vertices reaching every other vertex.
    pub fn radius(&mut self) -> Result<Option<f64>> {
        measures::radius(&self.distance_matrix())
    }

    /// Returns the largest finite shortest distance.
    pub fn diameter(&mut self) -> Result<f64> {
        measures::diameter(&self.distance_matrix())
    }

    /// Returns the mean finite shortest distance between distinct vertices.
    pub fn average_path_length(&mut self) -> Result<Option<f64>> {
        measures::average_path_length(&self.distance_matrix())
    }

    /// Finds the shortest weighted path between two vertices.
    ///
    /// # Examples
    ///
    /// ```
    /// use densegraph::edge::Edge;
    /// use densegraph::graph::Graph;
    ///
    /// let graph = Graph::from_edges(
    ///     3,
    ///     &[Edge::weighted(0, 1, 1.0), Edge::weighted(1, 2, 1.0), Edge::weighted(0, 2, 5.0)],
    /// )
    /// .unwrap();
    ///
    /// let path = graph.shortest_path(0, 2).unwrap().unwrap();
    /// assert_eq!(path.vertices, vec![0, 1, 2]);
    /// assert_eq!(path.distance, 2.0);
    /// ```
    pub fn shortest_path(&self, source: usize, target: usize) -> Result<Option<ShortestPath>> {
        dijkstra(&self.adjacency_matrix, source, target)
    }

    /// Finds the path with the fewest hops between two vertices.
    pub fn fewest_hops_path(&self, source: usize, target: usize) -> Result<Option<Vec<usize>>> {
        breadth_first_path(&self.adjacency_matrix, source, target)
    }

    /// Returns every simple path between two vertices.
    pub fn all_paths(&self, start: usize, end: usize) -> Result<Vec<Vec<usize>>> {
        traversal::all_paths(&self.adjacency_matrix, start, end)
    }

    /// Returns the simple path between two vertices visiting the most vertices.
    pub fn longest_path(&self, start: usize, end: usize) -> Result<Option<Vec<usize>>> {
        traversal::longest_path(&self.adjacency_matrix, start, end)
    }

    /// Returns the sizes of the components reached by depth-first search.
    pub fn component_sizes(&self) -> Result<Vec<usize>> {
        traversal::component_sizes(&self.adjacency_matrix)
    }

    /// Returns the edges of a minimum spanning tree grown from vertex `0`.
    pub fn minimum_spanning_tree(&self) -> Result<Vec<Edge>> {
        minimum_spanning_tree(&self.adjacency_matrix)
    }

    /// Returns the degree centrality of every vertex.
    pub fn degree_centrality(&self, direction: Direction) -> Result<Vec<f64>> {
        degree_centrality(&self.adjacency_matrix, direction)
    }

    /// Returns the closeness centrality of every vertex.
    pub fn closeness_centrality(&mut self) -> Result<Vec<f64>> {
        closeness_from_distances(&self.distance_matrix())
    }

    /// Returns the betweenness centrality of every vertex.
    pub fn betweenness_centrality(&mut self) -> Result<Vec<f64>> {
        betweenness_from_distances(&self.distance_matrix())
    }

    /// Returns the Katz centrality of every vertex.
    pub fn katz_centrality(&self, config: KatzConfig) -> Result<Vec<f64>> {
        katz_centrality(&self.adjacency_matrix, config)
    }

    /// Returns the PageRank score of every vertex.
    pub fn pagerank(&self, config: PageRankConfig) -> Result<Vec<f64>> {
        pagerank(&self.adjacency_matrix, config)
    }

    /// Clusters the vertices by their shortest distances until `k` clusters remain.
    pub fn clusters(&mut self, k: usize) -> Result<Vec<Cluster>> {
        hierarchical_clustering(&self.distance_matrix(), k)
    }

    /// Computes every measure of the graph at once.
    pub fn summary(&mut self) -> Result<Summary> {
        Summary::from_graph(self)
    }

    //
    // Private
    //

    /// Clears the computed state.
    ///
    /// This should be called every time the adjacency matrix is mutated since the cached state
    /// won't correspond to the new graph.
    fn clear_cache(&mut self) {
        self.degree_matrix = None;
        self.laplacian_matrix = None;
        self.distance_matrix = None;
    }

    fn set_undirected(&mut self, source: usize, target: usize, weight: f64) -> Result<bool> {
        let n = self.vertex_count();
        ensure_vertex(source, n)?;
        ensure_vertex(target, n)?;

        let is_changed = self.adjacency_matrix[(source, target)] != weight
            || self.adjacency_matrix[(target, source)] != weight;

        if is_changed {
            trace!(source, target, weight, "set edge");

            self.adjacency_matrix[(source, target)] = weight;
            self.adjacency_matrix[(target, source)] = weight;

            // The cached matrices can't be reliably updated from a single entry.
            self.clear_cache();
        }

        Ok(is_changed)
    }
}
