//! A module for working with weighted edges.

/// A weighted pair of vertex indices. Edges don't have a direction, despite the
/// `source`-`target` nomenclature used.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    source: usize,
    target: usize,
    weight: f64,
}

impl Edge {
    /// Creates a new edge of weight `1.0` between two vertices.
    ///
    /// # Examples
    ///
    /// ```
    /// use densegraph::edge::Edge;
    ///
    /// let edge = Edge::new(0, 1);
    /// assert_eq!(edge, Edge::new(1, 0));
    /// assert_eq!(edge.weight(), 1.0);
    /// ```
    pub fn new(source: usize, target: usize) -> Self {
        Self::weighted(source, target, 1.0)
    }

    /// Creates a new edge with the given weight.
    ///
    /// # Examples
    ///
    /// ```
    /// use densegraph::edge::Edge;
    ///
    /// let edge = Edge::weighted(0, 1, 2.5);
    /// assert_eq!(edge.weight(), 2.5);
    /// assert_ne!(edge, Edge::new(0, 1));
    /// ```
    pub fn weighted(source: usize, target: usize, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first vertex forming the edge.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the second vertex forming the edge.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Returns the weight of the edge.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns whether the edge contains the given vertex.
    ///
    /// # Examples
    ///
    /// ```
    /// use densegraph::edge::Edge;
    ///
    /// let edge = Edge::new(0, 1);
    ///
    /// assert_eq!(edge.contains(0), true);
    /// assert_eq!(edge.contains(1), true);
    /// assert_eq!(edge.contains(2), false);
    /// ```
    pub fn contains(&self, vertex: usize) -> bool {
        self.source == vertex || self.target == vertex
    }
}

//
// Trait implementations
//

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.source, self.target);
        let (c, d) = (other.source, other.target);

        (a == d && b == c || a == c && b == d) && self.weight == other.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        assert_eq!(
            Edge::new(0, 1),
            Edge {
                source: 0,
                target: 1,
                weight: 1.0
            }
        )
    }

    #[test]
    fn accessors() {
        let edge = Edge::weighted(3, 4, 0.5);

        assert_eq!(edge.source(), 3);
        assert_eq!(edge.target(), 4);
        assert_eq!(edge.weight(), 0.5);
    }

    #[test]
    fn contains() {
        let edge = Edge::new(0, 1);

        assert!(edge.contains(0));
        assert!(edge.contains(1));
        assert!(!edge.contains(2));
    }

    //
    // Trait implementations
    //

    #[test]
    fn partial_eq() {
        assert_eq!(Edge::new(0, 1), Edge::new(0, 1));
        assert_eq!(Edge::new(0, 1), Edge::new(1, 0));
        assert_ne!(Edge::weighted(0, 1, 2.0), Edge::weighted(1, 0, 3.0));
    }
}
