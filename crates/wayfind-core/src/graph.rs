//! Weighted directed graph keyed by an opaque node identifier.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::GraphError;
use crate::geom::{Point, Range};

/// An outgoing edge: the cost of traversing it and the node it leads to.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<N> {
    pub weight: f64,
    pub target: N,
}

impl<N> Edge<N> {
    #[inline]
    pub fn new(weight: f64, target: N) -> Self {
        Self { weight, target }
    }
}

/// Adjacency-map graph with non-negative, finite edge weights.
///
/// Nodes never mentioned by [`add_edge`](Self::add_edge) or
/// [`add_node`](Self::add_node) are implicit sinks: [`edges`](Self::edges)
/// returns an empty slice for them. Parallel edges are kept as-is; search
/// treats each one as a separate relaxation candidate.
#[derive(Clone, Debug)]
pub struct Graph<N> {
    adj: HashMap<N, Vec<Edge<N>>>,
    edge_count: usize,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            adj: HashMap::new(),
            edge_count: 0,
        }
    }
}

impl<N: Clone + Eq + Hash> Graph<N> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `nodes` adjacency entries.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adj: HashMap::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Build a graph from `(from, to, weight)` links.
    pub fn from_links<I>(links: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        let mut g = Self::new();
        for (from, to, weight) in links {
            g.add_edge(from, to, weight)?;
        }
        Ok(g)
    }

    /// Build a graph where every link is traversable in both directions at
    /// the same weight.
    pub fn from_undirected_links<I>(links: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        let mut g = Self::new();
        for (a, b, weight) in links {
            g.add_edge(a.clone(), b.clone(), weight)?;
            g.add_edge(b, a, weight)?;
        }
        Ok(g)
    }

    /// Register a node, leaving its edges untouched if it already exists.
    pub fn add_node(&mut self, node: N) {
        self.adj.entry(node).or_default();
    }

    /// Add a directed edge `from -> to`.
    ///
    /// Rejects NaN, infinite and negative weights; the graph is left
    /// unchanged in that case.
    pub fn add_edge(&mut self, from: N, to: N, weight: f64) -> Result<(), GraphError> {
        if !weight.is_finite() || weight < 0.0 {
            log::warn!("rejecting edge with weight {weight}");
            return Err(GraphError::InvalidWeight { weight });
        }
        self.adj.entry(to.clone()).or_default();
        self.adj.entry(from).or_default().push(Edge::new(weight, to));
        self.edge_count += 1;
        Ok(())
    }

    /// Outgoing edges of `node`; empty for unknown nodes.
    #[inline]
    pub fn edges(&self, node: &N) -> &[Edge<N>] {
        self.adj.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn contains_node(&self, node: &N) -> bool {
        self.adj.contains_key(node)
    }

    /// All known nodes, in arbitrary order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adj.keys()
    }

    /// Number of known nodes (edge sources, edge targets and added nodes).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// A copy of the graph with every edge inverted and its weight kept.
    pub fn reversed(&self) -> Self {
        let mut rev = Self::with_capacity(self.adj.len());
        for (from, edges) in &self.adj {
            rev.adj.entry(from.clone()).or_default();
            for e in edges {
                rev.adj
                    .entry(e.target.clone())
                    .or_default()
                    .push(Edge::new(e.weight, from.clone()));
            }
        }
        rev.edge_count = self.edge_count;
        rev
    }
}

/// Build a 4-connected grid graph over `range`.
///
/// `cost(from, to)` returns the weight of stepping between two adjacent
/// points, or `None` when the move is blocked.
pub fn grid_graph<F>(range: Range, cost: F) -> Result<Graph<Point>, GraphError>
where
    F: Fn(Point, Point) -> Option<f64>,
{
    let mut g = Graph::with_capacity(range.len());
    for p in range.iter() {
        g.add_node(p);
        for q in p.neighbors_4() {
            if !range.contains(q) {
                continue;
            }
            if let Some(w) = cost(p, q) {
                g.add_edge(p, q, w)?;
            }
        }
    }
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_node_has_no_edges() {
        let g: Graph<&str> = Graph::from_links([("a", "b", 1.0)]).unwrap();
        assert!(g.edges(&"zzz").is_empty());
        assert!(g.edges(&"b").is_empty());
        assert!(g.contains_node(&"b"));
        assert!(!g.contains_node(&"zzz"));
    }

    #[test]
    fn rejects_bad_weights() {
        let mut g = Graph::new();
        assert_eq!(
            g.add_edge(1, 2, -0.5),
            Err(GraphError::InvalidWeight { weight: -0.5 })
        );
        assert!(g.add_edge(1, 2, f64::INFINITY).is_err());
        assert!(g.add_edge(1, 2, f64::NAN).is_err());
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.node_count(), 0);
        assert!(g.add_edge(1, 2, 0.0).is_ok());
    }

    #[test]
    fn parallel_edges_are_kept() {
        let g = Graph::from_links([("a", "b", 3.0), ("a", "b", 1.0)]).unwrap();
        assert_eq!(g.edges(&"a").len(), 2);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn reversed_inverts_direction_and_keeps_weights() {
        let g = Graph::from_links([("a", "b", 2.0), ("b", "c", 5.0), ("a", "c", 9.0)]).unwrap();
        let r = g.reversed();
        assert!(r.edges(&"a").is_empty());
        assert_eq!(r.edges(&"b"), &[Edge::new(2.0, "a")]);
        let mut into_c: Vec<_> = r.edges(&"c").iter().map(|e| (e.target, e.weight)).collect();
        into_c.sort_by(|x, y| x.0.cmp(y.0));
        assert_eq!(into_c, vec![("a", 9.0), ("b", 5.0)]);
        assert_eq!(r.edge_count(), 3);
        assert_eq!(r.node_count(), 3);
    }

    #[test]
    fn undirected_links_go_both_ways() {
        let g = Graph::from_undirected_links([("x", "y", 4.0)]).unwrap();
        assert_eq!(g.edges(&"x"), &[Edge::new(4.0, "y")]);
        assert_eq!(g.edges(&"y"), &[Edge::new(4.0, "x")]);
    }

    #[test]
    fn grid_graph_skips_blocked_moves() {
        let wall = Point::new(1, 0);
        let g = grid_graph(Range::new(0, 0, 3, 2), |_, to| (to != wall).then_some(1.0)).unwrap();
        assert_eq!(g.node_count(), 6);
        let from_origin: Vec<_> = g.edges(&Point::ZERO).iter().map(|e| e.target).collect();
        assert_eq!(from_origin, vec![Point::new(0, 1)]);
        // The wall itself can still be left.
        assert_eq!(g.edges(&wall).len(), 3);
    }
}
