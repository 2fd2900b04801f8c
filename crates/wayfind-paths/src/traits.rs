use std::hash::Hash;

use wayfind_core::{Edge, Graph};

/// Minimal search interface: enumerate the weighted out-edges of a node.
///
/// Implementors must report finite, non-negative weights and must not
/// change while a search borrows them.
pub trait Pather<N> {
    /// Append the outgoing edges of `node` into `buf`. The caller clears
    /// `buf` before calling. Unknown nodes simply append nothing.
    fn successors(&self, node: &N, buf: &mut Vec<Edge<N>>);
}

/// Pather whose edges can be walked backwards, as needed by
/// nearest-target searches.
pub trait ReversiblePather<N>: Pather<N> {
    type Reversed: Pather<N>;

    /// The same nodes with every edge inverted and its weight kept.
    fn reversed(&self) -> Self::Reversed;
}

impl<N: Clone + Eq + Hash> Pather<N> for Graph<N> {
    #[inline]
    fn successors(&self, node: &N, buf: &mut Vec<Edge<N>>) {
        buf.extend_from_slice(self.edges(node));
    }
}

impl<N: Clone + Eq + Hash> ReversiblePather<N> for Graph<N> {
    type Reversed = Graph<N>;

    fn reversed(&self) -> Graph<N> {
        Graph::reversed(self)
    }
}
