use std::collections::HashMap;
use std::hash::Hash;

use crate::geom::Coord;

/// Positions of label-keyed nodes, as supplied by whoever built the graph.
///
/// Only heuristics read this table; search itself never looks at geometry.
#[derive(Clone, Debug)]
pub struct Coords<N> {
    table: HashMap<N, Coord>,
}

impl<N> Default for Coords<N> {
    fn default() -> Self {
        Self {
            table: HashMap::new(),
        }
    }
}

impl<N: Eq + Hash> Coords<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position of `node`, returning the previous one if any.
    pub fn insert(&mut self, node: N, at: Coord) -> Option<Coord> {
        self.table.insert(node, at)
    }

    #[inline]
    pub fn get(&self, node: &N) -> Option<Coord> {
        self.table.get(node).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<N: Eq + Hash> FromIterator<(N, Coord)> for Coords<N> {
    fn from_iter<I: IntoIterator<Item = (N, Coord)>>(iter: I) -> Self {
        Self {
            table: iter.into_iter().collect(),
        }
    }
}
