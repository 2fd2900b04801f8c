//! **wayfind-core** — graph and geometry types for shortest-path search.
//!
//! This crate provides the inputs the `wayfind-paths` engine consumes: a
//! weighted directed [`Graph`] keyed by any hashable node identifier, the
//! [`Point`] / [`Range`] grid primitives, and the [`Coords`] table that
//! heuristics use to place label-keyed nodes in the plane.
//!
//! Edge weights are validated when edges are added: they must be finite and
//! non-negative. A graph must not be mutated while a search borrows it.

pub mod coords;
pub mod error;
pub mod geom;
pub mod graph;

pub use coords::Coords;
pub use error::GraphError;
pub use geom::{Coord, Point, Range};
pub use graph::{Edge, Graph, grid_graph};
