//! Shortest-path search over weighted directed graphs.
//!
//! This crate provides one best-first relaxation engine and the searches
//! built on it:
//!
//! - **Dijkstra** point-to-point paths ([`shortest_path`])
//! - **Dijkstra** single-source distance tables ([`shortest_paths_from`])
//! - **A\*** heuristic-guided paths ([`shortest_path_astar`])
//! - **Nearest target** tables: distance to, and next hop toward, the
//!   closest member of a target set ([`nearest_of`], [`nearest_target`])
//!
//! All searches run through [`PathSearch`], which pairs a borrowed graph with
//! a [`SearchConfig`]; the free functions use the default configuration.
//! Each run owns its distance table, predecessor map and [`Frontier`], so
//! searches over one shared graph may run on several threads at once.
//!
//! # Preconditions
//!
//! Edge weights must be finite and non-negative. [`wayfind_core::Graph`]
//! enforces this when edges are added; other [`Pather`] implementations are
//! trusted. A* results are optimal only for admissible heuristics, which are
//! not checked at runtime.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | Dijkstra, A*, forward nearest target |
//! | [`ReversiblePather`] : [`Pather`] | [`nearest_of`] |
//! | [`Heuristic`] | A* |

mod config;
mod error;
mod frontier;
mod heuristic;
mod path;
mod relax;
mod search;
mod traits;


pub use config::SearchConfig;
pub use error::PathError;
pub use frontier::Frontier;
pub use heuristic::{
    CoordHeuristic, Heuristic, Metric, Zero, chebyshev, euclidean, manhattan, octile,
};
pub use path::{path_length, reconstruct};
pub use relax::{Goal, SearchResult, SearchStats, Termination, relax};
pub use search::{
    NearestTargets, PathSearch, Route, ShortestPaths, nearest_of, nearest_target, shortest_path,
    shortest_path_astar, shortest_paths_from,
};
pub use traits::{Pather, ReversiblePather};
pub use wayfind_core::{Coord, Coords, Edge, Graph, GraphError, Point, Range};
