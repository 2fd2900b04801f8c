use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::config::SearchConfig;
use crate::error::PathError;
use crate::heuristic::Heuristic;
use crate::path::{follow, reconstruct};
use crate::relax::{Goal, SearchResult, relax};
use crate::traits::{Pather, ReversiblePather};

/// A concrete path and its total weight.
///
/// An unreachable destination is an empty path with infinite length.
/// When the step budget ran out before the sink was accepted, the path is
/// empty too but `truncated` is set: the sink may still be reachable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route<N> {
    pub path: Vec<N>,
    pub length: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub truncated: bool,
}

impl<N> Route<N> {
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            length: f64::INFINITY,
            truncated: false,
        }
    }

    /// An empty route from a run the step budget cut short.
    pub fn truncated() -> Self {
        Self {
            truncated: true,
            ..Self::unreachable()
        }
    }

    #[inline]
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Distances and predecessor links from one source to everything it reaches.
#[derive(Debug, Clone)]
pub struct ShortestPaths<N> {
    pub distances: HashMap<N, f64>,
    pub predecessors: HashMap<N, N>,
    /// Set when the step budget stopped the run; missing nodes may then be
    /// reachable and recorded distances may not be final.
    pub truncated: bool,
    source: N,
}

impl<N: Clone + Eq + Hash> ShortestPaths<N> {
    pub fn source(&self) -> &N {
        &self.source
    }

    /// Distance from the source, or `f64::INFINITY` if `node` is unreachable.
    pub fn distance(&self, node: &N) -> f64 {
        self.distances.get(node).copied().unwrap_or(f64::INFINITY)
    }

    /// The path from the source to `node`; empty if unreachable.
    pub fn path_to(&self, node: &N) -> Result<Vec<N>, PathError> {
        reconstruct(&self.predecessors, &self.source, node)
    }
}

/// For every node that can reach a target: the distance to the nearest
/// target and the next node to step to on the way there.
#[derive(Debug, Clone)]
pub struct NearestTargets<N> {
    pub distances: HashMap<N, f64>,
    /// Targets themselves have no entry.
    pub next_hop: HashMap<N, N>,
    /// Set when the step budget stopped the run before every node was
    /// settled.
    pub truncated: bool,
}

impl<N: Clone + Eq + Hash> NearestTargets<N> {
    /// Distance to the nearest target, or `f64::INFINITY` if none is
    /// reachable from `node`.
    pub fn distance(&self, node: &N) -> f64 {
        self.distances.get(node).copied().unwrap_or(f64::INFINITY)
    }

    pub fn next_hop(&self, node: &N) -> Option<&N> {
        self.next_hop.get(node)
    }

    /// The path from `node` to its nearest target, following next hops.
    /// Empty if no target is reachable.
    pub fn path_from(&self, node: &N) -> Result<Vec<N>, PathError> {
        if !self.distances.contains_key(node) {
            return Ok(Vec::new());
        }
        follow(&self.next_hop, node, None)
    }
}

/// Runs searches over one borrowed graph with one [`SearchConfig`].
///
/// Each call owns its own distance table, predecessor map and frontier, so
/// a `PathSearch` can be shared freely across threads when the graph is
/// `Sync`.
#[derive(Debug)]
pub struct PathSearch<'g, G: ?Sized> {
    graph: &'g G,
    config: SearchConfig,
}

impl<G: ?Sized> Clone for PathSearch<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: ?Sized> Copy for PathSearch<'_, G> {}

impl<'g, G: ?Sized> PathSearch<'g, G> {
    /// Create a coordinator with the unbounded default configuration.
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[inline]
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Run the relaxation loop directly with custom seeds, goal and
    /// priority.
    pub fn run<N, P>(
        &self,
        seeds: impl IntoIterator<Item = N>,
        goal: &Goal<N>,
        priority: P,
    ) -> SearchResult<N>
    where
        N: Clone + Eq + Hash,
        G: Pather<N>,
        P: Fn(&N, f64) -> f64,
    {
        relax(self.graph, seeds, goal, priority, &self.config)
    }

    /// Shortest path from `source` to `sink` with Dijkstra's algorithm.
    pub fn shortest_path<N>(&self, source: &N, sink: &N) -> Result<Route<N>, PathError>
    where
        N: Clone + Eq + Hash,
        G: Pather<N>,
    {
        let result = self.run([source.clone()], &Goal::Sink(sink.clone()), |_, d| d);
        result.route(source, sink)
    }

    /// Shortest path from `source` to `sink` with A*.
    ///
    /// The result is optimal only if `heuristic` is admissible. An
    /// inadmissible heuristic is not detected: the search still returns a
    /// valid path, possibly a longer one.
    pub fn shortest_path_astar<N, H>(
        &self,
        source: &N,
        sink: &N,
        heuristic: &H,
    ) -> Result<Route<N>, PathError>
    where
        N: Clone + Eq + Hash,
        G: Pather<N>,
        H: Heuristic<N> + ?Sized,
    {
        let result = self.run([source.clone()], &Goal::Sink(sink.clone()), |n, d| {
            d + heuristic.estimate(n, sink)
        });
        result.route(source, sink)
    }

    /// Distances and predecessors from `source` to every reachable node.
    pub fn shortest_paths_from<N>(&self, source: &N) -> ShortestPaths<N>
    where
        N: Clone + Eq + Hash,
        G: Pather<N>,
    {
        let result = self.run([source.clone()], &Goal::Exhaust, |_, d| d);
        ShortestPaths {
            distances: result.distances,
            predecessors: result.predecessors,
            truncated: result.truncated,
            source: source.clone(),
        }
    }

    /// Search forward from `source` and stop at the first target reached.
    ///
    /// Returns the target and the route to it, or `None` when no target is
    /// reachable. `None` is also returned when the step budget runs out
    /// first; use [`run`](Self::run) and check
    /// [`SearchResult::truncated`] to tell the two apart.
    pub fn nearest_target<N>(
        &self,
        source: &N,
        targets: impl IntoIterator<Item = N>,
    ) -> Result<Option<(N, Route<N>)>, PathError>
    where
        N: Clone + Eq + Hash,
        G: Pather<N>,
    {
        let targets: HashSet<N> = targets.into_iter().collect();
        if targets.is_empty() {
            return Ok(None);
        }
        let result = self.run([source.clone()], &Goal::AnyOf(targets), |_, d| d);
        let Some(found) = result.found().cloned() else {
            return Ok(None);
        };
        let route = result.route(source, &found)?;
        Ok(Some((found, route)))
    }

    /// For every node, the distance to the nearest member of `targets` and
    /// the next hop toward it.
    ///
    /// Runs one search on the reversed graph seeded with every target at
    /// distance 0; a predecessor in that search is a next hop in the
    /// original graph.
    pub fn nearest_of<N>(&self, targets: impl IntoIterator<Item = N>) -> NearestTargets<N>
    where
        N: Clone + Eq + Hash,
        G: ReversiblePather<N>,
    {
        let reversed = self.graph.reversed();
        let result = relax(&reversed, targets, &Goal::Exhaust, |_, d| d, &self.config);
        NearestTargets {
            distances: result.distances,
            next_hop: result.predecessors,
            truncated: result.truncated,
        }
    }
}

impl<N: Clone + Eq + Hash> SearchResult<N> {
    /// The route from `source` to `sink` if this run accepted `sink` as its
    /// goal; otherwise [`Route::truncated`] for a budget stop and
    /// [`Route::unreachable`] for anything else.
    pub fn route(&self, source: &N, sink: &N) -> Result<Route<N>, PathError> {
        if self.found() != Some(sink) {
            if self.truncated {
                return Ok(Route::truncated());
            }
            return Ok(Route::unreachable());
        }
        let path = reconstruct(&self.predecessors, source, sink)?;
        if path.is_empty() {
            return Ok(Route::unreachable());
        }
        let length = self.distances.get(sink).copied().unwrap_or(f64::INFINITY);
        Ok(Route {
            path,
            length,
            truncated: false,
        })
    }
}

// ---------------------------------------------------------------------------
// Free functions using the default configuration
// ---------------------------------------------------------------------------

/// Shortest path from `source` to `sink`. See [`PathSearch::shortest_path`].
pub fn shortest_path<N, G>(graph: &G, source: &N, sink: &N) -> Result<Route<N>, PathError>
where
    N: Clone + Eq + Hash,
    G: Pather<N> + ?Sized,
{
    PathSearch::new(graph).shortest_path(source, sink)
}

/// Single-source distances. See [`PathSearch::shortest_paths_from`].
pub fn shortest_paths_from<N, G>(graph: &G, source: &N) -> ShortestPaths<N>
where
    N: Clone + Eq + Hash,
    G: Pather<N> + ?Sized,
{
    PathSearch::new(graph).shortest_paths_from(source)
}

/// Heuristic-guided shortest path. See
/// [`PathSearch::shortest_path_astar`].
pub fn shortest_path_astar<N, G, H>(
    graph: &G,
    source: &N,
    sink: &N,
    heuristic: &H,
) -> Result<Route<N>, PathError>
where
    N: Clone + Eq + Hash,
    G: Pather<N> + ?Sized,
    H: Heuristic<N> + ?Sized,
{
    PathSearch::new(graph).shortest_path_astar(source, sink, heuristic)
}

/// Distance to, and next hop toward, the nearest target. See
/// [`PathSearch::nearest_of`].
pub fn nearest_of<N, G>(graph: &G, targets: impl IntoIterator<Item = N>) -> NearestTargets<N>
where
    N: Clone + Eq + Hash,
    G: ReversiblePather<N> + ?Sized,
{
    PathSearch::new(graph).nearest_of(targets)
}

/// First target reached from `source`. See [`PathSearch::nearest_target`].
pub fn nearest_target<N, G>(
    graph: &G,
    source: &N,
    targets: impl IntoIterator<Item = N>,
) -> Result<Option<(N, Route<N>)>, PathError>
where
    N: Clone + Eq + Hash,
    G: Pather<N> + ?Sized,
{
    PathSearch::new(graph).nearest_target(source, targets)
}
