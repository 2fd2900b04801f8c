//! The best-first relaxation loop shared by Dijkstra, A* and nearest-target
//! searches.
//!
//! A run seeds the frontier with one or more nodes at distance 0 and then
//! repeatedly extracts the lowest-priority entry. Entries whose recorded
//! distance has since been beaten are discarded (lazy deletion). Every
//! accepted node is checked against the [`Goal`] and, if it is not the goal,
//! has its out-edges relaxed. With non-negative weights and an admissible
//! heuristic, the first accepted pop of a node carries its final distance.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use wayfind_core::Edge;

use crate::config::SearchConfig;
use crate::frontier::Frontier;
use crate::traits::Pather;

/// When a run stops.
#[derive(Debug, Clone)]
pub enum Goal<N> {
    /// Settle every reachable node.
    Exhaust,
    /// Stop once this node is accepted.
    Sink(N),
    /// Stop once any of these nodes is accepted.
    AnyOf(HashSet<N>),
}

impl<N: Eq + Hash> Goal<N> {
    #[inline]
    fn is_reached(&self, node: &N) -> bool {
        match self {
            Goal::Exhaust => false,
            Goal::Sink(sink) => sink == node,
            Goal::AnyOf(targets) => targets.contains(node),
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination<N> {
    /// The goal predicate accepted this node.
    Found(N),
    /// The frontier emptied, or the step budget ran out, first.
    Exhausted,
}

/// Counters describing the work a run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Entries taken off the frontier, stale ones included.
    pub pops: usize,
    /// Entries discarded because a shorter distance was already recorded.
    pub stale: usize,
    /// Edges that improved a recorded distance.
    pub relaxations: usize,
}

/// Everything a run produced.
///
/// A node missing from `distances` was never reached: its distance is
/// infinite. `predecessors` maps each reached non-seed node to the node it
/// was last improved from.
#[derive(Debug, Clone)]
pub struct SearchResult<N> {
    pub distances: HashMap<N, f64>,
    pub predecessors: HashMap<N, N>,
    pub termination: Termination<N>,
    /// Set when [`SearchConfig::max_steps`] cut the run short.
    pub truncated: bool,
    pub stats: SearchStats,
}

impl<N> SearchResult<N> {
    /// The node that satisfied the goal, if any.
    pub fn found(&self) -> Option<&N> {
        match &self.termination {
            Termination::Found(n) => Some(n),
            Termination::Exhausted => None,
        }
    }
}

/// A queued candidate: the node and the distance it was queued with.
struct Reached<N> {
    node: N,
    dist: f64,
}

/// Run one search over `graph`.
///
/// Every seed starts at distance 0. `priority(node, dist)` orders the
/// frontier: `dist` itself for Dijkstra, `dist + h(node)` for A*. The goal
/// check happens when a node is extracted, not when it is discovered.
pub fn relax<N, G, P>(
    graph: &G,
    seeds: impl IntoIterator<Item = N>,
    goal: &Goal<N>,
    priority: P,
    config: &SearchConfig,
) -> SearchResult<N>
where
    N: Clone + Eq + Hash,
    G: Pather<N> + ?Sized,
    P: Fn(&N, f64) -> f64,
{
    let mut distances: HashMap<N, f64> = HashMap::new();
    let mut predecessors: HashMap<N, N> = HashMap::new();
    let mut frontier: Frontier<Reached<N>> = Frontier::new();
    let mut stats = SearchStats::default();
    let mut truncated = false;

    for seed in seeds {
        if distances.contains_key(&seed) {
            continue;
        }
        distances.insert(seed.clone(), 0.0);
        frontier.insert(priority(&seed, 0.0), Reached { node: seed, dist: 0.0 });
    }

    let mut buf: Vec<Edge<N>> = Vec::new();

    let termination = loop {
        if config.max_steps.is_some_and(|max| stats.pops >= max) && !frontier.is_empty() {
            truncated = true;
            break Termination::Exhausted;
        }
        let Some((_, Reached { node, dist })) = frontier.extract_min() else {
            break Termination::Exhausted;
        };
        stats.pops += 1;

        // Skip stale entries.
        if distances.get(&node).is_some_and(|&best| dist > best) {
            stats.stale += 1;
            continue;
        }

        if goal.is_reached(&node) {
            break Termination::Found(node);
        }

        log::trace!("settled node at distance {dist}");

        buf.clear();
        graph.successors(&node, &mut buf);

        for Edge { weight, target } in buf.drain(..) {
            let candidate = dist + weight;
            if config.max_distance.is_some_and(|max| candidate > max) {
                continue;
            }
            if distances.get(&target).is_some_and(|&d| candidate >= d) {
                continue;
            }
            distances.insert(target.clone(), candidate);
            predecessors.insert(target.clone(), node.clone());
            stats.relaxations += 1;
            frontier.insert(
                priority(&target, candidate),
                Reached {
                    node: target,
                    dist: candidate,
                },
            );
        }
    };

    log::debug!(
        "search finished: found={} truncated={} reached={} pops={} stale={} relaxations={}",
        matches!(termination, Termination::Found(_)),
        truncated,
        distances.len(),
        stats.pops,
        stats.stale,
        stats.relaxations,
    );

    SearchResult {
        distances,
        predecessors,
        termination,
        truncated,
        stats,
    }
}
