//! Turning predecessor links back into node sequences.

use std::collections::HashMap;
use std::hash::Hash;

use wayfind_core::Edge;

use crate::error::PathError;
use crate::traits::Pather;

/// Rebuild the path `source ..= sink` from a predecessor map.
///
/// Returns `[source]` when `sink == source`, and an empty path when `sink`
/// was never reached from `source`. A predecessor chain that loops back on
/// itself is reported as [`PathError::PredecessorCycle`] instead of being
/// followed forever.
pub fn reconstruct<N>(
    predecessors: &HashMap<N, N>,
    source: &N,
    sink: &N,
) -> Result<Vec<N>, PathError>
where
    N: Clone + Eq + Hash,
{
    if sink == source {
        return Ok(vec![source.clone()]);
    }
    if !predecessors.contains_key(sink) {
        return Ok(Vec::new());
    }
    let mut path = follow(predecessors, sink, Some(source))?;
    if path.last() != Some(source) {
        // The chain ends at some other root: sink was reached from a
        // different seed.
        return Ok(Vec::new());
    }
    path.reverse();
    Ok(path)
}

/// Follow `links` from `start` until a node without a link, or `stop`, is
/// reached. The returned chain starts with `start`.
pub(crate) fn follow<N>(
    links: &HashMap<N, N>,
    start: &N,
    stop: Option<&N>,
) -> Result<Vec<N>, PathError>
where
    N: Clone + Eq + Hash,
{
    let mut chain = vec![start.clone()];
    let mut current = start;
    while stop != Some(current) {
        let Some(next) = links.get(current) else {
            break;
        };
        // Every node in `chain` so far has a link, so a simple chain can
        // hold at most `links.len()` of them.
        if chain.len() > links.len() {
            log::warn!("predecessor cycle after {} steps", chain.len());
            return Err(PathError::PredecessorCycle { steps: chain.len() });
        }
        chain.push(next.clone());
        current = next;
    }
    Ok(chain)
}

/// Sum the edge weights along `path`.
///
/// Between consecutive nodes the cheapest parallel edge is used, which is
/// the one relaxation settles on. Returns `None` for an empty path or when
/// some hop has no edge at all; a single-node path has length 0.
pub fn path_length<N, G>(graph: &G, path: &[N]) -> Option<f64>
where
    N: Eq,
    G: Pather<N> + ?Sized,
{
    if path.is_empty() {
        return None;
    }
    let mut buf: Vec<Edge<N>> = Vec::new();
    let mut total = 0.0;
    for hop in path.windows(2) {
        buf.clear();
        graph.successors(&hop[0], &mut buf);
        let w = buf
            .iter()
            .filter(|e| e.target == hop[1])
            .map(|e| e.weight)
            .min_by(f64::total_cmp)?;
        total += w;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_core::Graph;

    fn preds(pairs: &[(char, char)]) -> HashMap<char, char> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn rebuilds_source_to_sink() {
        let p = preds(&[('b', 'a'), ('c', 'b'), ('d', 'c')]);
        assert_eq!(reconstruct(&p, &'a', &'d'), Ok(vec!['a', 'b', 'c', 'd']));
        assert_eq!(reconstruct(&p, &'a', &'b'), Ok(vec!['a', 'b']));
    }

    #[test]
    fn source_equals_sink() {
        let p = preds(&[]);
        assert_eq!(reconstruct(&p, &'a', &'a'), Ok(vec!['a']));
    }

    #[test]
    fn missing_sink_is_empty() {
        let p = preds(&[('b', 'a')]);
        assert_eq!(reconstruct(&p, &'a', &'z'), Ok(vec![]));
    }

    #[test]
    fn chain_from_another_root_is_empty() {
        let p = preds(&[('b', 'x'), ('c', 'b')]);
        assert_eq!(reconstruct(&p, &'a', &'c'), Ok(vec![]));
    }

    #[test]
    fn cycle_is_reported_not_followed() {
        let p = preds(&[('b', 'c'), ('c', 'd'), ('d', 'b')]);
        assert!(matches!(
            reconstruct(&p, &'a', &'b'),
            Err(PathError::PredecessorCycle { .. })
        ));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let p = preds(&[('b', 'b')]);
        assert_eq!(
            reconstruct(&p, &'a', &'b'),
            Err(PathError::PredecessorCycle { steps: 2 })
        );
    }

    #[test]
    fn length_uses_cheapest_parallel_edge() {
        let g = Graph::from_links([('a', 'b', 5.0), ('a', 'b', 2.0), ('b', 'c', 1.5)]).unwrap();
        assert_eq!(path_length(&g, &['a', 'b', 'c']), Some(3.5));
        assert_eq!(path_length(&g, &['a']), Some(0.0));
        assert_eq!(path_length(&g, &['c', 'a']), None);
        assert_eq!(path_length::<char, _>(&g, &[]), None);
    }
}
