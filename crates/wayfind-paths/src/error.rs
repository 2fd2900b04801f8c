use thiserror::Error;

/// Structural failures surfaced by search and path reconstruction.
///
/// An unreachable destination is not an error; it is reported as an empty
/// path with infinite length.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Following predecessor links revisited a node. Only possible when a
    /// graph reported a negative edge weight.
    #[error("predecessor links form a cycle (detected after {steps} steps)")]
    PredecessorCycle { steps: usize },
}
