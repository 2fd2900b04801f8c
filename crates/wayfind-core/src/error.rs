use thiserror::Error;

/// Errors raised while building a [`Graph`](crate::Graph).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("edge weight {weight} is not a finite, non-negative number")]
    InvalidWeight { weight: f64 },
}
