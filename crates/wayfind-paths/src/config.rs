/// Limits applied to a single search run.
///
/// The default is unbounded: the search runs until its goal is reached or
/// the frontier empties.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Stop after this many frontier extractions. A search cut short this
    /// way reports `Termination::Exhausted` with `truncated` set, and its
    /// tables hold the partial result.
    pub max_steps: Option<usize>,
    /// Never record a distance above this bound. Nodes farther away are
    /// treated as unreachable.
    pub max_distance: Option<f64>,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_steps(mut self, steps: usize) -> Self {
        self.max_steps = Some(steps);
        self
    }

    pub fn with_max_distance(mut self, distance: f64) -> Self {
        self.max_distance = Some(distance);
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_from_json() {
        let cfg: SearchConfig = serde_json::from_str(r#"{"max_steps": 50}"#).unwrap();
        assert_eq!(cfg, SearchConfig::new().with_max_steps(50));
    }
}
