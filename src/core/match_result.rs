/// Best-scoring roster records from a single matcher pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchResult {
    /// Records sharing the best ratio, in roster order
    pub best_match: Vec<String>,

    /// Best ratio seen (0.0 when nothing matched)
    pub best_ratio: f64,
}

impl MatchResult {
    /// Empty result (no match)
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored record into the running maximum.
    ///
    /// A strictly higher ratio replaces the current best list; a non-zero
    /// ratio equal to the current best joins it.
    pub fn consider(&mut self, record: &str, ratio: f64) {
        if ratio > self.best_ratio {
            self.best_ratio = ratio;
            self.best_match = vec![record.to_string()];
        } else if ratio != 0.0 && ratio == self.best_ratio {
            self.best_match.push(record.to_string());
        }
    }
}
