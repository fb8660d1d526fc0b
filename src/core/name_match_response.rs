use serde::{Deserialize, Serialize};
use crate::core::MatchResult;

/// Confidence tier derived from the best ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    /// Ratio exactly 1
    Perfect,
    /// Ratio in [0.5, 1)
    Partial,
    /// Ratio in (0, 0.5)
    Poor,
    /// Anything else
    None,
}

impl ConfidenceTier {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio == 1.0 {
            ConfidenceTier::Perfect
        } else if (0.5..1.0).contains(&ratio) {
            ConfidenceTier::Partial
        } else if ratio > 0.0 && ratio < 0.5 {
            ConfidenceTier::Poor
        } else {
            ConfidenceTier::None
        }
    }

    /// Fixed user-facing message for this tier
    pub fn message(&self) -> &'static str {
        match self {
            ConfidenceTier::Perfect => "Match found, perfect match!",
            ConfidenceTier::Partial => "Match found, partial match!",
            ConfidenceTier::Poor => "Match found, poor match!",
            ConfidenceTier::None => "No match found.",
        }
    }
}

/// Final answer for a name lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameMatchResponse {
    /// Matched records joined by ", " (empty when nothing matched)
    #[serde(default)]
    pub best_match_name: String,

    /// Confidence message
    #[serde(default)]
    pub message: String,
}

impl NameMatchResponse {
    pub fn new(best_match_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            best_match_name: best_match_name.into(),
            message: message.into(),
        }
    }

    /// Reduce a matcher result into the final response
    pub fn from_match_result(result: &MatchResult) -> Self {
        let tier = ConfidenceTier::from_ratio(result.best_ratio);
        let best_match_name = match tier {
            ConfidenceTier::None => String::new(),
            _ => result.best_match.join(", "),
        };

        Self::new(best_match_name, tier.message())
    }
}
