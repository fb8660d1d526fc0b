use crate::core::MatchResult;
use crate::ranking::{han_ratio, NameMatcher};
use crate::script::extract_han;

/// Matcher for Han-only input names
pub struct ChineseMatcher;

impl NameMatcher for ChineseMatcher {
    fn match_name(&self, input: &str, roster: &[String]) -> MatchResult {
        let input_han = extract_han(input);
        let mut result = MatchResult::new();

        for record in roster {
            let record_han = extract_han(record);
            if record_han.is_empty() {
                tracing::debug!("Skipping '{}': no Han part", record);
                continue;
            }

            let ratio = han_ratio(&input_han, &record_han);
            result.consider(record, ratio);
        }

        result
    }

    fn name(&self) -> &str {
        "chinese"
    }
}
