use crate::core::MatchResult;
use crate::ranking::english::token_overlap;
use crate::ranking::{han_ratio, NameMatcher};
use crate::script::{extract_han, extract_latin, split_name};

/// Matcher for inputs mixing Han and Latin (or carrying noise chars)
pub struct MixedMatcher;

impl NameMatcher for MixedMatcher {
    fn match_name(&self, input: &str, roster: &[String]) -> MatchResult {
        let input_han = extract_han(input);
        let input_han_len = input_han.chars().count();
        let input_tokens = split_name(&extract_latin(input));
        let mut result = MatchResult::new();

        for record in roster {
            let record_han = extract_han(record);
            let record_tokens = split_name(&extract_latin(record));

            // Token count plus Han char count; the mixed units are intentional
            let denominator = record_tokens.len() + record_han.chars().count();
            if denominator == 0 {
                tracing::debug!("Skipping '{}': nothing to compare", record);
                continue;
            }

            let han = han_ratio(&input_han, &record_han);
            let matched = token_overlap(&input_tokens, &record_tokens);

            let numerator = if han == 0.0 {
                matched
            } else {
                input_han_len + matched
            };
            let ratio = numerator as f64 / denominator as f64;
            result.consider(record, ratio);
        }

        result
    }

    fn name(&self) -> &str {
        "mixed"
    }
}
