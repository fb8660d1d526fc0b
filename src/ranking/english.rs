use crate::core::MatchResult;
use crate::ranking::NameMatcher;
use crate::script::{extract_latin, split_name};

/// Matcher for Latin-only input names
pub struct EnglishMatcher;

/// Number of input tokens that appear in the record's tokens
pub(crate) fn token_overlap(input_tokens: &[String], record_tokens: &[String]) -> usize {
    input_tokens
        .iter()
        .filter(|token| record_tokens.contains(token))
        .count()
}

impl NameMatcher for EnglishMatcher {
    fn match_name(&self, input: &str, roster: &[String]) -> MatchResult {
        let input_tokens = split_name(&extract_latin(input));
        let mut result = MatchResult::new();

        for record in roster {
            let record_tokens = split_name(&extract_latin(record));
            if record_tokens.is_empty() {
                tracing::debug!("Skipping '{}': no Latin part", record);
                continue;
            }

            let matched = token_overlap(&input_tokens, &record_tokens);
            let ratio = matched as f64 / record_tokens.len() as f64;
            result.consider(record, ratio);
        }

        result
    }

    fn name(&self) -> &str {
        "english"
    }
}
