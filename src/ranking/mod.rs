pub mod chinese;
pub mod english;
pub mod mixed;
pub mod overlap;

use crate::core::MatchResult;
use crate::script::Script;

pub use chinese::ChineseMatcher;
pub use english::EnglishMatcher;
pub use mixed::MixedMatcher;
pub use overlap::{han_ratio, match_name_character};

/// Trait for script-specific name matching strategies
pub trait NameMatcher: Send + Sync {
    /// Score `input` against every record, keeping the best ratio and its ties
    fn match_name(&self, input: &str, roster: &[String]) -> MatchResult;

    /// Get matcher name for logging
    fn name(&self) -> &str;
}

/// Pick the strategy for an input name based on its script
pub fn matcher_for(input: &str) -> &'static dyn NameMatcher {
    match Script::classify(input) {
        Script::Han => &ChineseMatcher,
        Script::Latin => &EnglishMatcher,
        Script::Mixed => &MixedMatcher,
    }
}
