pub mod match_result;
pub mod name_match_response;

pub use match_result::MatchResult;
pub use name_match_response::{ConfidenceTier, NameMatchResponse};
