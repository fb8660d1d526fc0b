pub mod openai;
pub mod prompt;

use async_trait::async_trait;
use crate::core::NameMatchResponse;
use crate::error::{NameMatchError, Result};

pub use openai::OpenAiMatcher;

/// Trait for language-model backed matchers
#[async_trait]
pub trait AiMatcher: Send + Sync {
    /// Match an already validated name against the roster the matcher was built with
    async fn match_name(&self, name: &str) -> Result<NameMatchResponse>;

    /// Get matcher name for logging
    fn name(&self) -> &str;
}

/// Parse the model's reply text into a response.
///
/// The reply should be a bare JSON object, but a Markdown code fence around
/// it is tolerated. Missing fields default to empty strings.
pub fn parse_ai_reply(text: &str) -> Result<NameMatchResponse> {
    let body = strip_code_fence(text.trim());
    if body.is_empty() {
        return Err(NameMatchError::AiApi("Empty completion".to_string()));
    }

    Ok(serde_json::from_str(body)?)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    // Drop the info string ("json"); a one-line fence may have none
    let rest = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
    };
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
