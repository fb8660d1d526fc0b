//! HTTP boundary: query validation, strategy selection and the JSON envelope.
//!
//! Transport-agnostic so the server binary only maps [`ApiReply::status`]
//! onto a real status code.

use serde::{Deserialize, Serialize};

use crate::core::NameMatchResponse;
use crate::engine::{MatchQuery, NameMatchEngine};
use crate::error::{NameMatchError, Result, EMPTY_NAME_MESSAGE, INVALID_CHARS_MESSAGE};
use crate::script::{is_han_only, is_latin_only};

/// Raw query string parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NameQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub ai: Option<String>,
}

impl NameQuery {
    /// AI mode is on when the flag is present and non-empty
    pub fn wants_ai(&self) -> bool {
        self.ai.as_deref().is_some_and(|flag| !flag.is_empty())
    }
}

/// `{"data": {...}}` body shared by success and error replies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub data: ResponseData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseData {
    /// The untouched `name` parameter
    pub input: String,
    pub best_match_name: String,
    pub message: String,
}

/// Status code plus body, ready to be written by any HTTP layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub body: ResponseEnvelope,
}

impl ApiReply {
    fn success(input: String, response: NameMatchResponse) -> Self {
        Self {
            status: 200,
            body: ResponseEnvelope {
                data: ResponseData {
                    input,
                    best_match_name: response.best_match_name,
                    message: response.message,
                },
            },
        }
    }

    fn failure(input: String, error: &NameMatchError) -> Self {
        Self {
            status: error.status_code(),
            body: ResponseEnvelope {
                data: ResponseData {
                    input,
                    best_match_name: String::new(),
                    message: error.public_message().to_string(),
                },
            },
        }
    }
}

/// Reject blank names and any whitespace-separated part that is not purely
/// Han or purely Latin
pub fn validate_name(trimmed: &str) -> Result<()> {
    if trimmed.is_empty() {
        return Err(NameMatchError::InvalidInput(EMPTY_NAME_MESSAGE));
    }

    let valid = trimmed
        .split_whitespace()
        .all(|part| is_han_only(part) || is_latin_only(part));

    if valid {
        Ok(())
    } else {
        Err(NameMatchError::InvalidInput(INVALID_CHARS_MESSAGE))
    }
}

/// Run one lookup end to end
pub async fn handle_query(engine: &NameMatchEngine, query: NameQuery) -> ApiReply {
    let use_ai = query.wants_ai();
    let input = query.name.unwrap_or_default();
    let trimmed = input.trim();

    let outcome = match validate_name(trimmed) {
        Ok(()) => {
            engine
                .match_name(MatchQuery { name: trimmed.to_string(), use_ai })
                .await
        }
        Err(e) => Err(e),
    };

    match outcome {
        Ok(response) => ApiReply::success(input, response),
        Err(e) => {
            if e.status_code() >= 500 {
                tracing::error!("❌ '{}': {}", input, e);
            } else {
                tracing::debug!("Rejected '{}': {}", input, e);
            }
            ApiReply::failure(input, &e)
        }
    }
}
