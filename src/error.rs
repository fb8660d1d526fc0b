use thiserror::Error;

/// Message returned when the name parameter is missing or blank
pub const EMPTY_NAME_MESSAGE: &str =
    "Invalid input name, The input name must be a string and cannot be empty.";

/// Message returned when the name contains anything but Han, Latin and spaces
pub const INVALID_CHARS_MESSAGE: &str = "Invalid input name. The input name can only consist of Chinese and English characters, along with spaces; numbers, symbols, or other characters are not allowed.";

/// Generic message for any failure on the AI path
pub const AI_FAILURE_MESSAGE: &str = "Failed to match name via AI.";

/// Generic message for any other internal failure
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Main error type for the name match engine
#[derive(Error, Debug)]
pub enum NameMatchError {
    /// Rejected input name (never reaches the matchers)
    #[error("{0}")]
    InvalidInput(&'static str),

    /// HTTP request errors
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Chat completion API errors
    #[error("AI API error: {0}")]
    AiApi(String),

    /// AI mode requested but no client was injected
    #[error("AI matcher is not configured")]
    AiNotConfigured,

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

impl NameMatchError {
    /// HTTP status this error maps to at the boundary
    pub fn status_code(&self) -> u16 {
        match self {
            NameMatchError::InvalidInput(_) => 400,
            _ => 500,
        }
    }

    /// Message safe to hand back to a caller. Internal detail stays in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            NameMatchError::InvalidInput(message) => *message,
            NameMatchError::HttpRequest(_)
            | NameMatchError::Json(_)
            | NameMatchError::AiApi(_)
            | NameMatchError::AiNotConfigured => AI_FAILURE_MESSAGE,
            NameMatchError::Config(_) => UNKNOWN_ERROR_MESSAGE,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, NameMatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_400() {
        let err = NameMatchError::InvalidInput(EMPTY_NAME_MESSAGE);
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.public_message(), EMPTY_NAME_MESSAGE);
    }

    #[test]
    fn test_internal_errors_hide_detail() {
        let err = NameMatchError::AiApi("HTTP 401: bad key sk-123".to_string());
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.public_message(), AI_FAILURE_MESSAGE);

        let err = NameMatchError::Config("ROSTER_PATH unreadable".to_string());
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.public_message(), UNKNOWN_ERROR_MESSAGE);
    }
}
