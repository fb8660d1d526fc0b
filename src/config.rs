//! ⏱️ Process configuration for the server and CLI
//!
//! Everything is read from environment variables (a `.env` file is loaded
//! first when present):
//! - `PORT`               : HTTP listen port
//! - `ROSTER_PATH`        : JSON roster file (built-in roster otherwise)
//! - `OPEN_AI_KEY`        : chat completion API key (AI mode disabled without it)
//! - `OPENAI_MODEL`       : chat completion model
//! - `OPENAI_BASE_URL`    : OpenAI-compatible API root
//! - `AI_TIMEOUT_CONNECT` : TCP connect timeout, seconds
//! - `AI_TIMEOUT_READ`    : whole-request timeout, seconds

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8090;
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// HTTP timeouts for the chat completion call.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use name_match_engine::config::TimeoutConfig;
///
/// let mut vars = HashMap::new();
/// vars.insert("AI_TIMEOUT_READ".to_string(), "60".to_string());
///
/// let timeouts = TimeoutConfig::from_vars(&vars);
/// assert_eq!(timeouts.connect, 5.0);
/// assert_eq!(timeouts.read, 60.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// TCP connection timeout (short: API down = fast fail)
    pub connect: f64,

    /// Whole request timeout (long: completions take seconds)
    pub read: f64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect: 5.0,
            read: 30.0,
        }
    }
}

impl TimeoutConfig {
    /// Build from a variable map, falling back to defaults per field
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let defaults = Self::default();

        Self {
            connect: parse_seconds(vars, "AI_TIMEOUT_CONNECT").unwrap_or(defaults.connect),
            read: parse_seconds(vars, "AI_TIMEOUT_READ").unwrap_or(defaults.read),
        }
    }

    pub fn connect_duration(&self) -> Duration {
        Duration::from_secs_f64(self.connect)
    }

    pub fn read_duration(&self) -> Duration {
        Duration::from_secs_f64(self.read)
    }
}

impl std::fmt::Display for TimeoutConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "connect={}s, read={}s", self.connect, self.read)
    }
}

/// Chat completion client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeouts: TimeoutConfig,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeouts: TimeoutConfig::default(),
        }
    }
}

impl AiConfig {
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let defaults = Self::default();

        Self {
            api_key: non_empty(vars, "OPEN_AI_KEY"),
            model: non_empty(vars, "OPENAI_MODEL").unwrap_or(defaults.model),
            base_url: non_empty(vars, "OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeouts: TimeoutConfig::from_vars(vars),
        }
    }

    /// AI mode needs a key
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Top-level settings shared by the binaries
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub roster_path: Option<PathBuf>,
    pub ai: AiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            roster_path: None,
            ai: AiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build from a variable map (see module docs for the keys)
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        Self {
            port: parse_var(vars, "PORT").unwrap_or(DEFAULT_PORT),
            roster_path: non_empty(vars, "ROSTER_PATH").map(PathBuf::from),
            ai: AiConfig::from_vars(vars),
        }
    }

    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("⚠️ Ignoring unreadable .env: {}", e),
        }

        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }
}

fn non_empty(vars: &HashMap<String, String>, key: &str) -> Option<String> {
    vars.get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_var<T: std::str::FromStr>(vars: &HashMap<String, String>, key: &str) -> Option<T> {
    let raw = non_empty(vars, key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("⚠️ {}={} is not valid, using default", key, raw);
            None
        }
    }
}

/// Timeouts must be positive and representable as a `Duration`
fn parse_seconds(vars: &HashMap<String, String>, key: &str) -> Option<f64> {
    let secs = parse_var::<f64>(vars, key)?;
    if secs > 0.0 && Duration::try_from_secs_f64(secs).is_ok() {
        Some(secs)
    } else {
        tracing::warn!("⚠️ {}={} is out of range, using default", key, secs);
        None
    }
}
