//! # Name Match Engine
//!
//! Matches a personal name written in Chinese, English, or both against a
//! roster of known people:
//! - Script-aware manual matching (Han containment, character overlap, token overlap)
//! - Deterministic ranking with ties kept in roster order
//! - Optional AI-backed matching through an OpenAI-compatible API
//! - Multiple interfaces: Rust library, HTTP API, CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use name_match_engine::{match_name_manually, NAME_LIST};
//!
//! let roster: Vec<String> = NAME_LIST.iter().map(|r| r.to_string()).collect();
//! let response = match_name_manually("月林张", &roster);
//!
//! assert_eq!(response.best_match_name, "Yueling Zhang 月林张");
//! assert_eq!(response.message, "Match found, perfect match!");
//! ```

pub mod ai;
pub mod api;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod ranking;
pub mod roster;
pub mod script;

// Re-export primary types
pub use crate::core::{ConfidenceTier, MatchResult, NameMatchResponse};
pub use crate::engine::{match_name_manually, MatchQuery, NameMatchEngine};
pub use error::{NameMatchError, Result};
pub use roster::{Roster, NAME_LIST};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
