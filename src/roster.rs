use std::path::Path;

use crate::error::{NameMatchError, Result};

/// Built-in reference roster, one "<English name> <Han name>" per person
pub const NAME_LIST: &[&str] = &[
    "Yueling Zhang 月林张",
    "Annie Lee 李安妮",
    "John Lee 约翰李",
    "Benjamin Lee 本雅明李",
    "Huawen Wu 华文吴",
    "David Smith 大卫 斯密斯",
];

/// Ordered, read-only list of known name records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    records: Vec<String>,
}

impl Roster {
    pub fn new(records: Vec<String>) -> Self {
        Self { records }
    }

    /// Roster backed by [`NAME_LIST`]
    pub fn builtin() -> Self {
        Self::new(NAME_LIST.iter().map(|r| r.to_string()).collect())
    }

    /// Load a roster from a JSON array of strings
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            NameMatchError::Config(format!("Cannot read roster {}: {}", path.display(), e))
        })?;

        Self::from_json(&content)
    }

    /// Parse a roster from a JSON array of strings
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<String> = serde_json::from_str(json)
            .map_err(|e| NameMatchError::Config(format!("Invalid roster JSON: {}", e)))?;

        if let Some(index) = records.iter().position(|r| r.trim().is_empty()) {
            return Err(NameMatchError::Config(format!(
                "Roster entry {} is blank",
                index
            )));
        }

        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[String] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
