//! Script classification, extraction and tokenization.
//!
//! Only two scripts are recognized: Han ideographs (U+4E00..=U+9FA5) and
//! ASCII Latin letters. Everything else is either whitespace or noise.

/// Which matcher an input name is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Han,
    Latin,
    Mixed,
}

impl Script {
    /// Classify a whole input name
    pub fn classify(s: &str) -> Self {
        if is_han_only(s) {
            Script::Han
        } else if is_latin_only(s) {
            Script::Latin
        } else {
            Script::Mixed
        }
    }
}

#[inline]
pub fn is_han_char(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// True if the trimmed string is non-empty and holds only Han and whitespace
pub fn is_han_only(s: &str) -> bool {
    let trimmed = s.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| is_han_char(c) || c.is_whitespace())
}

/// True if the trimmed string is non-empty and holds only ASCII letters and whitespace
pub fn is_latin_only(s: &str) -> bool {
    let trimmed = s.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

/// Maximal runs of ASCII letters, joined by a single space.
///
/// Anything that is not a letter (spaces, digits, punctuation, Han) only
/// separates runs and never appears in the output.
pub fn extract_latin(text: &str) -> String {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|run| !run.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Maximal runs of Han ideographs, concatenated with no separator
pub fn extract_han(text: &str) -> String {
    text.chars().filter(|&c| is_han_char(c)).collect()
}

/// Lowercase and split on whitespace, dropping empty tokens
pub fn split_name(name: &str) -> Vec<String> {
    name.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
