use crate::ai::AiMatcher;
use crate::core::NameMatchResponse;
use crate::error::{NameMatchError, Result};
use crate::ranking::matcher_for;
use crate::roster::Roster;
use std::sync::Arc;
use std::time::Instant;

/// Match a validated name against `roster` without any AI help.
///
/// The name is routed by script (Han-only, Latin-only, or mixed) to one
/// matcher, and the matcher's best ratio is reduced to a confidence message.
pub fn match_name_manually(input_name: &str, roster: &[String]) -> NameMatchResponse {
    let matcher = matcher_for(input_name);
    let result = matcher.match_name(input_name, roster);

    tracing::debug!(
        "{} matcher: '{}' → {:?} ({:.4})",
        matcher.name(),
        input_name,
        result.best_match,
        result.best_ratio
    );

    NameMatchResponse::from_match_result(&result)
}

/// Main name matching orchestrator
pub struct NameMatchEngine {
    roster: Arc<Roster>,
    ai: Option<Arc<dyn AiMatcher>>,
}

/// Match request parameters
#[derive(Debug, Clone)]
pub struct MatchQuery {
    pub name: String,
    pub use_ai: bool,
}

impl NameMatchEngine {
    /// Create an engine with manual matching only
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: Arc::new(roster),
            ai: None,
        }
    }

    /// Inject the AI matcher used for `use_ai` queries
    pub fn with_ai(mut self, matcher: Arc<dyn AiMatcher>) -> Self {
        self.ai = Some(matcher);
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn has_ai(&self) -> bool {
        self.ai.is_some()
    }

    /// Manual match against the engine's roster
    pub fn match_manually(&self, name: &str) -> NameMatchResponse {
        match_name_manually(name, self.roster.records())
    }

    /// Delegate to the injected AI matcher
    pub async fn match_via_ai(&self, name: &str) -> Result<NameMatchResponse> {
        let ai = self.ai.as_ref().ok_or(NameMatchError::AiNotConfigured)?;

        ai.match_name(name).await.map_err(|e| {
            tracing::warn!("AI matcher {} failed: {}", ai.name(), e);
            e
        })
    }

    /// Match a name with the requested strategy
    pub async fn match_name(&self, query: MatchQuery) -> Result<NameMatchResponse> {
        let start = Instant::now();

        let response = if query.use_ai {
            self.match_via_ai(&query.name).await?
        } else {
            self.match_manually(&query.name)
        };

        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(
            "✅ {} → '{}' [{}] ({}, {:.2}ms)",
            query.name,
            response.best_match_name,
            response.message,
            if query.use_ai { "ai" } else { "manual" },
            latency_ms
        );

        Ok(response)
    }
}

impl Default for NameMatchEngine {
    fn default() -> Self {
        Self::new(Roster::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedAi(NameMatchResponse);

    #[async_trait]
    impl AiMatcher for FixedAi {
        async fn match_name(&self, _name: &str) -> Result<NameMatchResponse> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn roster(records: &[&str]) -> Vec<String> {
        records.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn test_perfect_chinese_match() {
        let response = match_name_manually("月林张", &roster(&["Yueling Zhang 月林张"]));
        assert_eq!(response.best_match_name, "Yueling Zhang 月林张");
        assert_eq!(response.message, "Match found, perfect match!");
    }

    #[test]
    fn test_partial_chinese_match() {
        let response = match_name_manually("安妮", &roster(&["Annie Lee 李安妮"]));
        assert_eq!(response.best_match_name, "Annie Lee 李安妮");
        assert_eq!(response.message, "Match found, partial match!");
    }

    #[test]
    fn test_english_matches() {
        let list = roster(&["Benjamin Lee 本雅明 李"]);

        let response = match_name_manually("Benjamin Lee", &list);
        assert_eq!(response.best_match_name, "Benjamin Lee 本雅明 李");
        assert_eq!(response.message, "Match found, perfect match!");

        let response = match_name_manually("Benjamin", &list);
        assert_eq!(response.best_match_name, "Benjamin Lee 本雅明 李");
        assert_eq!(response.message, "Match found, partial match!");
    }

    #[test]
    fn test_poor_mixed_match() {
        let response = match_name_manually("Benjamin 方正", &roster(&["Benjamin Lee 本雅明 李"]));
        assert_eq!(response.best_match_name, "Benjamin Lee 本雅明 李");
        assert_eq!(response.message, "Match found, poor match!");
    }

    #[test]
    fn test_shared_surname() {
        let list = roster(&["Annie Lee 李安妮", "John Lee 约翰李", "Benjamin Lee 本雅明李"]);

        let response = match_name_manually("lee", &list);
        assert_eq!(
            response.best_match_name,
            "Annie Lee 李安妮, John Lee 约翰李, Benjamin Lee 本雅明李"
        );
        assert_eq!(response.message, "Match found, partial match!");

        let response = match_name_manually("lee 李", &list);
        assert_eq!(response.best_match_name, "Annie Lee 李安妮, John Lee 约翰李");
        assert_eq!(response.message, "Match found, poor match!");

        let response = match_name_manually("李", &list);
        assert_eq!(response.best_match_name, "Annie Lee 李安妮, John Lee 约翰李");
        assert_eq!(response.message, "Match found, poor match!");
    }

    #[test]
    fn test_no_match() {
        let response = match_name_manually("David 大卫", &roster(&["Annie Lee 李安妮", "John Lee 约翰李"]));
        assert_eq!(response.best_match_name, "");
        assert_eq!(response.message, "No match found.");
    }

    #[test]
    fn test_empty_roster() {
        let response = match_name_manually("Annie", &[]);
        assert_eq!(response, NameMatchResponse::new("", "No match found."));
    }

    #[tokio::test]
    async fn test_manual_query() {
        let engine = NameMatchEngine::default();
        let response = engine
            .match_name(MatchQuery { name: "Huawen Wu".to_string(), use_ai: false })
            .await
            .unwrap();

        assert_eq!(response.best_match_name, "Huawen Wu 华文吴");
        assert_eq!(response.message, "Match found, perfect match!");
    }

    #[tokio::test]
    async fn test_ai_query_uses_injected_matcher() {
        let canned = NameMatchResponse::new("Benjamin Lee 本雅明李", "Match found, partial match!");
        let engine = NameMatchEngine::default().with_ai(Arc::new(FixedAi(canned.clone())));
        assert!(engine.has_ai());

        let response = engine
            .match_name(MatchQuery { name: "ben".to_string(), use_ai: true })
            .await
            .unwrap();
        assert_eq!(response, canned);
    }

    #[tokio::test]
    async fn test_ai_query_without_matcher() {
        let engine = NameMatchEngine::default();
        let err = engine
            .match_name(MatchQuery { name: "ben".to_string(), use_ai: true })
            .await
            .unwrap_err();

        assert!(matches!(err, NameMatchError::AiNotConfigured));
    }
}
