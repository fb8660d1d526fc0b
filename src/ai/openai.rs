use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::ai::prompt::{build_system_prompt, user_message};
use crate::ai::{parse_ai_reply, AiMatcher};
use crate::config::AiConfig;
use crate::core::NameMatchResponse;
use crate::error::{NameMatchError, Result};
use crate::roster::Roster;

/// OpenAI-compatible chat completion matcher
pub struct OpenAiMatcher {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    system_prompt: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiMatcher {
    /// Create a matcher for `roster`; fails without an API key
    pub fn new(config: &AiConfig, roster: &Roster) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| NameMatchError::Config("OPEN_AI_KEY is not set".to_string()))?;

        let client = Client::builder()
            .connect_timeout(config.timeouts.connect_duration())
            .timeout(config.timeouts.read_duration())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key,
            model: config.model.clone(),
            system_prompt: build_system_prompt(roster),
        })
    }

    /// Send one chat completion and return the reply text
    async fn complete(&self, name: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let user = user_message(name);

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: &self.system_prompt },
                ChatMessage { role: "user", content: &user },
            ],
        };

        let response = self.client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| NameMatchError::AiApi(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(NameMatchError::AiApi(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| NameMatchError::AiApi(format!("Invalid JSON: {}", e)))?;

        extract_content(chat)
    }
}

fn extract_content(chat: ChatResponse) -> Result<String> {
    chat.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| NameMatchError::AiApi("Completion has no content".to_string()))
}

#[async_trait]
impl AiMatcher for OpenAiMatcher {
    async fn match_name(&self, name: &str) -> Result<NameMatchResponse> {
        let reply = self.complete(name).await?;
        tracing::debug!("AI reply for '{}': {}", name, reply);

        parse_ai_reply(&reply)
    }

    fn name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimeoutConfig;

    fn config(api_key: Option<&str>) -> AiConfig {
        AiConfig {
            api_key: api_key.map(str::to_string),
            model: "gpt-4o".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
            timeouts: TimeoutConfig { connect: 0.2, read: 0.5 },
        }
    }

    #[test]
    fn test_requires_api_key() {
        let result = OpenAiMatcher::new(&config(None), &Roster::builtin());
        assert!(matches!(result, Err(NameMatchError::Config(_))));
    }

    #[test]
    fn test_builds_prompt_from_roster() {
        let matcher = OpenAiMatcher::new(&config(Some("sk-test")), &Roster::builtin()).unwrap();
        assert!(matcher.system_prompt.contains("Huawen Wu 华文吴"));
        assert_eq!(matcher.name(), "openai");
    }

    #[test]
    fn test_request_shape() {
        let request = ChatRequest {
            model: "gpt-4o",
            messages: vec![
                ChatMessage { role: "system", content: "prompt" },
                ChatMessage { role: "user", content: "The name I would like to match is Lee" },
            ],
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "The name I would like to match is Lee");
    }

    #[test]
    fn test_extract_content() {
        let chat: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "{\"bestMatchName\": \"\"}"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_content(chat).unwrap(), r#"{"bestMatchName": ""}"#);

        let empty: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(extract_content(empty), Err(NameMatchError::AiApi(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_ai_error() {
        let matcher = OpenAiMatcher::new(&config(Some("sk-test")), &Roster::builtin()).unwrap();
        let err = matcher.match_name("Lee").await.unwrap_err();

        assert!(matches!(err, NameMatchError::AiApi(_)));
        assert_eq!(err.status_code(), 500);
    }
}
