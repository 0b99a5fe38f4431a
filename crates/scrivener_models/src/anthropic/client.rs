//! Anthropic Messages API client.

use crate::anthropic::{AnthropicContentBlock, AnthropicMessage, AnthropicRequest, AnthropicResponse};
use async_trait::async_trait;
use scrivener_core::{
    GenerateRequest, GenerateResponse, Output, ProviderConfig, Role, TokenUsageData,
};
use scrivener_error::{GenerationError, GenerationErrorKind};
use scrivener_interface::GenerationDriver;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Token budget used when a request does not name one.
const FALLBACK_MAX_TOKENS: u32 = 1024;

/// Anthropic HTTP client.
#[derive(Clone)]
pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    config: ProviderConfig,
}

impl std::fmt::Debug for AnthropicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicClient")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("config", &self.config)
            .finish()
    }
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` for an empty key, or `ClientCreation` if the
    /// HTTP client cannot be built.
    #[instrument(skip(api_key, config), fields(model = %config.model()))]
    pub fn new(api_key: impl Into<String>, config: ProviderConfig) -> Result<Self, GenerationError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::MissingApiKey));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::ClientCreation(e.to_string())))?;

        debug!(endpoint = %config.endpoint(), "Created Anthropic client");
        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    /// Provider settings in use.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn to_anthropic_request(&self, request: &GenerateRequest) -> Result<AnthropicRequest, GenerationError> {
        let mut system = Vec::new();
        let mut messages = Vec::new();

        for message in request.messages() {
            match message.role() {
                Role::System => system.push(message.content().clone()),
                role => messages.push(
                    AnthropicMessage::builder()
                        .role(role.to_string())
                        .content(vec![AnthropicContentBlock::Text {
                            text: message.content().clone(),
                        }])
                        .build()
                        .map_err(|e| GenerationError::new(GenerationErrorKind::Http(e.to_string())))?,
                ),
            }
        }

        let model = request
            .model()
            .clone()
            .unwrap_or_else(|| self.config.model().clone());

        AnthropicRequest::builder()
            .model(model)
            .messages(messages)
            .max_tokens(request.max_tokens().unwrap_or(FALLBACK_MAX_TOKENS))
            .system((!system.is_empty()).then(|| system.join("\n\n")))
            .temperature(*request.temperature())
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::Http(e.to_string())))
    }
}

#[async_trait]
impl GenerationDriver for AnthropicClient {
    #[instrument(skip(self, request), fields(model = %self.config.model(), max_tokens = ?request.max_tokens()))]
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, GenerationError> {
        let body = self.to_anthropic_request(request)?;
        let url = format!("{}/v1/messages", self.config.endpoint().trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", self.config.api_version())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GenerationError::new(GenerationErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, error = %message, "API error");
            return Err(GenerationError::new(GenerationErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        let parsed: AnthropicResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            GenerationError::new(GenerationErrorKind::Parse(e.to_string()))
        })?;

        debug!(
            blocks = parsed.content().len(),
            stop_reason = ?parsed.stop_reason(),
            "Received response"
        );

        Ok(from_anthropic_response(&parsed))
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}

fn from_anthropic_response(response: &AnthropicResponse) -> GenerateResponse {
    let outputs = response
        .content()
        .iter()
        .filter(|block| block.content_type() == "text")
        .filter_map(|block| block.text().clone())
        .map(Output::Text)
        .collect();

    let converted = GenerateResponse::new(outputs);
    match response.usage() {
        Some(usage) => converted.with_usage(TokenUsageData::new(
            *usage.input_tokens(),
            *usage.output_tokens(),
        )),
        None => converted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrivener_core::Message;

    fn client() -> AnthropicClient {
        AnthropicClient::new("test-key", ProviderConfig::default()).expect("Valid client")
    }

    #[test]
    fn test_empty_api_key_is_rejected() {
        let err = AnthropicClient::new("  ", ProviderConfig::default()).unwrap_err();
        assert_eq!(err.kind(), &GenerationErrorKind::MissingApiKey);
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", client());
        assert!(!rendered.contains("test-key"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_request_conversion_splits_system_messages() {
        let request = GenerateRequest::builder()
            .messages(vec![
                Message::new(Role::System, "Be brief."),
                Message::user("Write a title."),
            ])
            .max_tokens(Some(1000))
            .temperature(Some(0.7))
            .build()
            .expect("Valid request");

        let converted = client().to_anthropic_request(&request).expect("converts");
        assert_eq!(converted.system().as_deref(), Some("Be brief."));
        assert_eq!(converted.messages().len(), 1);
        assert_eq!(converted.messages()[0].role(), "user");
        assert_eq!(*converted.max_tokens(), 1000);
        assert_eq!(*converted.temperature(), Some(0.7));
        assert_eq!(converted.model(), scrivener_core::DEFAULT_MODEL);
    }

    #[test]
    fn test_response_conversion_keeps_text_blocks() {
        let body = r#"{
            "id": "msg_01",
            "role": "assistant",
            "content": [
                {"type": "text", "text": "First"},
                {"type": "tool_use", "id": "t1", "name": "x", "input": {}},
                {"type": "text", "text": "Second"}
            ],
            "model": "claude-3-5-sonnet-20241022",
            "usage": {"input_tokens": 10, "output_tokens": 4}
        }"#;
        let parsed: AnthropicResponse = serde_json::from_str(body).expect("parses");

        let converted = from_anthropic_response(&parsed);
        assert_eq!(converted.joined_text(), "First\nSecond");
        assert_eq!(converted.usage().map(|u| u.total_tokens()), Some(14));
    }
}
