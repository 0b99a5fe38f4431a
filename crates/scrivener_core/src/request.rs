//! Request and response types for provider generation.

use crate::{Message, Output, TokenUsageData};
use serde::{Deserialize, Serialize};

/// Provider-neutral generation request.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Default,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// Conversation messages
    messages: Vec<Message>,
    /// Maximum tokens to generate
    max_tokens: Option<u32>,
    /// Sampling temperature
    temperature: Option<f32>,
    /// Model override; the driver's configured model is used when absent
    model: Option<String>,
}

impl GenerateRequest {
    /// Returns a builder for constructing a GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Single-prompt request with the given budget.
    pub fn from_prompt(prompt: impl Into<String>, max_tokens: u32, temperature: f32) -> Self {
        Self {
            messages: vec![Message::user(prompt)],
            max_tokens: Some(max_tokens),
            temperature: Some(temperature),
            model: None,
        }
    }
}

/// The unified response object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateResponse {
    /// Outputs in provider order
    outputs: Vec<Output>,
    /// Token accounting, when the provider reports it
    usage: Option<TokenUsageData>,
}

impl GenerateResponse {
    /// Creates a response from outputs.
    pub fn new(outputs: Vec<Output>) -> Self {
        Self {
            outputs,
            usage: None,
        }
    }

    /// Creates a response holding a single text output.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![Output::Text(text.into())])
    }

    /// Attaches token usage.
    pub fn with_usage(mut self, usage: TokenUsageData) -> Self {
        self.usage = Some(usage);
        self
    }

    /// Concatenates all text outputs with newlines between them.
    pub fn joined_text(&self) -> String {
        self.outputs
            .iter()
            .map(|output| match output {
                Output::Text(text) => text.as_str(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
