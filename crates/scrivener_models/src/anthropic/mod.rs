mod client;
mod types;

pub use client::AnthropicClient;
pub use types::{
    AnthropicContent, AnthropicContentBlock, AnthropicMessage, AnthropicMessageBuilder,
    AnthropicRequest, AnthropicRequestBuilder, AnthropicResponse, AnthropicUsage,
};
