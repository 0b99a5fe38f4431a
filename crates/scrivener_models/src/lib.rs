//! Generation provider integrations for Scrivener.
//!
//! Each provider implements [`scrivener_interface::GenerationDriver`].

mod anthropic;

pub use anthropic::{
    AnthropicClient, AnthropicContent, AnthropicContentBlock, AnthropicMessage,
    AnthropicMessageBuilder, AnthropicRequest, AnthropicRequestBuilder, AnthropicResponse,
    AnthropicUsage,
};
