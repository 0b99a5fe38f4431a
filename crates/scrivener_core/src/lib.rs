//! Core data types for the Scrivener article generator.
//!
//! This crate holds the values that flow through a generation run: the
//! user's form, the validated request, parsed titles and outlines, the
//! final article, plus the provider-neutral request and response types.

mod article;
mod budget;
mod config;
mod form;
mod message;
mod outline;
mod output;
mod request;
mod role;
mod titles;
mod token_usage;

pub use article::{Article, ArticleBuilder, EXPORT_PREFIX, ExportFormat};
pub use budget::{StageBudget, StageBudgets};
pub use config::{
    DEFAULT_API_VERSION, DEFAULT_ENDPOINT, DEFAULT_MODEL, ProviderConfig, ScrivenerConfig,
};
pub use form::{
    ArticleForm, ArticleFormBuilder, ArticleLength, Audience, GenerationRequest, Genre,
    MIN_KEYWORD_CHARS, TitleRequest,
};
pub use message::Message;
pub use outline::{OutlineStructure, Section, SectionContent};
pub use output::Output;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use titles::{MAX_TITLE_CANDIDATES, TitleSet};
pub use token_usage::TokenUsageData;
