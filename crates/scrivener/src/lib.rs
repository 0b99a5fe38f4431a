//! Scrivener: SEO article generation from a single keyword.
//!
//! A run asks a text-generation provider for an outline, writes each
//! outline section in turn, and merges everything into one article. A
//! separate call produces title candidates.
//!
//! # Example
//!
//! ```no_run
//! use scrivener::{AnthropicClient, ArticleForm, ArticlePipeline, ScrivenerConfig, TracingReporter};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScrivenerConfig::default();
//! let client = AnthropicClient::new(std::env::var("ANTHROPIC_API_KEY")?, config.provider().clone())?;
//! let pipeline = ArticlePipeline::new(client, *config.budgets());
//!
//! let form = ArticleForm::builder()
//!     .keyword("time management")
//!     .genre("business")
//!     .audience("beginner")
//!     .build()?;
//!
//! let article = pipeline.run(&form, None, &mut TracingReporter).await.into_result()?;
//! println!("{}", article.text());
//! # Ok(())
//! # }
//! ```

pub mod cli;

pub use scrivener_article::{
    ArticlePipeline, GenerationClient, INTRO_NOT_FOUND, RunOutcome, assemble, extract_intro,
    extract_outline, extract_titles, parser, prompts,
};
pub use scrivener_core::{
    Article, ArticleForm, ArticleFormBuilder, ArticleLength, Audience, ExportFormat,
    GenerateRequest, GenerateResponse, GenerationRequest, Genre, Message, OutlineStructure,
    Output, ProviderConfig, Role, ScrivenerConfig, Section, SectionContent, StageBudget,
    StageBudgets, TitleRequest, TitleSet, TokenUsageData,
};
pub use scrivener_error::{
    ConfigError, ConfigErrorKind, GenerationError, GenerationErrorKind, PipelineError,
    PipelineErrorKind, ScrivenerError, ScrivenerErrorKind, ScrivenerResult, ValidationError,
    ValidationIssue,
};
pub use scrivener_interface::{
    GenerationDriver, ProgressReporter, ProgressUpdate, RecordingReporter, RunState,
    TracingReporter,
};
pub use scrivener_models::AnthropicClient;
