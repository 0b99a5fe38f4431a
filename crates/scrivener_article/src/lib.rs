//! Outline-driven article generation.
//!
//! A run turns a keyword into an outline, then one body per outline
//! section, then a single merged document:
//!
//! - [`prompts`] builds the text prompt for each stage.
//! - [`parser`] pulls titles, outline and intro out of model text.
//! - [`GenerationClient`] sends one prompt with a stage budget.
//! - [`ArticlePipeline`] sequences the stages and reports progress.

mod assembly;
mod client;
pub mod parser;
mod pipeline;
pub mod prompts;
mod titles;

pub use assembly::assemble;
pub use client::GenerationClient;
pub use parser::{
    ARTICLE_BODY_MARKER, CLOSING_HEADING, INTRO_MARKER, INTRO_NOT_FOUND, RECOMMENDED_MARKER,
    TITLE_CANDIDATES_MARKER, extract_intro, extract_outline, extract_titles,
};
pub use pipeline::{ArticlePipeline, RunOutcome};
