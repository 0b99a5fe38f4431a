//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use scrivener_core::ExportFormat;
use std::path::PathBuf;

/// SEO article generator.
#[derive(Parser, Debug)]
#[command(name = "scrivener")]
#[command(about = "Generate SEO titles and articles from a keyword")]
#[command(version)]
pub struct Cli {
    /// Path to a scrivener.toml configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Anthropic API key
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Model override
    #[arg(long, global = true)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate title candidates for a keyword
    Titles(TitlesArgs),
    /// Generate a full article
    Write(WriteArgs),
}

/// Arguments for `scrivener titles`.
#[derive(Args, Debug)]
pub struct TitlesArgs {
    /// Main keyword
    #[arg(short, long)]
    pub keyword: String,

    /// Article genre
    #[arg(short, long)]
    pub genre: Option<String>,

    /// Target audience
    #[arg(short, long)]
    pub audience: Option<String>,
}

/// Arguments for `scrivener write`.
#[derive(Args, Debug)]
pub struct WriteArgs {
    /// Main keyword
    #[arg(short, long)]
    pub keyword: String,

    /// Article genre (technology, business, lifestyle, health-beauty, ...)
    #[arg(short, long)]
    pub genre: Option<String>,

    /// Target audience (beginner, intermediate, advanced, expert, general)
    #[arg(short, long)]
    pub audience: Option<String>,

    /// Secondary keywords to weave in
    #[arg(long)]
    pub sub_keywords: Option<String>,

    /// Article length: short, standard or long
    #[arg(short, long)]
    pub length: Option<String>,

    /// Specific angle or approach
    #[arg(long)]
    pub approach: Option<String>,

    /// Title to head the article
    #[arg(short, long, conflicts_with = "pick_title")]
    pub title: Option<String>,

    /// Generate titles first and use candidate N (1-5)
    #[arg(long, value_name = "N")]
    pub pick_title: Option<usize>,

    /// Directory to write the exported article into
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Export format
    #[arg(short, long, default_value_t = ExportFormat::Markdown)]
    pub format: ExportFormat,
}
