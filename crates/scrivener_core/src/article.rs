//! Assembled articles and their export forms.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File prefix for exported articles.
pub const EXPORT_PREFIX: &str = "article_";

/// Export representation.
///
/// Both formats carry the same bytes; only the file extension differs.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    /// Plain text (`.txt`)
    Text,
    /// Markdown (`.md`)
    #[default]
    Markdown,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Markdown => "md",
        }
    }
}

/// Final document from one successful pipeline run.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Article {
    /// Keyword the article was written for
    keyword: String,
    /// Title heading, when one was selected
    #[builder(default)]
    title: Option<String>,
    /// Full article text
    text: String,
    /// Number of section bodies that made it into the text
    section_count: usize,
}

impl Article {
    /// Creates an article from its parts.
    pub fn new(
        keyword: impl Into<String>,
        title: Option<String>,
        text: impl Into<String>,
        section_count: usize,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            title,
            text: text.into(),
            section_count,
        }
    }

    /// Returns a builder for constructing an Article.
    pub fn builder() -> ArticleBuilder {
        ArticleBuilder::default()
    }

    /// Article text in the requested representation.
    pub fn render(&self, _format: ExportFormat) -> &str {
        &self.text
    }

    /// Export file name: whitespace and path separators in the keyword
    /// become `_`, so the file always lands directly in the output dir.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrivener_core::{Article, ExportFormat};
    ///
    /// let article = Article::builder()
    ///     .keyword("time management")
    ///     .text("body")
    ///     .section_count(1usize)
    ///     .build()
    ///     .expect("valid article");
    /// assert_eq!(article.file_name(ExportFormat::Markdown), "article_time_management.md");
    /// ```
    pub fn file_name(&self, format: ExportFormat) -> String {
        let stem: String = self
            .keyword
            .chars()
            .map(|c| {
                if c.is_whitespace() || c == '/' || c == '\\' {
                    '_'
                } else {
                    c
                }
            })
            .collect();
        format!("{}{}.{}", EXPORT_PREFIX, stem, format.extension())
    }

    /// Writes the export into `dir` and returns the file path.
    #[tracing::instrument(skip_all, fields(dir = %dir.as_ref().display(), format = %format))]
    pub fn write_to(&self, dir: impl AsRef<Path>, format: ExportFormat) -> std::io::Result<PathBuf> {
        let path = dir.as_ref().join(self.file_name(format));
        std::fs::write(&path, self.render(format))?;
        tracing::info!(path = %path.display(), bytes = self.text.len(), "Wrote article");
        Ok(path)
    }
}
