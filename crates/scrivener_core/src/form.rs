//! User-supplied article inputs and their validated form.

use scrivener_error::{ValidationError, ValidationIssue};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Minimum number of characters in a trimmed main keyword.
pub const MIN_KEYWORD_CHARS: usize = 2;

/// Article genre.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Genre {
    Technology,
    Business,
    Lifestyle,
    HealthBeauty,
    Education,
    Entertainment,
    Travel,
    Food,
    Fashion,
    Other,
}

/// Intended readership.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Audience {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    General,
}

/// Article length tier.
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
    strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ArticleLength {
    Short,
    #[default]
    Standard,
    Long,
}

impl ArticleLength {
    /// Target size and section count handed to the outline prompt.
    pub fn guide(&self) -> &'static str {
        match self {
            ArticleLength::Short => "2000-3000 characters (5-6 sections)",
            ArticleLength::Standard => "3000-5000 characters (6-8 sections)",
            ArticleLength::Long => "5000-8000 characters (8-10 sections)",
        }
    }
}

/// Raw field values as entered in the host's form.
///
/// Empty strings mean "not entered". Nothing is checked until
/// [`ArticleForm::validate`] or [`ArticleForm::title_request`].
///
/// # Examples
///
/// ```
/// use scrivener_core::ArticleForm;
///
/// let form = ArticleForm::builder()
///     .keyword("time management")
///     .genre("business")
///     .audience("beginner")
///     .build()
///     .expect("all fields have defaults");
/// let request = form.validate().expect("valid form");
/// assert_eq!(request.keyword(), "time management");
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct ArticleForm {
    /// Main keyword
    keyword: String,
    /// Genre name
    genre: String,
    /// Audience name
    audience: String,
    /// Free-text sub-keywords
    sub_keywords: String,
    /// Length tier name; empty selects the standard tier
    length: String,
    /// Free-text notes on angle or approach
    approach: String,
}

impl ArticleForm {
    /// Returns a builder for constructing an ArticleForm.
    pub fn builder() -> ArticleFormBuilder {
        ArticleFormBuilder::default()
    }

    /// Checks every field needed for a full article run.
    ///
    /// All problems are collected, in field order, rather than stopping at
    /// the first.
    pub fn validate(&self) -> Result<GenerationRequest, ValidationError> {
        let mut issues = Vec::new();

        let keyword = check_keyword(&self.keyword, &mut issues);
        let genre = required::<Genre>(
            &self.genre,
            ValidationIssue::MissingGenre,
            ValidationIssue::UnknownGenre,
            &mut issues,
        );
        let audience = required::<Audience>(
            &self.audience,
            ValidationIssue::MissingAudience,
            ValidationIssue::UnknownAudience,
            &mut issues,
        );
        let length = optional::<ArticleLength>(
            &self.length,
            ValidationIssue::UnknownLength,
            &mut issues,
        )
        .unwrap_or_default();

        match (keyword, genre, audience) {
            (Some(keyword), Some(genre), Some(audience)) if issues.is_empty() => {
                Ok(GenerationRequest {
                    keyword,
                    genre,
                    audience,
                    sub_keywords: non_empty(&self.sub_keywords),
                    length,
                    approach: non_empty(&self.approach),
                })
            }
            _ => Err(ValidationError::new(issues)),
        }
    }

    /// Checks only what the title path needs: the keyword.
    ///
    /// Genre and audience are passed along when they parse and skipped
    /// when empty.
    pub fn title_request(&self) -> Result<TitleRequest, ValidationError> {
        let mut issues = Vec::new();

        let keyword = check_keyword(&self.keyword, &mut issues);
        let genre = optional::<Genre>(&self.genre, ValidationIssue::UnknownGenre, &mut issues);
        let audience = optional::<Audience>(
            &self.audience,
            ValidationIssue::UnknownAudience,
            &mut issues,
        );

        match keyword {
            Some(keyword) if issues.is_empty() => Ok(TitleRequest {
                keyword,
                genre,
                audience,
            }),
            _ => Err(ValidationError::new(issues)),
        }
    }
}

fn check_keyword(raw: &str, issues: &mut Vec<ValidationIssue>) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_KEYWORD_CHARS {
        issues.push(ValidationIssue::KeywordTooShort);
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn required<T: FromStr>(
    raw: &str,
    missing: ValidationIssue,
    unknown: fn(String) -> ValidationIssue,
    issues: &mut Vec<ValidationIssue>,
) -> Option<T> {
    if raw.trim().is_empty() {
        issues.push(missing);
        return None;
    }
    optional(raw, unknown, issues)
}

fn optional<T: FromStr>(
    raw: &str,
    unknown: fn(String) -> ValidationIssue,
    issues: &mut Vec<ValidationIssue>,
) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            issues.push(unknown(trimmed.to_string()));
            None
        }
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Validated inputs for a full article run.
///
/// Only obtainable through [`ArticleForm::validate`], so keyword, genre
/// and audience are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationRequest {
    /// Main keyword, trimmed
    keyword: String,
    /// Article genre
    genre: Genre,
    /// Target audience
    audience: Audience,
    /// Sub-keywords, when entered
    sub_keywords: Option<String>,
    /// Length tier
    length: ArticleLength,
    /// Approach notes, when entered
    approach: Option<String>,
}

/// Validated inputs for the title-only path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct TitleRequest {
    /// Main keyword, trimmed
    keyword: String,
    /// Genre, when selected
    genre: Option<Genre>,
    /// Audience, when selected
    audience: Option<Audience>,
}

impl From<&GenerationRequest> for TitleRequest {
    fn from(request: &GenerationRequest) -> Self {
        Self {
            keyword: request.keyword.clone(),
            genre: Some(request.genre),
            audience: Some(request.audience),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_guides_name_section_counts() {
        assert!(ArticleLength::Short.guide().contains("5-6 sections"));
        assert!(ArticleLength::Standard.guide().contains("6-8 sections"));
        assert!(ArticleLength::Long.guide().contains("8-10 sections"));
    }

    #[test]
    fn test_enum_names_round_trip_through_display() {
        assert_eq!(Genre::HealthBeauty.to_string(), "health-beauty");
        assert_eq!("Health-Beauty".parse::<Genre>().ok(), Some(Genre::HealthBeauty));
        assert_eq!("BEGINNER".parse::<Audience>().ok(), Some(Audience::Beginner));
    }

    #[test]
    fn test_every_choice_parses_from_its_name() {
        use strum::IntoEnumIterator;

        for genre in Genre::iter() {
            assert_eq!(genre.to_string().parse::<Genre>().ok(), Some(genre));
        }
        for audience in Audience::iter() {
            assert_eq!(audience.as_ref().parse::<Audience>().ok(), Some(audience));
        }
        assert_eq!(ArticleLength::iter().count(), 3);
    }

    #[test]
    fn test_keyword_counts_characters_not_bytes() {
        let mut issues = Vec::new();
        assert_eq!(check_keyword(" 時間 ", &mut issues), Some("時間".to_string()));
        assert!(issues.is_empty());

        assert_eq!(check_keyword("時", &mut issues), None);
        assert_eq!(issues, vec![ValidationIssue::KeywordTooShort]);
    }
}
