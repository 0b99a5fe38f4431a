//! Best-effort extraction over free-form model output.
//!
//! Every function here is total. When the expected structure is missing
//! the result is empty (or [`INTRO_NOT_FOUND`]) and the caller carries on
//! with what it has.

use regex::Regex;
use scrivener_core::{MAX_TITLE_CANDIDATES, OutlineStructure, Section, TitleSet};
use std::sync::LazyLock;
use tracing::debug;

/// Label that opens the numbered title list.
pub const TITLE_CANDIDATES_MARKER: &str = "**Title candidates:**";

/// Label in front of the recommended title.
pub const RECOMMENDED_MARKER: &str = "**Recommended title:**";

/// Label in front of the introduction line.
pub const INTRO_MARKER: &str = "**Introduction:**";

/// Label that separates the intro block from the article body.
pub const ARTICLE_BODY_MARKER: &str = "**Article body:**";

/// Closing heading; never parsed as a section.
pub const CLOSING_HEADING: &str = "## Summary";

/// Returned by [`extract_intro`] when the text has no intro line.
pub const INTRO_NOT_FOUND: &str = "Introduction not found";

const SECTION_PREFIX: &str = "## ";
const SUBSECTION_PREFIX: &str = "### ";

static TITLE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    (1..=MAX_TITLE_CANDIDATES)
        .map(|i| {
            Regex::new(&format!(r"(?m)^[ \t]*{}\.\s*([^\n]+)", i)).expect("numbered item regex")
        })
        .collect()
});

static RECOMMENDED_RE: LazyLock<Regex> = LazyLock::new(|| labelled(RECOMMENDED_MARKER));

static INTRO_RE: LazyLock<Regex> = LazyLock::new(|| labelled(INTRO_MARKER));

fn labelled(marker: &str) -> Regex {
    Regex::new(&format!(r"{}\s*([^\n]+)", regex::escape(marker))).expect("escaped label regex")
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extracts up to five numbered title candidates and the recommended title.
///
/// An item is a numeral and a dot at the start of a line, so `Web 2.0`
/// inside a title is not item 2. Each numeral is searched for on its own,
/// so a missing `3.` does not stop `4.` from being found. Missing items
/// leave no placeholder.
///
/// # Examples
///
/// ```
/// use scrivener_article::extract_titles;
///
/// let text = "1. First\n2. Second\n\n**Recommended title:** Second";
/// let titles = extract_titles(text);
/// assert_eq!(titles.candidates(), &["First", "Second"]);
/// assert_eq!(titles.recommended(), "Second");
/// ```
pub fn extract_titles(text: &str) -> TitleSet {
    let candidates: Vec<String> = TITLE_RES
        .iter()
        .filter_map(|re| first_capture(re, text))
        .collect();
    let recommended = first_capture(&RECOMMENDED_RE, text).unwrap_or_default();

    debug!(
        candidates = candidates.len(),
        has_recommended = !recommended.is_empty(),
        "Extracted titles"
    );
    TitleSet::new(candidates, recommended)
}

/// Extracts the intro line and the section headings of an outline.
///
/// Lines are trimmed before matching. A `## ` line opens a section unless
/// it is the closing heading, which instead ends the current section. A
/// `### ` line is attached to the open section, or dropped when there is
/// none.
pub fn extract_outline(text: &str) -> OutlineStructure {
    let mut sections = Vec::new();
    let mut current: Option<Section> = None;

    for line in text.lines().map(str::trim) {
        if line.starts_with(CLOSING_HEADING) {
            sections.extend(current.take());
        } else if let Some(title) = line.strip_prefix(SECTION_PREFIX) {
            sections.extend(current.take());
            current = Some(Section::new(title.trim()));
        } else if let Some(subsection) = line.strip_prefix(SUBSECTION_PREFIX) {
            match current.as_mut() {
                Some(section) => section.push_subsection(subsection.trim()),
                None => debug!(subsection, "Dropping subsection outside any section"),
            }
        }
    }
    sections.extend(current);

    let intro = first_capture(&INTRO_RE, text).unwrap_or_default();
    debug!(sections = sections.len(), has_intro = !intro.is_empty(), "Extracted outline");
    OutlineStructure::new(intro, sections)
}

/// Extracts the intro line from any text, or [`INTRO_NOT_FOUND`].
pub fn extract_intro(text: &str) -> String {
    first_capture(&INTRO_RE, text).unwrap_or_else(|| INTRO_NOT_FOUND.to_string())
}
