use crate::parser::{ARTICLE_BODY_MARKER, CLOSING_HEADING, INTRO_MARKER};
use scrivener_core::{Audience, SectionContent};

/// Merges the run's pieces into the final article text.
///
/// Layout, top to bottom: the labelled intro block, the body label, the
/// optional `# title` heading, the intro again, every section body in
/// outline order, then the closing summary naming keyword and audience.
///
/// # Examples
///
/// ```
/// use scrivener_article::assemble;
/// use scrivener_core::Audience;
///
/// let text = assemble("coffee", Audience::Beginner, "Hello.", None, &[]);
/// assert!(text.starts_with("**Introduction:** Hello.\n\n**Article body:**\n\nHello.\n\n## Summary"));
/// ```
pub fn assemble(
    keyword: &str,
    audience: Audience,
    intro: &str,
    title: Option<&str>,
    sections: &[SectionContent],
) -> String {
    let mut text = format!("{INTRO_MARKER} {intro}\n\n{ARTICLE_BODY_MARKER}\n\n");

    if let Some(title) = title {
        text.push_str(&format!("# {}\n\n", title));
    }

    text.push_str(&format!("{}\n\n", intro));

    for section in sections {
        text.push_str(section.body());
        text.push_str("\n\n");
    }

    text.push_str(&format!("{CLOSING_HEADING}\n\n"));
    text.push_str(&format!(
        "This article took a detailed look at {keyword}. \
         By putting each point into practice, even {audience} readers can apply it effectively."
    ));
    text
}
