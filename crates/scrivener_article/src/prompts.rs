//! Prompt templates for the title, outline and section stages.
//!
//! Every builder is a pure function of its inputs. Optional values that
//! were not supplied leave no line in the prompt.

use crate::parser::{CLOSING_HEADING, INTRO_MARKER, RECOMMENDED_MARKER, TITLE_CANDIDATES_MARKER};
use scrivener_core::{GenerationRequest, Section, TitleRequest};

const PERSONA: &str = "You are a professional writer with deep knowledge of SEO.";

/// Prompt for five title candidates and a recommendation.
pub fn title_prompt(request: &TitleRequest) -> String {
    let mut prompt = format!(
        "{PERSONA} Create five SEO-optimized title candidates based on the keyword below.\n\n\
         ## Conditions\n\
         - Main keyword: {}\n",
        request.keyword()
    );
    if let Some(genre) = request.genre() {
        prompt.push_str(&format!("- Genre: {}\n", genre));
    }
    if let Some(audience) = request.audience() {
        prompt.push_str(&format!("- Target audience: {}\n", audience));
    }

    prompt.push_str(&format!(
        "\n## Title requirements\n\
         - Place the keyword where search engines weigh it\n\
         - Make the title attractive enough to click\n\
         - Match the search intent behind the keyword\n\
         - Aim for roughly 28-32 characters\n\
         - Use numbers, years or symbols where they help\n\
         - Promise no figures, images or video; the article is text only\n\
         - Promise only what the article can actually deliver\n\n\
         ## Output format\n\
         {TITLE_CANDIDATES_MARKER}\n\
         1. [SEO-optimized title 1]\n\
         2. [SEO-optimized title 2]\n\
         3. [SEO-optimized title 3]\n\
         4. [SEO-optimized title 4]\n\
         5. [SEO-optimized title 5]\n\n\
         {RECOMMENDED_MARKER} [the candidate above with the strongest SEO effect]\n\n\
         Create the title candidates.\n"
    ));
    prompt
}

/// Prompt for the article outline.
pub fn outline_prompt(request: &GenerationRequest) -> String {
    let mut prompt = format!(
        "{PERSONA} Create a detailed table of contents for an article based on the conditions below.\n\n\
         ## Conditions\n\
         - Main keyword: {}\n\
         - Genre: {}\n\
         - Target audience: {}\n\
         - Article length: {}\n",
        request.keyword(),
        request.genre(),
        request.audience(),
        request.length().guide()
    );
    if let Some(sub_keywords) = request.sub_keywords() {
        prompt.push_str(&format!("- Sub-keywords: {}\n", sub_keywords));
    }
    if let Some(approach) = request.approach() {
        prompt.push_str(&format!("- Specific angle: {}\n", approach));
    }

    prompt.push_str(&format!(
        "\n## Structure requirements\n\
         - An introduction that draws the reader in\n\
         - Around 6-10 body sections as H2 headings\n\
         - 2-3 H3 subsections under each section\n\
         - A closing summary\n\
         - A heading structure with strong SEO value\n\n\
         ## Output format\n\
         {INTRO_MARKER} [an engaging introduction of about 120-160 characters]\n\n\
         **Article structure:**\n\
         ## 1. [H2 heading 1]\n\
         ### 1-1. [H3 subheading 1-1]\n\
         ### 1-2. [H3 subheading 1-2]\n\n\
         ## 2. [H2 heading 2]\n\
         ### 2-1. [H3 subheading 2-1]\n\
         ### 2-2. [H3 subheading 2-2]\n\
         ### 2-3. [H3 subheading 2-3]\n\n\
         ...\n\n\
         {CLOSING_HEADING}\n\
         ### Key point 1\n\
         ### Key point 2\n\n\
         Create the detailed structure.\n"
    ));
    prompt
}

/// Context line handed to every section prompt of a run.
pub fn section_context(request: &GenerationRequest) -> String {
    format!("Article theme: {} ({})", request.keyword(), request.genre())
}

/// Prompt for the body of one outline section.
pub fn section_prompt(keyword: &str, section: &Section, context: &str) -> String {
    let mut prompt = format!(
        "{PERSONA} Write one section of an article in detail based on the conditions below.\n\n\
         ## Conditions\n\
         - Main keyword: {}\n\
         - Section title: {}\n",
        keyword,
        section.title()
    );
    if !section.subsections().is_empty() {
        prompt.push_str("- Subsections:\n");
        for subsection in section.subsections() {
            prompt.push_str(&format!("  - {}\n", subsection));
        }
    }
    if !context.trim().is_empty() {
        prompt.push_str(&format!("\n## Article context\n{}\n", context.trim()));
    }

    prompt.push_str(&format!(
        "\n## Writing requirements\n\
         - About 600-1000 characters for the whole section\n\
         - Explain every subsection in depth\n\
         - Include plenty of concrete examples, steps and tips\n\
         - Give practical information the reader can act on\n\
         - Explain specialist material plainly\n\
         - Work the keyword in naturally\n\
         - Describe any figure or diagram in words instead of drawing it\n\n\
         ## Output format\n\
         ## {}\n\n\
         ### [Subsection 1]\n\
         [Details, examples, steps]\n\n\
         ### [Subsection 2]\n\
         [Details, examples, steps]\n\n\
         Write the section.\n",
        section.title()
    ));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_prompt_omits_empty_subsections_and_context() {
        let prompt = section_prompt("coffee", &Section::new("Brewing basics"), "  ");
        assert!(prompt.contains("- Section title: Brewing basics"));
        assert!(!prompt.contains("- Subsections:"));
        assert!(!prompt.contains("## Article context"));
        assert!(prompt.contains("## Brewing basics\n"));
    }

    #[test]
    fn test_section_prompt_lists_subsections_in_order() {
        let section = Section::with_subsections(
            "Brewing basics",
            vec!["Grind size".to_string(), "Water temperature".to_string()],
        );
        let prompt = section_prompt("coffee", &section, "Article theme: coffee (food)");
        let grind = prompt.find("  - Grind size").expect("first subsection");
        let water = prompt.find("  - Water temperature").expect("second subsection");
        assert!(grind < water);
        assert!(prompt.contains("## Article context\nArticle theme: coffee (food)\n"));
    }
}
