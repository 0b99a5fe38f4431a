//! Titles command handler.

use super::TitlesArgs;
use scrivener_article::ArticlePipeline;
use scrivener_core::{ArticleForm, TitleSet};
use scrivener_interface::GenerationDriver;

/// Generates and prints title candidates.
#[tracing::instrument(skip_all, fields(keyword = %args.keyword))]
pub async fn handle_titles_command<D: GenerationDriver>(
    pipeline: &ArticlePipeline<D>,
    args: &TitlesArgs,
) -> anyhow::Result<TitleSet> {
    let form = ArticleForm::builder()
        .keyword(args.keyword.as_str())
        .genre(args.genre.clone().unwrap_or_default())
        .audience(args.audience.clone().unwrap_or_default())
        .build()?;
    let request = form.title_request()?;

    let titles = pipeline.generate_titles(&request).await?;
    print_titles(&titles);
    Ok(titles)
}

pub(crate) fn print_titles(titles: &TitleSet) {
    if titles.candidates().is_empty() {
        println!("No title candidates found in the response.");
    }
    for (i, title) in titles.candidates().iter().enumerate() {
        println!("{}. {}", i + 1, title);
    }
    if !titles.recommended().is_empty() {
        println!();
        println!("Recommended: {}", titles.recommended());
    }
}
