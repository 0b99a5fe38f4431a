//! Write command handler.

use super::{BarReporter, WriteArgs, titles::print_titles};
use anyhow::{Context, bail};
use scrivener_article::{ArticlePipeline, RunOutcome, extract_intro};
use scrivener_core::{Article, ArticleForm};
use scrivener_error::ValidationError;
use scrivener_interface::GenerationDriver;
use tracing::{error, info};

/// Runs the full article pipeline and prints or exports the result.
#[tracing::instrument(skip_all, fields(keyword = %args.keyword))]
pub async fn handle_write_command<D: GenerationDriver>(
    pipeline: &ArticlePipeline<D>,
    args: &WriteArgs,
) -> anyhow::Result<Article> {
    let form = ArticleForm::builder()
        .keyword(args.keyword.as_str())
        .genre(args.genre.clone().unwrap_or_default())
        .audience(args.audience.clone().unwrap_or_default())
        .sub_keywords(args.sub_keywords.clone().unwrap_or_default())
        .length(args.length.clone().unwrap_or_default())
        .approach(args.approach.clone().unwrap_or_default())
        .build()?;

    let title = match args.pick_title {
        Some(position) => {
            // Reject bad inputs before spending a call on titles.
            form.validate().map_err(report_rejection)?;
            Some(pick_title(pipeline, &form, position).await?)
        }
        None => args.title.clone(),
    };

    let mut reporter = BarReporter::new();
    let article = match pipeline.run(&form, title.as_deref(), &mut reporter).await {
        RunOutcome::Done(article) => article,
        RunOutcome::Rejected(e) => return Err(report_rejection(e)),
        RunOutcome::Failed(e) => {
            error!(error = %e, "Article generation failed");
            return Err(e.into());
        }
    };

    println!("{}", article.text());
    println!();
    println!("Introduction: {}", extract_intro(article.text()));
    println!("Sections: {}", article.section_count());

    if let Some(dir) = &args.output_dir {
        let path = article
            .write_to(dir, args.format)
            .with_context(|| format!("Failed to write article into {}", dir.display()))?;
        info!(path = %path.display(), "Article exported");
        println!("Saved: {}", path.display());
    }

    Ok(article)
}

fn report_rejection(e: ValidationError) -> anyhow::Error {
    for message in e.messages() {
        eprintln!("error: {}", message);
    }
    e.into()
}

async fn pick_title<D: GenerationDriver>(
    pipeline: &ArticlePipeline<D>,
    form: &ArticleForm,
    position: usize,
) -> anyhow::Result<String> {
    let titles = pipeline.generate_titles(&form.title_request()?).await?;
    print_titles(&titles);

    match titles.select(position) {
        Some(title) => {
            info!(position, title, "Selected title");
            Ok(title.to_string())
        }
        None => bail!(
            "No title candidate {} (got {})",
            position,
            titles.candidates().len()
        ),
    }
}
