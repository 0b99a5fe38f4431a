//! The article run state machine.

use crate::{GenerationClient, assemble, parser, prompts};
use scrivener_core::{Article, ArticleForm, GenerationRequest, SectionContent, StageBudgets};
use scrivener_error::{
    PipelineError, PipelineErrorKind, ScrivenerError, ScrivenerResult, ValidationError,
};
use scrivener_interface::{GenerationDriver, ProgressReporter, ProgressUpdate, RunState};
use tracing::{error, info, instrument, warn};

const OUTLINE_REQUESTED_PERCENT: u8 = 25;
const OUTLINE_PARSED_PERCENT: u8 = 35;
const SECTIONS_SPAN_PERCENT: usize = 50;
const ASSEMBLED_PERCENT: u8 = 95;
const DONE_PERCENT: u8 = 100;

/// How a run ended.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// Inputs failed validation; no call was made and the run stayed idle.
    Rejected(ValidationError),
    /// The outline stage failed; no article.
    Failed(PipelineError),
    /// The article was assembled.
    Done(Article),
}

impl RunOutcome {
    /// Terminal state of the run.
    pub fn state(&self) -> RunState {
        match self {
            RunOutcome::Rejected(_) => RunState::Idle,
            RunOutcome::Failed(_) => RunState::Failed,
            RunOutcome::Done(_) => RunState::Done,
        }
    }

    /// The article, when the run reached `Done`.
    pub fn article(&self) -> Option<&Article> {
        match self {
            RunOutcome::Done(article) => Some(article),
            _ => None,
        }
    }

    /// Converts the outcome into a result.
    pub fn into_result(self) -> ScrivenerResult<Article> {
        match self {
            RunOutcome::Rejected(e) => Err(ScrivenerError::from(e)),
            RunOutcome::Failed(e) => Err(ScrivenerError::from(e)),
            RunOutcome::Done(article) => Ok(article),
        }
    }
}

/// Outline-driven article generator.
///
/// Stages run one after another: outline, each section in outline order,
/// then assembly. Only the outline stage can fail a run; a section whose
/// call fails is left out and the loop moves on.
///
/// # Examples
///
/// ```no_run
/// # async fn example(driver: impl scrivener_interface::GenerationDriver) {
/// use scrivener_article::ArticlePipeline;
/// use scrivener_core::{ArticleForm, StageBudgets};
/// use scrivener_interface::TracingReporter;
///
/// let pipeline = ArticlePipeline::new(driver, StageBudgets::default());
/// let form = ArticleForm::builder()
///     .keyword("time management")
///     .genre("business")
///     .audience("beginner")
///     .build()
///     .expect("all fields have defaults");
///
/// let outcome = pipeline.run(&form, None, &mut TracingReporter).await;
/// if let Some(article) = outcome.article() {
///     println!("{}", article.text());
/// }
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ArticlePipeline<D> {
    client: GenerationClient<D>,
    budgets: StageBudgets,
}

impl<D: GenerationDriver> ArticlePipeline<D> {
    /// Creates a pipeline over a provider driver.
    pub fn new(driver: D, budgets: StageBudgets) -> Self {
        Self {
            client: GenerationClient::new(driver),
            budgets,
        }
    }

    /// The generation client.
    pub fn client(&self) -> &GenerationClient<D> {
        &self.client
    }

    /// Per-stage budgets.
    pub fn budgets(&self) -> &StageBudgets {
        &self.budgets
    }

    /// Validates `form` and runs the full pipeline.
    ///
    /// `selected_title`, when non-blank, becomes the article's `#` heading.
    pub async fn run<R>(
        &self,
        form: &ArticleForm,
        selected_title: Option<&str>,
        reporter: &mut R,
    ) -> RunOutcome
    where
        R: ProgressReporter + ?Sized,
    {
        match form.validate() {
            Ok(request) => self.run_request(&request, selected_title, reporter).await,
            Err(e) => {
                warn!(issues = ?e.messages(), "Rejected article inputs");
                RunOutcome::Rejected(e)
            }
        }
    }

    /// Runs the pipeline for an already validated request.
    #[instrument(skip_all, fields(keyword = %request.keyword(), genre = %request.genre()))]
    pub async fn run_request<R>(
        &self,
        request: &GenerationRequest,
        selected_title: Option<&str>,
        reporter: &mut R,
    ) -> RunOutcome
    where
        R: ProgressReporter + ?Sized,
    {
        reporter.report(&ProgressUpdate::new(
            RunState::OutlineRequested,
            OUTLINE_REQUESTED_PERCENT,
        ));
        let outline_prompt = prompts::outline_prompt(request);
        let outline_text = match self
            .client
            .generate(&outline_prompt, self.budgets.outline())
            .await
        {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, stage = "outline", "Outline generation failed");
                reporter.report(&ProgressUpdate::new(
                    RunState::Failed,
                    OUTLINE_REQUESTED_PERCENT,
                ));
                return RunOutcome::Failed(PipelineError::new(
                    PipelineErrorKind::OutlineGeneration(e.kind().to_string()),
                ));
            }
        };

        let outline = parser::extract_outline(&outline_text);
        reporter.report(&ProgressUpdate::new(
            RunState::OutlineParsed,
            OUTLINE_PARSED_PERCENT,
        ));
        info!(sections = outline.len(), "Outline parsed");

        let context = prompts::section_context(request);
        let total = outline.len();
        let mut bodies = Vec::with_capacity(total);

        for (index, section) in outline.sections().iter().enumerate() {
            let current = index + 1;
            reporter.report(&ProgressUpdate::new(
                RunState::SectionsInProgress { current, total },
                section_percent(current, total),
            ));

            let prompt = prompts::section_prompt(request.keyword(), section, &context);
            match self.client.generate(&prompt, self.budgets.section()).await {
                Ok(body) => bodies.push(SectionContent::new(section, body)),
                Err(e) => warn!(
                    section = current,
                    total,
                    title = %section.title(),
                    error = %e,
                    "Section generation failed; leaving it out"
                ),
            }
        }

        let title = selected_title.map(str::trim).filter(|t| !t.is_empty());
        let text = assemble(
            request.keyword(),
            *request.audience(),
            outline.intro(),
            title,
            &bodies,
        );
        reporter.report(&ProgressUpdate::new(RunState::Assembled, ASSEMBLED_PERCENT));

        let article = Article::new(
            request.keyword().clone(),
            title.map(str::to_string),
            text,
            bodies.len(),
        );

        reporter.report(&ProgressUpdate::new(RunState::Done, DONE_PERCENT));
        info!(
            section_count = *article.section_count(),
            planned = total,
            "Article complete"
        );
        RunOutcome::Done(article)
    }
}

/// Display percentage while generating section `current` of `total`.
fn section_percent(current: usize, total: usize) -> u8 {
    if total == 0 {
        return OUTLINE_PARSED_PERCENT;
    }
    let span = SECTIONS_SPAN_PERCENT * current.min(total) / total;
    OUTLINE_PARSED_PERCENT.saturating_add(span as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_percent_spans_35_to_85() {
        assert_eq!(section_percent(1, 3), 51);
        assert_eq!(section_percent(2, 3), 68);
        assert_eq!(section_percent(3, 3), 85);
        assert_eq!(section_percent(0, 0), 35);
    }
}
