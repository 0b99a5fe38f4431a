//! Title-only generation path.

use crate::{ArticlePipeline, parser, prompts};
use scrivener_core::{TitleRequest, TitleSet};
use scrivener_error::{PipelineError, PipelineErrorKind};
use scrivener_interface::GenerationDriver;
use tracing::{error, info, instrument};

impl<D: GenerationDriver> ArticlePipeline<D> {
    /// Generates title candidates for a keyword.
    ///
    /// Independent of article runs; the result is a fresh [`TitleSet`]
    /// each call. A reply that holds no recognisable titles yields an
    /// empty set, not an error.
    #[instrument(skip_all, fields(keyword = %request.keyword()))]
    pub async fn generate_titles(&self, request: &TitleRequest) -> Result<TitleSet, PipelineError> {
        let prompt = prompts::title_prompt(request);
        let text = self
            .client()
            .generate(&prompt, self.budgets().titles())
            .await
            .map_err(|e| {
                error!(error = %e, stage = "titles", "Title generation failed");
                PipelineError::new(PipelineErrorKind::TitleGeneration(e.kind().to_string()))
            })?;

        let titles = parser::extract_titles(&text);
        info!(
            candidates = titles.candidates().len(),
            recommended = %titles.recommended(),
            "Titles generated"
        );
        Ok(titles)
    }
}
