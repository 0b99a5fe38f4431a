use scrivener_core::{GenerateRequest, StageBudget};
use scrivener_error::{GenerationError, GenerationErrorKind};
use scrivener_interface::GenerationDriver;
use tracing::{debug, instrument};

/// Sends one prompt to a provider under a stage budget.
///
/// A reply with no text, or only whitespace, is an error: every stage
/// treats "nothing came back" the same way as a failed call.
#[derive(Debug, Clone)]
pub struct GenerationClient<D> {
    driver: D,
}

impl<D: GenerationDriver> GenerationClient<D> {
    /// Wraps a provider driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// The wrapped driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Generates a completion for `prompt`.
    #[instrument(
        skip(self, prompt),
        fields(
            provider = self.driver.provider_name(),
            model = self.driver.model_name(),
            max_tokens = budget.max_tokens(),
            prompt_chars = prompt.chars().count()
        )
    )]
    pub async fn generate(&self, prompt: &str, budget: &StageBudget) -> Result<String, GenerationError> {
        let request = GenerateRequest::from_prompt(prompt, *budget.max_tokens(), *budget.temperature());
        let response = self.driver.generate(&request).await?;

        let text = response.joined_text();
        if text.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse));
        }

        if let Some(usage) = response.usage() {
            debug!(
                input_tokens = usage.input_tokens(),
                output_tokens = usage.output_tokens(),
                "Token usage"
            );
        }
        debug!(response_chars = text.chars().count(), "Generation complete");
        Ok(text)
    }
}
