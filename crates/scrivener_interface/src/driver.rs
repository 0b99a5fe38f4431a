//! Provider driver trait.

use async_trait::async_trait;
use scrivener_core::{GenerateRequest, GenerateResponse};
use scrivener_error::GenerationError;

/// A text-generation provider.
///
/// Implementations turn a [`GenerateRequest`] into a [`GenerateResponse`]
/// with a single network call. They do not retry.
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Send one request to the provider.
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, GenerationError>;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;

    /// Model the driver sends requests to.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D> GenerationDriver for std::sync::Arc<D>
where
    D: GenerationDriver + ?Sized,
{
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, GenerationError> {
        (**self).generate(request).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
