//! Title-only path against a scripted driver.

use async_trait::async_trait;
use scrivener_article::ArticlePipeline;
use scrivener_core::{ArticleForm, GenerateRequest, GenerateResponse, StageBudgets};
use scrivener_error::{GenerationError, GenerationErrorKind, PipelineErrorKind};
use scrivener_interface::GenerationDriver;
use std::sync::{Arc, Mutex};

/// Mock driver returning a fixed reply and counting calls.
struct MockDriver {
    reply: Result<String, GenerationErrorKind>,
    calls: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockDriver {
    fn new(reply: Result<&str, GenerationErrorKind>) -> Self {
        Self {
            reply: reply.map(str::to_string),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl GenerationDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> Result<GenerateResponse, GenerationError> {
        self.calls.lock().unwrap().push(req.clone());
        match &self.reply {
            Ok(text) => Ok(GenerateResponse::text(text.clone())),
            Err(kind) => Err(GenerationError::new(kind.clone())),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model-v1"
    }
}

const REPLY: &str = "\
**Title candidates:**
1. Sourdough for Beginners: 5 Steps to Your First Loaf
2. The Sourdough Starter Guide You Actually Need
3. Why Your Sourdough Is Flat (and How to Fix It)
4. Sourdough Schedules That Fit a Workday
5. 10 Sourdough Mistakes New Bakers Make

**Recommended title:** Sourdough for Beginners: 5 Steps to Your First Loaf
";

fn keyword_only(keyword: &str) -> scrivener_core::TitleRequest {
    ArticleForm::builder()
        .keyword(keyword)
        .build()
        .expect("Valid form")
        .title_request()
        .expect("keyword is valid")
}

#[tokio::test]
async fn test_titles_are_parsed_from_reply() {
    let driver = MockDriver::new(Ok(REPLY));
    let calls = Arc::clone(&driver.calls);
    let pipeline = ArticlePipeline::new(driver, StageBudgets::default());

    let titles = pipeline
        .generate_titles(&keyword_only("sourdough"))
        .await
        .expect("titles generated");

    assert_eq!(titles.candidates().len(), 5);
    assert_eq!(
        titles.select(5),
        Some("10 Sourdough Mistakes New Bakers Make")
    );
    assert_eq!(
        titles.recommended(),
        "Sourdough for Beginners: 5 Steps to Your First Loaf"
    );

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(*calls[0].max_tokens(), Some(1000));
}

#[tokio::test]
async fn test_provider_error_becomes_title_error() {
    let driver = MockDriver::new(Err(GenerationErrorKind::Api {
        status: 401,
        message: "invalid x-api-key".to_string(),
    }));
    let pipeline = ArticlePipeline::new(driver, StageBudgets::default());

    let err = pipeline
        .generate_titles(&keyword_only("sourdough"))
        .await
        .unwrap_err();

    match err.kind() {
        PipelineErrorKind::TitleGeneration(message) => assert!(message.contains("401")),
        other => panic!("unexpected kind: {:?}", other),
    }
}

#[tokio::test]
async fn test_unrecognised_reply_gives_empty_set() {
    let driver = MockDriver::new(Ok("I would rather not."));
    let pipeline = ArticlePipeline::new(driver, StageBudgets::default());

    let titles = pipeline
        .generate_titles(&keyword_only("sourdough"))
        .await
        .expect("a reply is not an error");

    assert!(titles.is_empty());
}

#[test]
fn test_title_path_checks_keyword_only() {
    let short = ArticleForm::builder().keyword("x").build().expect("Valid form");
    assert!(short.title_request().is_err());

    let request = keyword_only("ok");
    assert!(request.genre().is_none());
    assert!(request.audience().is_none());
}
