use scrivener_core::{GenerateRequest, ProviderConfig};
use scrivener_interface::GenerationDriver;
use scrivener_models::AnthropicClient;
use std::env;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_anthropic_simple_generation() {
    dotenvy::dotenv().ok();
    let api_key =
        env::var("ANTHROPIC_API_KEY").expect("ANTHROPIC_API_KEY must be set for API tests");

    let client = AnthropicClient::new(api_key, ProviderConfig::default()).expect("Valid client");
    let request = GenerateRequest::from_prompt("Say 'test' and nothing else.", 50, 0.0);

    let response = client.generate(&request).await.expect("API call succeeded");

    assert!(!response.joined_text().is_empty());
    println!("Response: {:?}", response.outputs());
}

#[tokio::test]
async fn test_unreachable_endpoint_is_an_http_error() {
    let config = ProviderConfig::default().with_endpoint("http://127.0.0.1:9");
    let client = AnthropicClient::new("test-key", config).expect("Valid client");
    let request = GenerateRequest::from_prompt("Hello", 10, 0.7);

    let err = client.generate(&request).await.unwrap_err();
    assert!(matches!(
        err.kind(),
        scrivener_error::GenerationErrorKind::Http(_)
    ));
}
