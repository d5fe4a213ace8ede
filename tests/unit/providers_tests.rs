/*!
 * Tests for the provider implementations
 */

use srtsync::app_config::{Config, TranslationProvider};
use srtsync::errors::{ProviderError, TranslationError};
use srtsync::providers::anthropic::{Anthropic, AnthropicRequest};
use srtsync::providers::mock::{MockBehavior, MockProvider, MockRequest};
use srtsync::providers::ollama::{ChatRequest, Ollama};
use srtsync::providers::Provider;
use srtsync::translation::{TextTranslator, TranslationService};

/// Nothing listens on the discard port in test environments
const CLOSED_ENDPOINT: &str = "http://127.0.0.1:9";

#[tokio::test]
async fn test_ollama_unreachableServer_shouldFailWithConnectionError() {
    let client = Ollama::new(CLOSED_ENDPOINT, 2);
    let result = client.complete(ChatRequest::new("llama3.2:3b").add_message("user", "Hola")).await;
    assert!(matches!(result, Err(ProviderError::ConnectionError(_))));
}

#[tokio::test]
async fn test_anthropic_unreachableServer_shouldFailWithConnectionError() {
    let client = Anthropic::new("key", CLOSED_ENDPOINT, "claude-3-haiku", 2);
    let request = AnthropicRequest::new("claude-3-haiku", 64).add_message("user", "Hola");
    assert!(matches!(client.complete(request).await, Err(ProviderError::ConnectionError(_))));
}

#[tokio::test]
async fn test_translationService_blankText_shouldBeNothingToTranslate() {
    let service = TranslationService::new(&Config::default()).unwrap();
    assert!(matches!(
        service.translate_text("   ").await,
        Err(TranslationError::NothingToTranslate)
    ));
}

#[tokio::test]
async fn test_translationService_unreachableOllama_shouldPropagateProviderError() {
    let mut config = Config::default();
    config.translation.available_providers[0].endpoint = CLOSED_ENDPOINT.to_string();
    config.translation.available_providers[0].timeout_secs = 2;
    let service = TranslationService::new(&config).unwrap();

    assert!(matches!(
        service.translate_text("Hello").await,
        Err(TranslationError::Provider(ProviderError::ConnectionError(_)))
    ));
    assert!(service.test_connection().await.is_err());
}

#[test]
fn test_translationService_anthropicWithKey_shouldBuild() {
    let mut config = Config::default();
    config.translation.provider = TranslationProvider::Anthropic;
    config.translation.available_providers[1].api_key = "sk-test".to_string();
    let service = TranslationService::new(&config).unwrap();
    assert_eq!(service.config.get_model(), "claude-3-haiku");
}

#[tokio::test]
async fn test_mockProvider_emptyBehavior_shouldReturnEmptyText() {
    let provider = MockProvider::new(MockBehavior::Empty);
    let response = provider.complete(MockRequest { text: "Hi".to_string() }).await.unwrap();
    assert_eq!(MockProvider::extract_text(&response), "");
    assert_eq!(provider.request_count(), 1);
}

/// Live check against a local Ollama server
#[tokio::test]
#[ignore]
async fn test_ollama_provider_withLocalServer_shouldComplete() {
    let endpoint = std::env::var("OLLAMA_ENDPOINT").unwrap_or_else(|_| "http://localhost:11434".to_string());
    let client = Ollama::new(endpoint, 60);
    let request = ChatRequest::new("llama3.2:3b").add_message("user", "Say hello!");

    let response = client.complete(request).await.unwrap();
    assert!(!Ollama::extract_text(&response).is_empty());
}
