/*!
 * Translation service backed by a configured AI provider.
 *
 * The whole original text goes out in a single request; there is no batching,
 * caching or retry. Any provider failure is returned to the caller as is.
 */

use async_trait::async_trait;
use log::{debug, info};
use url::Url;

use super::prompt::PromptTemplate;
use super::TextTranslator;
use crate::app_config::{Config, TranslationConfig, TranslationProvider as ConfigTranslationProvider};
use crate::errors::TranslationError;
use crate::providers::anthropic::{Anthropic, AnthropicRequest};
use crate::providers::ollama::{ChatRequest, Ollama};
use crate::providers::Provider;

/// Parse an endpoint string into a base URL with scheme, host and port
fn parse_endpoint(endpoint: &str) -> Result<String, TranslationError> {
    if endpoint.is_empty() {
        return Err(TranslationError::Configuration("Endpoint cannot be empty".to_string()));
    }

    let with_scheme = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("http://{}", endpoint)
    };
    let url = Url::parse(&with_scheme)
        .map_err(|e| TranslationError::Configuration(format!("Invalid endpoint {}: {}", endpoint, e)))?;

    let host = url
        .host_str()
        .ok_or_else(|| TranslationError::Configuration(format!("Invalid host in endpoint: {}", endpoint)))?;
    let port = url.port_or_known_default().unwrap_or(80);

    Ok(format!("{}://{}:{}", url.scheme(), host, port))
}

/// Translation provider implementation variants
#[derive(Debug)]
enum TranslationProviderImpl {
    /// Ollama LLM service
    Ollama { client: Ollama },

    /// Anthropic API service
    Anthropic { client: Anthropic },
}

/// Main translation service
#[derive(Debug)]
pub struct TranslationService {
    /// Provider implementation
    provider: TranslationProviderImpl,

    /// Configuration for the translation service
    pub config: TranslationConfig,

    /// Rendered system prompt
    system_prompt: String,
}

impl TranslationService {
    /// Create a new translation service from the application configuration
    pub fn new(config: &Config) -> Result<Self, TranslationError> {
        let translation = config.translation.clone();
        let timeout_secs = translation.get_timeout_secs();

        let provider = match translation.provider {
            ConfigTranslationProvider::Ollama => TranslationProviderImpl::Ollama {
                client: Ollama::new(parse_endpoint(&translation.get_endpoint())?, timeout_secs),
            },
            ConfigTranslationProvider::Anthropic => {
                let api_key = translation.get_api_key();
                if api_key.is_empty() {
                    return Err(TranslationError::Configuration(
                        "Translation API key is required for Anthropic provider".to_string(),
                    ));
                }
                TranslationProviderImpl::Anthropic {
                    client: Anthropic::new(
                        api_key,
                        translation.get_endpoint(),
                        translation.get_model(),
                        timeout_secs,
                    ),
                }
            }
        };

        let system_prompt = PromptTemplate::new(&translation.common.system_prompt)
            .render(&config.source_language, &config.target_language);

        Ok(Self {
            provider,
            config: translation,
            system_prompt,
        })
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Test the connection to the translation provider
    pub async fn test_connection(&self) -> Result<(), TranslationError> {
        info!(
            "Testing connection to {} with model {}",
            self.config.provider.display_name(),
            self.config.get_model()
        );
        match &self.provider {
            TranslationProviderImpl::Ollama { client } => client.test_connection().await?,
            TranslationProviderImpl::Anthropic { client } => client.test_connection().await?,
        }
        Ok(())
    }
}

#[async_trait]
impl TextTranslator for TranslationService {
    async fn translate_text(&self, text: &str) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Err(TranslationError::NothingToTranslate);
        }

        let model = self.config.get_model();
        let temperature = self.config.common.temperature;
        debug!(
            "Sending {} chars to {} ({})",
            text.chars().count(),
            self.config.provider.display_name(),
            model
        );

        let translated = match &self.provider {
            TranslationProviderImpl::Ollama { client } => {
                let request = ChatRequest::new(model)
                    .add_message("system", self.system_prompt.as_str())
                    .add_message("user", text)
                    .temperature(temperature);
                let response = client.complete(request).await?;
                Ollama::extract_text(&response)
            }
            TranslationProviderImpl::Anthropic { client } => {
                let request = AnthropicRequest::new(model, self.config.common.max_tokens)
                    .system(self.system_prompt.as_str())
                    .add_message("user", text)
                    .temperature(temperature);
                let response = client.complete(request).await?;
                Anthropic::extract_text(&response)
            }
        };

        let translated = translated.trim().to_string();
        if translated.is_empty() {
            return Err(TranslationError::EmptyResponse);
        }
        Ok(translated)
    }
}
