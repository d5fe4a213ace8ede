/*!
 * Translation of the original text through an AI provider.
 *
 * - `service`: provider-backed `TranslationService`
 * - `prompt`: system prompt template
 *
 * `TextTranslator` is the seam used by `SubtitleFile::translate`; tests plug
 * the mock provider in its place.
 */

use async_trait::async_trait;

use crate::errors::TranslationError;

pub use self::prompt::PromptTemplate;
pub use self::service::TranslationService;

pub mod prompt;
pub mod service;

/// Anything that turns a whole source text into its translation in one call
#[async_trait]
pub trait TextTranslator: Send + Sync {
    async fn translate_text(&self, text: &str) -> Result<String, TranslationError>;
}
