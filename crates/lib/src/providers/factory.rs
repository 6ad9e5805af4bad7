//! # AI Provider Factory
//!
//! Builds a short-lived provider value for one generation request. Credentials
//! travel inside the [`ProviderConfig`] handed in by the caller; nothing is read
//! from process-wide state here.

use crate::{
    constants::{gemini_generate_url, DEFAULT_GEMINI_MODEL},
    errors::PromptError,
    providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
};
use tracing::info;

/// Which remote API the request goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    Gemini,
    Local,
}

/// Everything needed to build a provider for a single request.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub api_key: Option<String>,
    /// Overrides the endpoint. Required for [`ProviderKind::Local`].
    pub api_url: Option<String>,
    pub model: Option<String>,
}

/// Creates the provider described by `config`.
pub fn create_provider(config: &ProviderConfig) -> Result<Box<dyn AiProvider>, PromptError> {
    let provider: Box<dyn AiProvider> = match config.kind {
        ProviderKind::Gemini => {
            let api_key = config.api_key.clone().ok_or(PromptError::MissingApiKey)?;
            let api_url = config.api_url.clone().unwrap_or_else(|| {
                gemini_generate_url(config.model.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL))
            });
            info!("Configuring Gemini provider with URL: {}", api_url);
            Box::new(GeminiProvider::new(api_url, api_key)?)
        }
        ProviderKind::Local => {
            let api_url = config.api_url.clone().ok_or_else(|| {
                PromptError::MissingAiProvider(
                    "an API URL is required for the local provider".to_string(),
                )
            })?;
            info!("Configuring Local AI provider with URL: {}", api_url);
            Box::new(LocalAiProvider::new(
                api_url,
                config.api_key.clone(),
                config.model.clone(),
            )?)
        }
    };
    Ok(provider)
}
