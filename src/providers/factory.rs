use crate::config::{AiConfig, ProviderConfig};
use crate::error::ExtractionError;
use crate::providers::{AzureOpenAIProvider, LlmProvider, OpenAIProvider};
use std::time::Duration;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
        timeout: Option<Duration>,
    ) -> Result<Box<dyn LlmProvider>, ExtractionError> {
        // Validate that provider is enabled
        if !config.enabled {
            return Err(ExtractionError::Provider(format!(
                "Provider '{}' is not enabled in configuration",
                provider_name
            )));
        }

        match provider_name {
            "openai" => Ok(Box::new(OpenAIProvider::new(config, timeout)?)),
            "azure_openai" => Ok(Box::new(AzureOpenAIProvider::new(config, timeout)?)),
            _ => Err(ExtractionError::Provider(format!(
                "Unknown provider: {}",
                provider_name
            ))),
        }
    }

    /// Get the default provider from configuration
    pub fn get_default_provider(config: &AiConfig) -> Result<Box<dyn LlmProvider>, ExtractionError> {
        Self::create(
            &config.default_provider,
            &config.default_provider_config(),
            config.timeout(),
        )
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["openai", "azure_openai"]
    }
}
