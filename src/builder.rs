use std::time::Duration;

use crate::config::{AiConfig, ProviderConfig};
use crate::error::ExtractionError;
use crate::extractor::RecipeExtractor;
use crate::providers::{LlmProvider, ProviderFactory};

/// Generation services the extractor can talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAI,
    AzureOpenAI,
}

impl ProviderKind {
    /// Convert to provider name string used by the factory
    fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "openai",
            ProviderKind::AzureOpenAI => "azure_openai",
        }
    }
}

/// Builder for configuring a [`RecipeExtractor`] in code.
///
/// Starts from [`AiConfig::default`] (or the config given to
/// [`config`](Self::config)) and applies the overrides on top. Nothing is read
/// from the environment.
#[derive(Debug, Default)]
pub struct RecipeExtractorBuilder {
    config: Option<AiConfig>,
    provider: Option<ProviderKind>,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    temperature: Option<f32>,
    timeout: Option<Duration>,
}

impl RecipeExtractorBuilder {
    /// Use a loaded configuration as the starting point
    ///
    /// # Example
    /// ```no_run
    /// use mealie_import::{AiConfig, RecipeExtractor};
    ///
    /// let config = AiConfig::load().unwrap();
    /// let extractor = RecipeExtractor::builder().config(config).build();
    /// ```
    pub fn config(mut self, config: AiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Select the generation service
    pub fn provider(mut self, provider: ProviderKind) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the API key for the provider
    ///
    /// # Example
    /// ```
    /// use mealie_import::RecipeExtractor;
    ///
    /// let extractor = RecipeExtractor::builder()
    ///     .api_key("sk-test")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(extractor.provider_name(), "openai");
    /// ```
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Point the OpenAI provider at a proxy or compatible server
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set a timeout for the completion request
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Resolve the configuration and create the provider.
    ///
    /// # Errors
    /// Returns [`ExtractionError::Provider`] when the selected provider is
    /// disabled or misses required settings.
    pub fn build(self) -> Result<RecipeExtractor, ExtractionError> {
        let mut config = self.config.unwrap_or_default();
        if let Some(provider) = self.provider {
            config.default_provider = provider.as_str().to_string();
        }

        let mut provider_config: ProviderConfig = config.default_provider_config();
        if let Some(api_key) = self.api_key {
            provider_config.api_key = Some(api_key);
        }
        if let Some(model) = self.model {
            provider_config.model = model;
        }
        if let Some(base_url) = self.base_url {
            provider_config.base_url = Some(base_url);
        }
        if let Some(temperature) = self.temperature {
            provider_config.temperature = temperature;
        }
        let timeout = self.timeout.or_else(|| config.timeout());

        let provider: Box<dyn LlmProvider> =
            ProviderFactory::create(&config.default_provider, &provider_config, timeout)?;
        Ok(RecipeExtractor::new(provider))
    }
}

impl RecipeExtractor {
    /// Creates a new builder for configuring an extractor
    pub fn builder() -> RecipeExtractorBuilder {
        RecipeExtractorBuilder::default()
    }
}
