use log::{debug, info};

use crate::config::AiConfig;
use crate::error::ExtractionError;
use crate::model::Recipe;
use crate::normalize::normalize;
use crate::providers::{CompletionRequest, LlmProvider, ProviderFactory, RECIPE_EXTRACTION_PROMPT};
use crate::require_text;
use crate::schema::OutputSchema;

/// Name under which the Recipe schema is sent to the service
pub const OUTPUT_SCHEMA_NAME: &str = "schema_org_recipe";

/// Turns free-form recipe text into a normalized schema.org [`Recipe`].
///
/// Each call issues exactly one completion request through the provider the
/// extractor was built with and keeps no state between calls.
pub struct RecipeExtractor {
    provider: Box<dyn LlmProvider>,
    schema: OutputSchema,
}

impl RecipeExtractor {
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        RecipeExtractor {
            provider,
            schema: OutputSchema::of::<Recipe>(OUTPUT_SCHEMA_NAME),
        }
    }

    /// Build an extractor for the configured default provider
    pub fn from_config(config: &AiConfig) -> Result<Self, ExtractionError> {
        Ok(Self::new(ProviderFactory::get_default_provider(config)?))
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    pub fn output_schema(&self) -> &OutputSchema {
        &self.schema
    }

    /// Extract a recipe from `text`.
    ///
    /// # Errors
    /// - [`ExtractionError::EmptyInput`] for blank text, before any request
    /// - any transport, service or parse failure, unchanged; no retry
    pub async fn extract(&self, text: &str) -> Result<Recipe, ExtractionError> {
        let text = require_text(text)?;

        info!(
            "Extracting recipe from {} characters with {}",
            text.chars().count(),
            self.provider.provider_name()
        );
        let request = CompletionRequest {
            system: RECIPE_EXTRACTION_PROMPT,
            user: text,
            schema: &self.schema,
        };
        let content = self.provider.complete(&request).await?;
        debug!("{}", content);

        let mut recipe: Recipe = serde_json::from_str(&content)?;
        normalize(&mut recipe);
        Ok(recipe)
    }
}
