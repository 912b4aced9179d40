//! Turn free-form recipe text into schema.org `Recipe` JSON-LD for Mealie.
//!
//! The text is sent once to a structured-output chat completion constrained by
//! a JSON Schema derived from [`Recipe`]; the answer is parsed and normalized
//! (ISO 8601 durations, nutrition type tag).

pub mod builder;
pub mod config;
pub mod duration;
pub mod error;
pub mod extractor;
pub mod model;
pub mod normalize;
pub mod output;
pub mod providers;
pub mod schema;
pub mod slug;

use std::path::{Path, PathBuf};

pub use builder::{ProviderKind, RecipeExtractorBuilder};
pub use crate::config::AiConfig;
pub use error::ExtractionError;
pub use extractor::RecipeExtractor;
pub use model::{Nutrition, OneOrMany, Recipe, Step};

/// Reject blank recipe text. Callers can run this before loading any
/// configuration, since blank input never reaches a provider.
pub fn require_text(text: &str) -> Result<&str, ExtractionError> {
    if text.trim().is_empty() {
        Err(ExtractionError::EmptyInput)
    } else {
        Ok(text)
    }
}

/// Extract a recipe using configuration from `config.toml` and the
/// `MEALIE__*` environment, as the command line does.
///
/// Convenience over [`extract_recipe_with_config`]; blank text fails with
/// [`ExtractionError::EmptyInput`] before the configuration is read.
pub async fn extract_recipe(text: &str) -> Result<Recipe, ExtractionError> {
    require_text(text)?;
    let config = AiConfig::load()?;
    extract_recipe_with_config(text, &config).await
}

/// Extract a recipe with an explicit configuration.
pub async fn extract_recipe_with_config(
    text: &str,
    config: &AiConfig,
) -> Result<Recipe, ExtractionError> {
    RecipeExtractor::from_config(config)?.extract(text).await
}

/// Read a UTF-8 recipe file, extract it and write `<slug>.json` into
/// `output_dir`, with `performTime` mirroring `cookTime`.
pub async fn export_recipe_file(
    extractor: &RecipeExtractor,
    input: &Path,
    output_dir: &Path,
) -> Result<PathBuf, ExtractionError> {
    let text = tokio::fs::read_to_string(input).await?;
    export_recipe_text(extractor, &text, output_dir).await
}

/// Extract `text` and write `<slug>.json` into `output_dir`.
pub async fn export_recipe_text(
    extractor: &RecipeExtractor,
    text: &str,
    output_dir: &Path,
) -> Result<PathBuf, ExtractionError> {
    let mut recipe = extractor.extract(text).await?;
    output::prepare_for_export(&mut recipe);
    output::write_recipe(&recipe, output_dir).await
}
