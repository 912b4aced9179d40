use log::info;
use std::path::{Path, PathBuf};

use crate::error::ExtractionError;
use crate::model::Recipe;
use crate::slug::slugify;

/// File stem used when the recipe name has no usable characters
const FALLBACK_FILE_STEM: &str = "recette";

/// Mealie reads the active cooking time from `performTime`, so the exported
/// document mirrors `cookTime` there.
pub fn prepare_for_export(recipe: &mut Recipe) {
    recipe.perform_time = recipe.cook_time.clone();
}

/// `<slug of the name>.json`, or `recette.json` for a name that slugifies to
/// nothing.
pub fn export_file_name(recipe: &Recipe) -> String {
    let slug = slugify(&recipe.name);
    if slug.is_empty() {
        format!("{FALLBACK_FILE_STEM}.json")
    } else {
        format!("{slug}.json")
    }
}

/// Write `recipe` as indented UTF-8 JSON into `dir` and return the path.
pub async fn write_recipe(recipe: &Recipe, dir: &Path) -> Result<PathBuf, ExtractionError> {
    let path = dir.join(export_file_name(recipe));
    let mut json = recipe.to_pretty_json()?;
    json.push('\n');
    tokio::fs::write(&path, json).await?;
    info!("Wrote {}", path.display());
    Ok(path)
}
