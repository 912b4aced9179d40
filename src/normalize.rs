use log::warn;

use crate::duration::to_iso8601_duration;
use crate::model::{NutritionType, Recipe};

/// Deterministic clean-up applied to every recipe parsed from the service.
///
/// Durations that are not ISO 8601 are rewritten with the French fallback
/// parser and a present `nutrition` object gets its `@type`. `@context` and
/// `@type` of the recipe itself are fixed by their types and need no pass.
/// Running it twice changes nothing.
pub fn normalize(recipe: &mut Recipe) {
    for (key, value) in recipe.durations_mut() {
        if let Some(raw) = value.as_deref() {
            if !raw.starts_with('P') {
                let converted = to_iso8601_duration(Some(raw));
                warn!("{} '{}' is not ISO 8601, using {}", key, raw, converted);
                *value = Some(converted);
            }
        }
    }

    if let Some(nutrition) = recipe.nutrition.as_mut() {
        nutrition.nutrition_type.get_or_insert(NutritionType);
    }
}
