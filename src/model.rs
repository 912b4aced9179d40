use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::schema::{schema_object, schema_tag, SchemaType};

schema_tag! {
    /// `@context` of every document we produce.
    pub struct SchemaOrgContext = "https://schema.org";
}

schema_tag! {
    pub struct RecipeType = "Recipe";
}

schema_tag! {
    pub struct HowToStepType = "HowToStep";
}

schema_tag! {
    pub struct NutritionType = "NutritionInformation";
}

/// A value the model may give either as a single item or as a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T: SchemaType> SchemaType for OneOrMany<T> {
    fn schema() -> Value {
        json!({ "anyOf": [T::schema(), Vec::<T>::schema()] })
    }
}

schema_object! {
    /// schema.org `Recipe`, the shape requested from the generation service and
    /// the document handed back to callers.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct Recipe {
        #[serde(default)]
        pub context: SchemaOrgContext => "@context",
        #[serde(default)]
        pub recipe_type: RecipeType => "@type",
        pub name: String => "name",
        pub description: String => "description",
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub image: Option<OneOrMany<String>> => "image",
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub url: Option<String> => "url",
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub recipe_yield: Option<String> => "recipeYield",
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub category: Option<OneOrMany<String>> => "recipeCategory",
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub keywords: Option<String> => "keywords",
        /// ISO 8601 duration, e.g. `PT10M`
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub prep_time: Option<String> => "prepTime",
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub cook_time: Option<String> => "cookTime",
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub total_time: Option<String> => "totalTime",
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub perform_time: Option<String> => "performTime",
        pub ingredients: Vec<String> => "recipeIngredient",
        pub instructions: Vec<Step> => "recipeInstructions",
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub nutrition: Option<Nutrition> => "nutrition",
    }
}

schema_object! {
    /// One `HowToStep` of `recipeInstructions`.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct Step {
        #[serde(default)]
        pub step_type: HowToStepType => "@type",
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub name: Option<String> => "name",
        pub text: String => "text",
    }
}

schema_object! {
    /// `NutritionInformation`. Every amount is free text such as `"250 kcal"`.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct Nutrition {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub nutrition_type: Option<NutritionType> => "@type",
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub calories: Option<String> => "calories",
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub carbohydrate_content: Option<String> => "carbohydrateContent",
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub cholesterol_content: Option<String> => "cholesterolContent",
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub fat_content: Option<String> => "fatContent",
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub fiber_content: Option<String> => "fiberContent",
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub protein_content: Option<String> => "proteinContent",
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub saturated_fat_content: Option<String> => "saturatedFatContent",
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub sodium_content: Option<String> => "sodiumContent",
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub sugar_content: Option<String> => "sugarContent",
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub trans_fat_content: Option<String> => "transFatContent",
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub unsaturated_fat_content: Option<String> => "unsaturatedFatContent",
    }
}

impl Step {
    pub fn new(text: impl Into<String>) -> Self {
        Step {
            step_type: HowToStepType,
            name: None,
            text: text.into(),
        }
    }
}

impl Recipe {
    /// A recipe with only the required fields set.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        ingredients: Vec<String>,
        instructions: Vec<Step>,
    ) -> Self {
        Recipe {
            context: SchemaOrgContext,
            recipe_type: RecipeType,
            name: name.into(),
            description: description.into(),
            image: None,
            url: None,
            recipe_yield: None,
            category: None,
            keywords: None,
            prep_time: None,
            cook_time: None,
            total_time: None,
            perform_time: None,
            ingredients,
            instructions,
            nutrition: None,
        }
    }

    /// Mutable access to the four duration fields, in wire-key order.
    pub fn durations_mut(&mut self) -> [(&'static str, &mut Option<String>); 4] {
        [
            ("prepTime", &mut self.prep_time),
            ("cookTime", &mut self.cook_time),
            ("totalTime", &mut self.total_time),
            ("performTime", &mut self.perform_time),
        ]
    }

    /// Indented JSON with non-ASCII characters kept as-is.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_recipe() -> Recipe {
        let mut recipe = Recipe::new(
            "Quiche lorraine",
            "La vraie",
            vec!["3 oeufs".to_string()],
            vec![Step {
                step_type: HowToStepType,
                name: Some("Appareil".to_string()),
                text: "Battre les oeufs".to_string(),
            }],
        );
        recipe.image = Some(OneOrMany::One("https://example.com/q.jpg".to_string()));
        recipe.url = Some("https://example.com/q".to_string());
        recipe.recipe_yield = Some("6 parts".to_string());
        recipe.category = Some(OneOrMany::Many(vec!["Plat principal".to_string()]));
        recipe.keywords = Some("oeufs, lardons".to_string());
        recipe.prep_time = Some("PT15M".to_string());
        recipe.cook_time = Some("PT35M".to_string());
        recipe.total_time = Some("PT50M".to_string());
        recipe.perform_time = Some("PT35M".to_string());
        recipe.nutrition = Some(Nutrition {
            nutrition_type: Some(NutritionType),
            calories: Some("450 kcal".to_string()),
            carbohydrate_content: Some("20 g".to_string()),
            cholesterol_content: Some("180 mg".to_string()),
            fat_content: Some("30 g".to_string()),
            fiber_content: Some("1 g".to_string()),
            protein_content: Some("18 g".to_string()),
            saturated_fat_content: Some("14 g".to_string()),
            sodium_content: Some("600 mg".to_string()),
            sugar_content: Some("2 g".to_string()),
            trans_fat_content: Some("0 g".to_string()),
            unsaturated_fat_content: Some("12 g".to_string()),
        });
        recipe
    }

    fn object_keys(value: &Value) -> Vec<String> {
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_recipe_schema_lists_required_keys() {
        let schema = Recipe::schema();
        assert_eq!(
            schema["required"],
            json!([
                "@context",
                "@type",
                "name",
                "description",
                "recipeIngredient",
                "recipeInstructions"
            ])
        );
        assert_eq!(
            schema["properties"]["@context"]["enum"],
            json!(["https://schema.org"])
        );
        assert_eq!(schema["properties"]["@type"]["enum"], json!(["Recipe"]));
    }

    #[test]
    fn test_instruction_items_are_closed_step_objects() {
        let schema = Recipe::schema();
        let items = &schema["properties"]["recipeInstructions"]["items"];
        assert_eq!(items["type"], "object");
        assert_eq!(items["additionalProperties"], json!(false));
        assert_eq!(items["required"], json!(["@type", "text"]));
        assert_eq!(items["properties"]["@type"]["enum"], json!(["HowToStep"]));
    }

    #[test]
    fn test_image_and_category_accept_one_or_many() {
        let schema = Recipe::schema();
        for key in ["image", "recipeCategory"] {
            let any_of = schema["properties"][key]["anyOf"].as_array().unwrap();
            assert_eq!(any_of[0], json!({ "type": "string" }));
            assert_eq!(any_of[1]["type"], "array");
        }
    }

    #[test]
    fn test_nutrition_schema_is_closed_set() {
        let schema = Recipe::schema();
        let nutrition = &schema["properties"]["nutrition"];
        assert_eq!(nutrition["additionalProperties"], json!(false));
        assert_eq!(nutrition["required"], json!([]));
        assert_eq!(nutrition["properties"].as_object().unwrap().len(), 12);
        assert_eq!(
            nutrition["properties"]["@type"]["enum"],
            json!(["NutritionInformation"])
        );
    }

    #[test]
    fn test_serialized_keys_match_schema_properties() {
        let recipe = full_recipe();
        let value = serde_json::to_value(&recipe).unwrap();
        let schema = Recipe::schema();
        assert_eq!(object_keys(&value), object_keys(&schema["properties"]));
        assert_eq!(
            object_keys(&value["nutrition"]),
            object_keys(&schema["properties"]["nutrition"]["properties"])
        );
        assert_eq!(
            object_keys(&value["recipeInstructions"][0]),
            object_keys(&schema["properties"]["recipeInstructions"]["items"]["properties"])
        );
    }

    #[test]
    fn test_missing_tags_default_on_parse() {
        let recipe: Recipe = serde_json::from_str(
            r#"{
                "name": "Salade",
                "description": "",
                "recipeIngredient": ["1 laitue"],
                "recipeInstructions": [{"text": "Laver"}]
            }"#,
        )
        .unwrap();
        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Recipe");
        assert_eq!(value["recipeInstructions"][0]["@type"], "HowToStep");
        assert!(value.get("nutrition").is_none());
        assert!(value.get("cookTime").is_none());
    }

    #[test]
    fn test_rejects_wrong_type_tag() {
        let result = serde_json::from_str::<Recipe>(
            r#"{
                "@type": "Article",
                "name": "x",
                "description": "",
                "recipeIngredient": [],
                "recipeInstructions": []
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_missing_instructions() {
        let result = serde_json::from_str::<Recipe>(
            r#"{"name": "x", "description": "", "recipeIngredient": []}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_pretty_json_keeps_accents() {
        let recipe = Recipe::new("Crème brûlée", "", vec![], vec![]);
        let json = recipe.to_pretty_json().unwrap();
        assert!(json.contains("Crème brûlée"));
        assert!(json.contains("\n  \"@context\": \"https://schema.org\""));
    }
}
