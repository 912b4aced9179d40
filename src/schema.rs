//! Output-shape constraint derived from the in-process data model.
//!
//! Every struct sent to or parsed from the generation service is declared
//! through [`schema_object!`], which names each field's wire key once and uses
//! it both for the serde rename and for the JSON Schema property. Required keys
//! are the fields whose type is not an `Option`.

use serde::Serialize;
use serde_json::{json, Value};

/// A Rust type with a JSON Schema counterpart.
pub trait SchemaType {
    /// Whether an object property of this type is listed under `required`.
    const REQUIRED: bool = true;

    fn schema() -> Value;
}

impl SchemaType for String {
    fn schema() -> Value {
        json!({ "type": "string" })
    }
}

impl<T: SchemaType> SchemaType for Vec<T> {
    fn schema() -> Value {
        json!({ "type": "array", "items": T::schema() })
    }
}

impl<T: SchemaType> SchemaType for Option<T> {
    const REQUIRED: bool = false;

    fn schema() -> Value {
        T::schema()
    }
}

/// Named schema passed to the service as a `json_schema` response format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputSchema {
    pub name: String,
    pub schema: Value,
}

impl OutputSchema {
    pub fn of<T: SchemaType>(name: impl Into<String>) -> Self {
        OutputSchema {
            name: name.into(),
            schema: T::schema(),
        }
    }

    /// The `response_format` body of a chat completion request.
    pub fn response_format(&self) -> Value {
        json!({
            "type": "json_schema",
            "json_schema": {
                "name": self.name,
                "schema": self.schema,
            }
        })
    }
}

/// Declares a fixed string tag such as `"@type": "Recipe"`.
///
/// The generated unit struct serializes to its constant, rejects any other
/// string, defaults to the constant and describes itself as a one-value enum.
macro_rules! schema_tag {
    ($(#[$meta:meta])* $vis:vis struct $name:ident = $value:literal;) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        $vis struct $name;

        impl $name {
            pub const VALUE: &'static str = $value;
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(Self::VALUE)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <String as serde::Deserialize>::deserialize(deserializer)?;
                if value == Self::VALUE {
                    Ok($name)
                } else {
                    Err(serde::de::Error::invalid_value(
                        serde::de::Unexpected::Str(&value),
                        &Self::VALUE,
                    ))
                }
            }
        }

        impl $crate::schema::SchemaType for $name {
            fn schema() -> serde_json::Value {
                serde_json::json!({ "type": "string", "enum": [Self::VALUE] })
            }
        }
    };
}

/// Declares a closed object whose fields are written `field: Type => "wireKey"`.
macro_rules! schema_object {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty => $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $key)]
                $fvis $field: $ty,
            )*
        }

        impl $crate::schema::SchemaType for $name {
            fn schema() -> serde_json::Value {
                let mut properties = serde_json::Map::new();
                let mut required: Vec<serde_json::Value> = Vec::new();
                $(
                    properties.insert(
                        $key.to_string(),
                        <$ty as $crate::schema::SchemaType>::schema(),
                    );
                    if <$ty as $crate::schema::SchemaType>::REQUIRED {
                        required.push(serde_json::Value::from($key));
                    }
                )*
                serde_json::json!({
                    "type": "object",
                    "additionalProperties": false,
                    "required": required,
                    "properties": properties,
                })
            }
        }
    };
}

pub(crate) use schema_object;
pub(crate) use schema_tag;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    schema_tag! {
        struct Fruit = "Apple";
    }

    schema_object! {
        #[derive(Debug, Serialize, Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Basket {
            #[serde(default)]
            kind: Fruit => "@type",
            label: String => "label",
            #[serde(default, skip_serializing_if = "Option::is_none")]
            note: Option<String> => "note",
            items: Vec<String> => "basketItems",
        }
    }

    #[test]
    fn test_option_fields_are_not_required() {
        let schema = Basket::schema();
        assert_eq!(
            schema["required"],
            json!(["@type", "label", "basketItems"])
        );
        assert_eq!(schema["additionalProperties"], json!(false));
        assert_eq!(schema["properties"]["note"], json!({ "type": "string" }));
        assert_eq!(
            schema["properties"]["basketItems"],
            json!({ "type": "array", "items": { "type": "string" } })
        );
    }

    #[test]
    fn test_schema_properties_match_serde_keys() {
        let basket = Basket {
            kind: Fruit,
            label: "l".to_string(),
            note: Some("n".to_string()),
            items: vec![],
        };
        let value = serde_json::to_value(&basket).unwrap();
        let mut serialized: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        let schema = Basket::schema();
        let mut declared: Vec<&str> = schema["properties"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        serialized.sort_unstable();
        declared.sort_unstable();
        assert_eq!(serialized, declared);
        assert_eq!(declared, ["@type", "basketItems", "label", "note"]);
    }

    #[test]
    fn test_tag_defaults_and_rejects_other_values() {
        let basket: Basket = serde_json::from_str(r#"{"label": "x", "basketItems": []}"#).unwrap();
        assert_eq!(basket.kind, Fruit);
        assert_eq!(serde_json::to_value(basket.kind).unwrap(), json!("Apple"));

        let wrong = serde_json::from_str::<Basket>(
            r#"{"@type": "Pear", "label": "x", "basketItems": []}"#,
        );
        assert!(wrong.is_err());
        assert_eq!(Fruit::schema(), json!({ "type": "string", "enum": ["Apple"] }));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = serde_json::from_str::<Basket>(
            r#"{"label": "x", "basketItems": [], "extra": 1}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_response_format_wraps_schema() {
        let schema = OutputSchema::of::<Basket>("basket");
        let format = schema.response_format();
        assert_eq!(format["type"], "json_schema");
        assert_eq!(format["json_schema"]["name"], "basket");
        assert_eq!(format["json_schema"]["schema"], Basket::schema());
    }
}
