//! Response schemas for schema-constrained JSON generation.

use serde_json::{json, Value};

/// Schema for a single recipe object, in the shape the Gemini
/// structured-output API expects.
pub fn recipe_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "ingredients": { "type": "ARRAY", "items": { "type": "STRING" } },
            "instructions": { "type": "ARRAY", "items": { "type": "STRING" } },
            "prepTime": { "type": "STRING" },
            "difficulty": { "type": "STRING", "enum": ["Easy", "Medium", "Hard", "Expert"] },
            "tags": { "type": "ARRAY", "items": { "type": "STRING" } },
            "nutrition": {
                "type": "OBJECT",
                "properties": {
                    "calories": { "type": "STRING", "description": "e.g. 450 kcal" },
                    "protein": { "type": "STRING", "description": "e.g. 20g" },
                    "carbs": { "type": "STRING", "description": "e.g. 45g" },
                    "fat": { "type": "STRING", "description": "e.g. 15g" }
                },
                "required": ["calories", "protein", "carbs", "fat"]
            }
        },
        "required": ["title", "description", "ingredients", "instructions", "prepTime", "difficulty", "tags", "nutrition"]
    })
}

/// Schema for a list of recipes.
pub fn recipe_list_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": recipe_schema()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_schema_requires_all_wire_keys() {
        let schema = recipe_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        for key in [
            "title",
            "description",
            "ingredients",
            "instructions",
            "prepTime",
            "difficulty",
            "tags",
            "nutrition",
        ] {
            assert!(required.contains(&key), "{} missing from required", key);
        }
    }

    #[test]
    fn test_difficulty_enum_values() {
        let schema = recipe_schema();
        let values = schema["properties"]["difficulty"]["enum"].as_array().unwrap();
        assert_eq!(values.len(), 4);
        assert!(values.contains(&Value::from("Expert")));
    }

    #[test]
    fn test_list_schema_wraps_recipe_object() {
        let schema = recipe_list_schema();
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(schema["items"]["type"], "OBJECT");
    }
}
