use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TypeError;

pub type Id = i32;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub unit: String,
}

impl TryFrom<Value> for Ingredient {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value.as_object() {
            Some(entry) => {
                let name = match entry.get("name").and_then(Value::as_str) {
                    Some(name) if !name.is_empty() => name.to_string(),
                    _ => return Err(TypeError::new("Ingredient name is required")),
                };
                let amount = entry
                    .get("amount")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string();
                let unit = entry
                    .get("unit")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string();

                Ok(Self { name, amount, unit })
            }
            None => Err(TypeError::new("Failed to parse value as object")),
        }
    }
}

pub struct IngredientList(pub Vec<Ingredient>);

impl TryFrom<Value> for IngredientList {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(values) => {
                let list = values
                    .into_iter()
                    .map(Ingredient::try_from)
                    .collect::<Result<Vec<Ingredient>, TypeError>>()?;

                Ok(Self(list))
            }
            _ => Err(TypeError::new("Failed to parse value as array")),
        }
    }
}

pub struct TagList(pub Vec<String>);

impl TryFrom<Value> for TagList {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(values) => {
                let list = values
                    .into_iter()
                    .map(|value| match value.as_str() {
                        Some(tag) => Ok(tag.to_string()),
                        None => Err(TypeError::new("Failed to parse tag as string")),
                    })
                    .collect::<Result<Vec<String>, TypeError>>()?;

                Ok(Self(list))
            }
            _ => Err(TypeError::new("Failed to parse value as array")),
        }
    }
}

pub struct IdList(pub Vec<Id>);

impl TryFrom<Value> for IdList {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(values) => {
                let list = values
                    .into_iter()
                    .map(|value| match value.as_i64() {
                        Some(id) => Ok(id as Id),
                        None => Err(TypeError::new("Failed to parse id as integer")),
                    })
                    .collect::<Result<Vec<Id>, TypeError>>()?;

                Ok(Self(list))
            }
            _ => Err(TypeError::new("Failed to parse value as array")),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Id,
    pub title: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    /* absent until the first update */
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Validated create/update payload for a recipe. `id`, `created_at` and
/// `updated_at` are owned by the store, never by the caller.
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: String,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub unit: String,
    pub checked: bool,
    pub added_at: DateTime<Utc>,
}
