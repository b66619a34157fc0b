use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::normalize::{
    join_for_editing, normalize, FieldValue, INGREDIENT_DELIMITER, STEP_DELIMITER,
};

/// Store-assigned identifier. Opaque; never generated locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A persisted recipe in canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub meal_type: String,
    pub servings: i64,
    pub difficulty: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// A recipe exactly as the store returns it.
///
/// The store does not validate what it keeps, so decoding is loose: missing
/// or null fields take their defaults, numeric ids become text, fractional
/// servings are truncated and unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: RecipeId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meal_type: String,
    #[serde(default, deserialize_with = "servings_from_any")]
    pub servings: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: FieldValue,
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: FieldValue,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseId {
    Text(String),
    Number(i64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Integer(i64),
    Fraction(f64),
    Text(String),
}

fn id_from_text_or_number<'de, D>(deserializer: D) -> Result<RecipeId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LooseId::deserialize(deserializer)? {
        LooseId::Text(text) => RecipeId::new(text),
        LooseId::Number(number) => RecipeId::new(number.to_string()),
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn servings_from_any<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<LooseNumber>::deserialize(deserializer)? {
        Some(LooseNumber::Integer(number)) => number,
        Some(LooseNumber::Fraction(number)) => number.trunc() as i64,
        Some(LooseNumber::Text(text)) => text.trim().parse().unwrap_or(0),
        None => 0,
    })
}

impl RecipeRecord {
    pub fn into_recipe(self) -> Recipe {
        Recipe {
            ingredients: normalize(&self.ingredients, INGREDIENT_DELIMITER),
            steps: normalize(&self.steps, STEP_DELIMITER),
            id: self.id,
            title: self.title,
            meal_type: self.meal_type,
            servings: self.servings,
            difficulty: self.difficulty,
        }
    }
}

/// Body of a create request. Lists are always sent as arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    pub title: String,
    pub meal_type: String,
    pub servings: i64,
    pub difficulty: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// Body of a full-replace request: the whole record, id included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecipeReplacement<'a> {
    pub id: &'a RecipeId,
    #[serde(flatten)]
    pub recipe: &'a NewRecipe,
}

impl<'a> RecipeReplacement<'a> {
    pub fn new(id: &'a RecipeId, recipe: &'a NewRecipe) -> Self {
        Self { id, recipe }
    }
}

/// A form's in-progress recipe.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeDraft {
    pub title: String,
    pub meal_type: String,
    pub servings: i64,
    pub difficulty: String,
    pub ingredients: FieldValue,
    pub steps: FieldValue,
}

impl RecipeDraft {
    /// Prefills an edit form; lists are re-joined into editable text.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            meal_type: recipe.meal_type.clone(),
            servings: recipe.servings,
            difficulty: recipe.difficulty.clone(),
            ingredients: FieldValue::Text(join_for_editing(
                &recipe.ingredients,
                INGREDIENT_DELIMITER,
            )),
            steps: FieldValue::Text(join_for_editing(&recipe.steps, STEP_DELIMITER)),
        }
    }

    pub fn to_new_recipe(&self) -> NewRecipe {
        NewRecipe {
            title: self.title.clone(),
            meal_type: self.meal_type.clone(),
            servings: self.servings,
            difficulty: self.difficulty.clone(),
            ingredients: normalize(&self.ingredients, INGREDIENT_DELIMITER),
            steps: normalize(&self.steps, STEP_DELIMITER),
        }
    }
}
