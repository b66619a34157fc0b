use std::collections::BTreeMap;
use std::fmt;

use crate::RecipeDraft;

/// Form fields, in the order the form shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecipeField {
    Title,
    MealType,
    Servings,
    Difficulty,
    Ingredients,
    Steps,
}

impl RecipeField {
    pub const ALL: [RecipeField; 6] = [
        RecipeField::Title,
        RecipeField::MealType,
        RecipeField::Servings,
        RecipeField::Difficulty,
        RecipeField::Ingredients,
        RecipeField::Steps,
    ];

    /// Field name as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            RecipeField::Title => "title",
            RecipeField::MealType => "mealType",
            RecipeField::Servings => "servings",
            RecipeField::Difficulty => "difficulty",
            RecipeField::Ingredients => "ingredients",
            RecipeField::Steps => "steps",
        }
    }

    /// Form label in the UI locale.
    pub fn label(self) -> &'static str {
        match self {
            RecipeField::Title => "Título",
            RecipeField::MealType => "Tipo de Refeição",
            RecipeField::Servings => "Serve Quantas Pessoas",
            RecipeField::Difficulty => "Nível de Dificuldade",
            RecipeField::Ingredients => "Ingredientes (separados por vírgula)",
            RecipeField::Steps => "Etapas (separadas por ponto final)",
        }
    }
}

impl fmt::Display for RecipeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const TITLE_REQUIRED: &str = "O título é obrigatório.";
pub const MEAL_TYPE_REQUIRED: &str = "O tipo de refeição é obrigatório.";
pub const SERVINGS_POSITIVE: &str = "O número de porções deve ser maior que zero.";
pub const DIFFICULTY_REQUIRED: &str = "O nível de dificuldade é obrigatório.";
pub const INGREDIENTS_REQUIRED: &str = "Os ingredientes são obrigatórios.";
pub const STEPS_REQUIRED: &str = "As etapas são obrigatórias.";

/// Field → message mapping. Empty means the draft can be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    errors: BTreeMap<RecipeField, &'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: RecipeField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: RecipeField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecipeField, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: RecipeField, message: &'static str) {
        self.errors.insert(field, message);
    }
}

/// Checks every required field; all failures are reported, not just the first.
pub fn validate(draft: &RecipeDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.title.is_empty() {
        errors.insert(RecipeField::Title, TITLE_REQUIRED);
    }
    if draft.meal_type.is_empty() {
        errors.insert(RecipeField::MealType, MEAL_TYPE_REQUIRED);
    }
    if draft.servings <= 0 {
        errors.insert(RecipeField::Servings, SERVINGS_POSITIVE);
    }
    if draft.difficulty.is_empty() {
        errors.insert(RecipeField::Difficulty, DIFFICULTY_REQUIRED);
    }
    if draft.ingredients.is_empty() {
        errors.insert(RecipeField::Ingredients, INGREDIENTS_REQUIRED);
    }
    if draft.steps.is_empty() {
        errors.insert(RecipeField::Steps, STEPS_REQUIRED);
    }

    errors
}
