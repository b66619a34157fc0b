use crate::{Notice, Recipe, RecipeDraft, RecipeId, Route, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub route: Route,
    pub screen: ScreenView,
    pub notice: Option<Notice>,
    /// A store request is in flight.
    pub busy: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Loading {
        message: &'static str,
    },
    Failed {
        message: String,
    },
    List {
        rows: Vec<RecipeRow>,
    },
    Detail {
        recipe: Recipe,
        confirming_delete: bool,
        deleting: bool,
    },
    Form {
        heading: &'static str,
        draft: RecipeDraft,
        errors: ValidationErrors,
        submitting: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRow {
    pub id: RecipeId,
    pub title: String,
    pub meal_type: String,
}

impl From<&Recipe> for RecipeRow {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            meal_type: recipe.meal_type.clone(),
        }
    }
}
