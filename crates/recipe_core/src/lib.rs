//! Recipe core: domain model, field normalization, form validation and the
//! pure screen state machine.
mod effect;
pub mod messages;
mod msg;
mod normalize;
mod recipe;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use normalize::{join_for_editing, normalize, FieldValue, INGREDIENT_DELIMITER, STEP_DELIMITER};
pub use recipe::{NewRecipe, Recipe, RecipeDraft, RecipeId, RecipeRecord, RecipeReplacement};
pub use state::{AppState, LoadState, Notice, NoticeKind, RequestId, Route};
pub use update::update;
pub use validate::{validate, RecipeField, ValidationErrors};
pub use view_model::{AppViewModel, RecipeRow, ScreenView};
