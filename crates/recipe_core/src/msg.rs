use crate::{Recipe, RecipeField, RequestId, Route};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User moved to another screen.
    Navigate(Route),
    /// User changed a form input.
    FieldEdited { field: RecipeField, value: String },
    /// User submitted the create/edit form.
    SubmitClicked,
    /// User asked to delete the recipe on the detail screen.
    DeleteClicked,
    /// User accepted the delete confirmation.
    DeleteConfirmed,
    /// User declined the delete confirmation.
    DeleteCancelled,
    /// User acknowledged the current notice.
    NoticeDismissed,
    /// Store answered a list request.
    ListLoaded {
        request: RequestId,
        result: Result<Vec<Recipe>, String>,
    },
    /// Store answered a single-recipe fetch.
    RecipeLoaded {
        request: RequestId,
        result: Result<Recipe, String>,
    },
    /// Store answered a create or update.
    RecipeSaved {
        request: RequestId,
        result: Result<Recipe, String>,
    },
    /// Store answered a delete.
    RecipeDeleted {
        request: RequestId,
        result: Result<(), String>,
    },
}
