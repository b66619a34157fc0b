use crate::{NewRecipe, RecipeId, RequestId};

/// Work the front-end must carry out on behalf of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Drop whatever request is still in flight; its answer is no longer wanted.
    CancelPending,
    FetchList {
        request: RequestId,
    },
    FetchRecipe {
        request: RequestId,
        id: RecipeId,
    },
    CreateRecipe {
        request: RequestId,
        recipe: NewRecipe,
    },
    UpdateRecipe {
        request: RequestId,
        id: RecipeId,
        recipe: NewRecipe,
    },
    DeleteRecipe {
        request: RequestId,
        id: RecipeId,
    },
}
