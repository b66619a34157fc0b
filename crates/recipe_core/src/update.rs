use recipe_logging::{recipe_debug, recipe_info, recipe_warn};

use crate::messages;
use crate::state::{FormScreen, FormTarget, Screen};
use crate::{
    validate, AppState, Effect, LoadState, Msg, Notice, Recipe, RecipeDraft, RequestId, Route,
    ValidationErrors,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Navigate(route) => navigate(&mut state, route),
        Msg::FieldEdited { field, value } => {
            if !state.edit_field(field, value) {
                recipe_debug!("Ignoring edit of {} outside a ready form", field);
            }
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::DeleteClicked => {
            if let Screen::Detail {
                load: LoadState::Ready(_),
                confirming_delete,
                deleting: false,
                ..
            } = &mut state.screen
            {
                *confirming_delete = true;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DeleteConfirmed => confirm_delete(&mut state),
        Msg::DeleteCancelled => {
            if let Screen::Detail {
                confirming_delete, ..
            } = &mut state.screen
            {
                if *confirming_delete {
                    *confirming_delete = false;
                    state.mark_dirty();
                }
            }
            Vec::new()
        }
        Msg::NoticeDismissed => {
            state.dismiss_notice();
            Vec::new()
        }
        Msg::ListLoaded { request, result } => {
            if !accept(&mut state, request) {
                return (state, Vec::new());
            }
            if let Screen::List { load } = &mut state.screen {
                *load = match result {
                    Ok(recipes) => {
                        recipe_info!("Loaded {} recipes", recipes.len());
                        LoadState::Ready(recipes)
                    }
                    Err(err) => {
                        recipe_warn!("Failed to load recipes: {}", err);
                        LoadState::Failed(messages::LIST_LOAD_FAILED.to_string())
                    }
                };
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::RecipeLoaded { request, result } => {
            if !accept(&mut state, request) {
                return (state, Vec::new());
            }
            apply_loaded(&mut state, result);
            Vec::new()
        }
        Msg::RecipeSaved { request, result } => {
            if !accept(&mut state, request) {
                return (state, Vec::new());
            }
            apply_saved(&mut state, result)
        }
        Msg::RecipeDeleted { request, result } => {
            if !accept(&mut state, request) {
                return (state, Vec::new());
            }
            apply_deleted(&mut state, result)
        }
    };

    (state, effects)
}

fn accept(state: &mut AppState, request: RequestId) -> bool {
    let accepted = state.settle_request(request);
    if !accepted {
        recipe_debug!("Discarding stale response for request {}", request);
    }
    accepted
}

fn navigate(state: &mut AppState, route: Route) -> Vec<Effect> {
    let mut effects = Vec::with_capacity(2);
    if state.abandon_request() {
        effects.push(Effect::CancelPending);
    }

    match route {
        Route::List => {
            state.screen = Screen::List {
                load: LoadState::Loading,
            };
            effects.push(Effect::FetchList {
                request: state.issue_request(),
            });
        }
        Route::Detail(id) => {
            state.screen = Screen::Detail {
                id: id.clone(),
                load: LoadState::Loading,
                confirming_delete: false,
                deleting: false,
            };
            effects.push(Effect::FetchRecipe {
                request: state.issue_request(),
                id,
            });
        }
        Route::Create => {
            state.screen = Screen::Form(FormScreen {
                target: FormTarget::Create,
                load: LoadState::Ready(RecipeDraft::default()),
                errors: ValidationErrors::default(),
                submitting: false,
            });
        }
        Route::Edit(id) => {
            state.screen = Screen::Form(FormScreen {
                target: FormTarget::Edit(id.clone()),
                load: LoadState::Loading,
                errors: ValidationErrors::default(),
                submitting: false,
            });
            effects.push(Effect::FetchRecipe {
                request: state.issue_request(),
                id,
            });
        }
    }

    state.mark_dirty();
    effects
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    let Screen::Form(form) = &mut state.screen else {
        return Vec::new();
    };
    if form.submitting {
        return Vec::new();
    }
    let LoadState::Ready(draft) = &form.load else {
        return Vec::new();
    };

    let errors = validate(draft);
    let recipe = draft.to_new_recipe();
    let target = form.target.clone();
    let rejected = !errors.is_empty();
    form.errors = errors;
    form.submitting = !rejected;
    state.mark_dirty();

    if rejected {
        recipe_info!("Form submission blocked by validation");
        return Vec::new();
    }

    let request = state.issue_request();
    match target {
        FormTarget::Create => vec![Effect::CreateRecipe { request, recipe }],
        FormTarget::Edit(id) => vec![Effect::UpdateRecipe {
            request,
            id,
            recipe,
        }],
    }
}

fn confirm_delete(state: &mut AppState) -> Vec<Effect> {
    let Screen::Detail {
        id,
        confirming_delete,
        deleting,
        ..
    } = &mut state.screen
    else {
        return Vec::new();
    };
    if !*confirming_delete || *deleting {
        return Vec::new();
    }
    *confirming_delete = false;
    *deleting = true;
    let id = id.clone();
    state.mark_dirty();

    vec![Effect::DeleteRecipe {
        request: state.issue_request(),
        id,
    }]
}

fn apply_loaded(state: &mut AppState, result: Result<Recipe, String>) {
    let mut notice = None;
    match &mut state.screen {
        Screen::Detail { load, .. } => {
            *load = match result {
                Ok(recipe) => LoadState::Ready(recipe),
                Err(err) => {
                    recipe_warn!("Failed to load recipe details: {}", err);
                    LoadState::Failed(messages::DETAIL_LOAD_FAILED.to_string())
                }
            };
        }
        Screen::Form(form) => {
            form.load = match result {
                Ok(recipe) => LoadState::Ready(RecipeDraft::from_recipe(&recipe)),
                Err(err) => {
                    recipe_warn!("Failed to load recipe for editing: {}", err);
                    notice = Some(Notice::error(messages::EDIT_LOAD_FAILED));
                    LoadState::Failed(messages::EDIT_LOAD_FAILED.to_string())
                }
            };
        }
        Screen::List { .. } => return,
    }
    if let Some(notice) = notice {
        state.set_notice(notice);
    }
    state.mark_dirty();
}

fn apply_saved(state: &mut AppState, result: Result<Recipe, String>) -> Vec<Effect> {
    let Screen::Form(form) = &mut state.screen else {
        return Vec::new();
    };
    form.submitting = false;
    let target = form.target.clone();

    match (target, result) {
        (FormTarget::Create, Ok(recipe)) => {
            recipe_info!("Created recipe {}", recipe.id);
            navigate(state, Route::List)
        }
        (FormTarget::Create, Err(err)) => {
            recipe_warn!("Failed to create recipe: {}", err);
            state.set_notice(Notice::error(messages::CREATE_FAILED));
            Vec::new()
        }
        (FormTarget::Edit(id), Ok(_)) => {
            recipe_info!("Updated recipe {}", id);
            state.set_notice(Notice::info(messages::UPDATED));
            navigate(state, Route::Detail(id))
        }
        (FormTarget::Edit(id), Err(err)) => {
            recipe_warn!("Failed to update recipe {}: {}", id, err);
            state.set_notice(Notice::error(messages::UPDATE_FAILED));
            Vec::new()
        }
    }
}

fn apply_deleted(state: &mut AppState, result: Result<(), String>) -> Vec<Effect> {
    let Screen::Detail { id, deleting, .. } = &mut state.screen else {
        return Vec::new();
    };
    *deleting = false;
    let id = id.clone();

    match result {
        Ok(()) => {
            recipe_info!("Deleted recipe {}", id);
            state.set_notice(Notice::info(messages::DELETED));
            navigate(state, Route::List)
        }
        Err(err) => {
            recipe_warn!("Failed to delete recipe {}: {}", id, err);
            state.set_notice(Notice::error(messages::DELETE_FAILED));
            Vec::new()
        }
    }
}
