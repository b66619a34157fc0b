use std::sync::Once;

use pretty_assertions::assert_eq;
use recipe_core::{
    update, AppState, Effect, FieldValue, Msg, NewRecipe, NoticeKind, Recipe, RecipeDraft,
    RecipeField, RecipeId, Route, ScreenView,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(recipe_logging::initialize_for_tests);
}

fn edit(state: AppState, field: RecipeField, value: &str) -> AppState {
    let (state, effects) = update(
        state,
        Msg::FieldEdited {
            field,
            value: value.to_string(),
        },
    );
    assert!(effects.is_empty());
    state
}

fn filled_create_form() -> AppState {
    let (state, effects) = update(AppState::new(), Msg::Navigate(Route::Create));
    assert!(effects.is_empty());
    let state = edit(state, RecipeField::Title, "Panqueca");
    let state = edit(state, RecipeField::MealType, "Café da manhã");
    let state = edit(state, RecipeField::Servings, "4");
    let state = edit(state, RecipeField::Difficulty, "Fácil");
    let state = edit(state, RecipeField::Ingredients, "2 ovos, 1 xícara de leite ,farinha");
    edit(state, RecipeField::Steps, "Misture tudo. Frite.")
}

fn form_view(state: &AppState) -> (RecipeDraft, recipe_core::ValidationErrors, bool) {
    match state.view().screen {
        ScreenView::Form {
            draft,
            errors,
            submitting,
            ..
        } => (draft, errors, submitting),
        other => panic!("expected form view, got {other:?}"),
    }
}

fn stored(id: &str) -> Recipe {
    Recipe {
        id: RecipeId::new(id),
        title: "Panqueca".to_string(),
        meal_type: "Café da manhã".to_string(),
        servings: 4,
        difficulty: "Fácil".to_string(),
        ingredients: vec!["2 ovos".to_string(), "farinha".to_string()],
        steps: vec!["Misture tudo".to_string(), "Frite".to_string()],
    }
}

#[test]
fn create_form_starts_ready_without_request() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Navigate(Route::Create));
    assert!(effects.is_empty());
    assert!(!state.has_pending_request());
    let (draft, errors, submitting) = form_view(&state);
    assert_eq!(draft, RecipeDraft::default());
    assert!(errors.is_empty());
    assert!(!submitting);
}

#[test]
fn invalid_submit_records_errors_and_sends_nothing() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Navigate(Route::Create));
    let state = edit(state, RecipeField::Title, "Panqueca");
    let state = edit(state, RecipeField::Servings, "muitas");

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert!(!state.has_pending_request());

    let (draft, errors, submitting) = form_view(&state);
    assert_eq!(draft.servings, 0);
    assert!(!submitting);
    assert!(!errors.contains(RecipeField::Title));
    for field in [
        RecipeField::MealType,
        RecipeField::Servings,
        RecipeField::Difficulty,
        RecipeField::Ingredients,
        RecipeField::Steps,
    ] {
        assert!(errors.contains(field), "missing error for {field}");
    }
}

#[test]
fn valid_submit_sends_normalized_create() {
    init_logging();
    let (state, effects) = update(filled_create_form(), Msg::SubmitClicked);
    assert_eq!(
        effects,
        vec![Effect::CreateRecipe {
            request: 1,
            recipe: NewRecipe {
                title: "Panqueca".to_string(),
                meal_type: "Café da manhã".to_string(),
                servings: 4,
                difficulty: "Fácil".to_string(),
                ingredients: vec![
                    "2 ovos".to_string(),
                    "1 xícara de leite".to_string(),
                    "farinha".to_string()
                ],
                steps: vec!["Misture tudo".to_string(), "Frite".to_string(), String::new()],
            },
        }]
    );
    let (_, errors, submitting) = form_view(&state);
    assert!(errors.is_empty());
    assert!(submitting);

    // Edits and resubmits are ignored while the request is in flight.
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    let (state, _) = update(
        state,
        Msg::FieldEdited {
            field: RecipeField::Title,
            value: "Outra".to_string(),
        },
    );
    assert_eq!(form_view(&state).0.title, "Panqueca");
}

#[test]
fn successful_create_returns_to_list() {
    init_logging();
    let (state, _) = update(filled_create_form(), Msg::SubmitClicked);
    let (state, effects) = update(
        state,
        Msg::RecipeSaved {
            request: 1,
            result: Ok(stored("42")),
        },
    );
    assert_eq!(state.route(), Route::List);
    assert_eq!(effects, vec![Effect::FetchList { request: 2 }]);
    assert!(state.notice().is_none());
}

#[test]
fn failed_create_keeps_draft_for_resubmission() {
    init_logging();
    let (state, _) = update(filled_create_form(), Msg::SubmitClicked);
    let (state, effects) = update(
        state,
        Msg::RecipeSaved {
            request: 1,
            result: Err("http status 500".to_string()),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.route(), Route::Create);
    let (draft, _, submitting) = form_view(&state);
    assert_eq!(draft.title, "Panqueca");
    assert!(!submitting);
    let notice = state.notice().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Erro ao cadastrar a receita.");

    let (_, effects) = update(state, Msg::SubmitClicked);
    assert!(matches!(effects.as_slice(), [Effect::CreateRecipe { request: 2, .. }]));
}

fn loaded_edit_form(id: &str) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::Navigate(Route::Edit(RecipeId::new(id))));
    assert_eq!(
        effects,
        vec![Effect::FetchRecipe {
            request: 1,
            id: RecipeId::new(id)
        }]
    );
    let (state, _) = update(
        state,
        Msg::RecipeLoaded {
            request: 1,
            result: Ok(stored(id)),
        },
    );
    state
}

#[test]
fn edit_form_is_prefilled_with_joined_lists() {
    init_logging();
    let state = loaded_edit_form("9");
    let (draft, _, _) = form_view(&state);
    assert_eq!(draft.title, "Panqueca");
    assert_eq!(draft.ingredients, FieldValue::from("2 ovos, farinha"));
    assert_eq!(draft.steps, FieldValue::from("Misture tudo. Frite"));
}

#[test]
fn edit_load_failure_notifies_and_shows_error() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Navigate(Route::Edit(RecipeId::new("9"))));
    let (state, _) = update(
        state,
        Msg::RecipeLoaded {
            request: 1,
            result: Err("http status 404".to_string()),
        },
    );
    assert_eq!(
        state.view().screen,
        ScreenView::Failed {
            message: "Erro ao carregar os dados da receita.".to_string()
        }
    );
    assert_eq!(
        state.notice().map(|notice| notice.kind),
        Some(NoticeKind::Error)
    );

    let (_, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
}

#[test]
fn successful_update_shows_notice_and_opens_detail() {
    init_logging();
    let state = loaded_edit_form("9");
    let state = edit(state, RecipeField::Servings, " 6 ");
    let (state, effects) = update(state, Msg::SubmitClicked);
    match effects.as_slice() {
        [Effect::UpdateRecipe {
            request: 2,
            id,
            recipe,
        }] => {
            assert_eq!(id, &RecipeId::new("9"));
            assert_eq!(recipe.servings, 6);
            assert_eq!(recipe.ingredients, vec!["2 ovos", "farinha"]);
            assert_eq!(recipe.steps, vec!["Misture tudo", "Frite"]);
        }
        other => panic!("expected update effect, got {other:?}"),
    }

    let (state, effects) = update(
        state,
        Msg::RecipeSaved {
            request: 2,
            result: Ok(stored("9")),
        },
    );
    assert_eq!(state.route(), Route::Detail(RecipeId::new("9")));
    assert_eq!(
        effects,
        vec![Effect::FetchRecipe {
            request: 3,
            id: RecipeId::new("9")
        }]
    );
    let notice = state.notice().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Info);
    assert_eq!(notice.message, "Receita atualizada com sucesso!");
}

#[test]
fn failed_update_stays_on_form() {
    init_logging();
    let state = loaded_edit_form("9");
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, effects) = update(
        state,
        Msg::RecipeSaved {
            request: 2,
            result: Err("timeout".to_string()),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.route(), Route::Edit(RecipeId::new("9")));
    assert_eq!(
        state.notice().map(|notice| notice.message.as_str()),
        Some("Erro ao salvar as alterações da receita.")
    );
}

#[test]
fn stale_save_after_navigation_is_ignored() {
    init_logging();
    let (state, _) = update(filled_create_form(), Msg::SubmitClicked);
    let (state, effects) = update(state, Msg::Navigate(Route::List));
    assert_eq!(
        effects,
        vec![Effect::CancelPending, Effect::FetchList { request: 2 }]
    );

    let (state, effects) = update(
        state,
        Msg::RecipeSaved {
            request: 1,
            result: Err("late".to_string()),
        },
    );
    assert!(effects.is_empty());
    assert!(state.notice().is_none());
    assert_eq!(state.pending_request(), Some(2));
}
