use std::sync::Once;

use recipe_core::{
    update, AppState, Effect, Msg, NoticeKind, Recipe, RecipeId, RecipeRow, Route, ScreenView,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(recipe_logging::initialize_for_tests);
}

fn recipe(id: &str, title: &str) -> Recipe {
    Recipe {
        id: RecipeId::new(id),
        title: title.to_string(),
        meal_type: "Almoço".to_string(),
        servings: 2,
        difficulty: "Médio".to_string(),
        ingredients: vec!["arroz".to_string(), "feijão".to_string()],
        steps: vec!["Cozinhe".to_string()],
    }
}

fn single_request(effects: &[Effect]) -> u64 {
    match effects {
        [Effect::FetchList { request }] | [Effect::FetchRecipe { request, .. }] => *request,
        other => panic!("expected one fetch effect, got {other:?}"),
    }
}

#[test]
fn new_state_is_idle_on_the_list_route() {
    init_logging();
    let state = AppState::new();
    let view = state.view();
    assert_eq!(view.route, Route::List);
    assert!(!view.busy);
    assert!(!view.dirty);
    assert!(view.notice.is_none());
}

#[test]
fn list_navigation_loads_then_shows_rows() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Navigate(Route::List));
    let request = single_request(&effects);
    assert!(matches!(state.view().screen, ScreenView::Loading { .. }));
    assert!(state.view().busy);

    let (state, effects) = update(
        state,
        Msg::ListLoaded {
            request,
            result: Ok(vec![recipe("1", "Bolo"), recipe("2", "Pão")]),
        },
    );
    assert!(effects.is_empty());
    let view = state.view();
    assert!(!view.busy);
    assert!(view.dirty);
    match view.screen {
        ScreenView::List { rows } => {
            assert_eq!(
                rows,
                vec![
                    RecipeRow {
                        id: RecipeId::new("1"),
                        title: "Bolo".to_string(),
                        meal_type: "Almoço".to_string(),
                    },
                    RecipeRow {
                        id: RecipeId::new("2"),
                        title: "Pão".to_string(),
                        meal_type: "Almoço".to_string(),
                    },
                ]
            );
        }
        other => panic!("expected list view, got {other:?}"),
    }
}

#[test]
fn list_failure_shows_error_state() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Navigate(Route::List));
    let request = single_request(&effects);
    let (state, _) = update(
        state,
        Msg::ListLoaded {
            request,
            result: Err("http status 500".to_string()),
        },
    );
    assert_eq!(
        state.view().screen,
        ScreenView::Failed {
            message: "Erro ao carregar as receitas.".to_string()
        }
    );
    assert!(state.view().notice.is_none());
}

#[test]
fn navigating_away_cancels_and_ignores_the_late_response() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Navigate(Route::List));
    let list_request = single_request(&effects);

    let (state, effects) = update(state, Msg::Navigate(Route::Detail(RecipeId::new("5"))));
    assert_eq!(effects.len(), 2);
    assert_eq!(effects[0], Effect::CancelPending);
    let detail_request = single_request(&effects[1..]);
    assert_ne!(detail_request, list_request);

    let (state, effects) = update(
        state,
        Msg::ListLoaded {
            request: list_request,
            result: Ok(vec![recipe("1", "Bolo")]),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.route(), Route::Detail(RecipeId::new("5")));
    assert!(matches!(state.view().screen, ScreenView::Loading { .. }));
    assert_eq!(state.pending_request(), Some(detail_request));
}

#[test]
fn detail_loads_recipe() {
    init_logging();
    let id = RecipeId::new("5");
    let (state, effects) = update(AppState::new(), Msg::Navigate(Route::Detail(id.clone())));
    assert_eq!(
        effects,
        vec![Effect::FetchRecipe {
            request: 1,
            id: id.clone()
        }]
    );

    let (state, _) = update(
        state,
        Msg::RecipeLoaded {
            request: 1,
            result: Ok(recipe("5", "Feijoada")),
        },
    );
    match state.view().screen {
        ScreenView::Detail {
            recipe,
            confirming_delete,
            deleting,
        } => {
            assert_eq!(recipe.title, "Feijoada");
            assert!(!confirming_delete);
            assert!(!deleting);
        }
        other => panic!("expected detail view, got {other:?}"),
    }
}

#[test]
fn detail_failure_shows_error_state() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Navigate(Route::Detail(RecipeId::new(""))));
    let (state, _) = update(
        state,
        Msg::RecipeLoaded {
            request: 1,
            result: Err("missing recipe id".to_string()),
        },
    );
    assert_eq!(
        state.view().screen,
        ScreenView::Failed {
            message: "Erro ao carregar os detalhes da receita.".to_string()
        }
    );
}

fn loaded_detail(id: &str) -> AppState {
    let (state, _) = update(AppState::new(), Msg::Navigate(Route::Detail(RecipeId::new(id))));
    let request = state.pending_request().expect("detail request");
    let (state, _) = update(
        state,
        Msg::RecipeLoaded {
            request,
            result: Ok(recipe(id, "Feijoada")),
        },
    );
    state
}

#[test]
fn delete_requires_confirmation() {
    init_logging();
    let state = loaded_detail("5");

    let (state, effects) = update(state, Msg::DeleteConfirmed);
    assert!(effects.is_empty(), "confirmation without a prompt is ignored");

    let (state, effects) = update(state, Msg::DeleteClicked);
    assert!(effects.is_empty());
    assert!(matches!(
        state.view().screen,
        ScreenView::Detail {
            confirming_delete: true,
            ..
        }
    ));

    let (state, effects) = update(state, Msg::DeleteCancelled);
    assert!(effects.is_empty());
    assert!(matches!(
        state.view().screen,
        ScreenView::Detail {
            confirming_delete: false,
            ..
        }
    ));
}

#[test]
fn confirmed_delete_navigates_back_to_list_with_notice() {
    init_logging();
    let state = loaded_detail("5");
    let (state, _) = update(state, Msg::DeleteClicked);
    let (state, effects) = update(state, Msg::DeleteConfirmed);
    let request = match effects.as_slice() {
        [Effect::DeleteRecipe { request, id }] => {
            assert_eq!(id, &RecipeId::new("5"));
            *request
        }
        other => panic!("expected delete effect, got {other:?}"),
    };
    assert!(matches!(
        state.view().screen,
        ScreenView::Detail { deleting: true, .. }
    ));

    // A second confirmation while deleting does nothing.
    let (state, effects) = update(state, Msg::DeleteConfirmed);
    assert!(effects.is_empty());

    let (state, effects) = update(
        state,
        Msg::RecipeDeleted {
            request,
            result: Ok(()),
        },
    );
    assert_eq!(state.route(), Route::List);
    assert!(matches!(effects.as_slice(), [Effect::FetchList { .. }]));
    let notice = state.notice().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Info);
    assert_eq!(notice.message, "Receita excluída com sucesso!");

    let (state, _) = update(state, Msg::NoticeDismissed);
    assert!(state.notice().is_none());
}

#[test]
fn failed_delete_keeps_detail_and_notifies() {
    init_logging();
    let state = loaded_detail("5");
    let (state, _) = update(state, Msg::DeleteClicked);
    let (state, _) = update(state, Msg::DeleteConfirmed);
    let request = state.pending_request().expect("delete request");

    let (state, effects) = update(
        state,
        Msg::RecipeDeleted {
            request,
            result: Err("network error".to_string()),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.route(), Route::Detail(RecipeId::new("5")));
    assert!(matches!(
        state.view().screen,
        ScreenView::Detail {
            deleting: false,
            ..
        }
    ));
    let notice = state.notice().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(
        notice.message,
        "Erro ao excluir a receita. Por favor, tente novamente."
    );
}

#[test]
fn clear_dirty_resets_until_next_change() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::Navigate(Route::List));
    assert!(state.is_dirty());
    state.clear_dirty();
    assert!(!state.is_dirty());

    let (state, _) = update(state, Msg::NoticeDismissed);
    assert!(!state.is_dirty());
}
