use crate::messages;
use crate::view_model::{AppViewModel, RecipeRow, ScreenView};
use crate::{Recipe, RecipeDraft, RecipeField, RecipeId, ValidationErrors};

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    List,
    Detail(RecipeId),
    Create,
    Edit(RecipeId),
}

/// Per-screen fetch status: `Loading` moves to `Ready` or `Failed` once per cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Message the user must acknowledge before continuing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FormTarget {
    Create,
    Edit(RecipeId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FormScreen {
    pub(crate) target: FormTarget,
    pub(crate) load: LoadState<RecipeDraft>,
    pub(crate) errors: ValidationErrors,
    pub(crate) submitting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Screen {
    List {
        load: LoadState<Vec<Recipe>>,
    },
    Detail {
        id: RecipeId,
        load: LoadState<Recipe>,
        confirming_delete: bool,
        deleting: bool,
    },
    Form(FormScreen),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub(crate) screen: Screen,
    pending: Option<RequestId>,
    last_request: RequestId,
    notice: Option<Notice>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::List {
                load: LoadState::Loading,
            },
            pending: None,
            last_request: 0,
            notice: None,
            dirty: false,
        }
    }
}

impl AppState {
    /// Starts on the list screen with nothing requested yet; send
    /// `Msg::Navigate` to issue the first load.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self) -> Route {
        match &self.screen {
            Screen::List { .. } => Route::List,
            Screen::Detail { id, .. } => Route::Detail(id.clone()),
            Screen::Form(form) => match &form.target {
                FormTarget::Create => Route::Create,
                FormTarget::Edit(id) => Route::Edit(id.clone()),
            },
        }
    }

    /// Request the current screen is still waiting on, if any.
    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending
    }

    pub fn has_pending_request(&self) -> bool {
        self.pending.is_some()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Called by the renderer once the current view has been drawn.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            route: self.route(),
            screen: self.screen_view(),
            notice: self.notice.clone(),
            busy: self.pending.is_some(),
            dirty: self.dirty,
        }
    }

    fn screen_view(&self) -> ScreenView {
        match &self.screen {
            Screen::List { load } => match load {
                LoadState::Loading => ScreenView::Loading {
                    message: messages::LOADING,
                },
                LoadState::Failed(message) => ScreenView::Failed {
                    message: message.clone(),
                },
                LoadState::Ready(recipes) => ScreenView::List {
                    rows: recipes.iter().map(RecipeRow::from).collect(),
                },
            },
            Screen::Detail {
                load,
                confirming_delete,
                deleting,
                ..
            } => match load {
                LoadState::Loading => ScreenView::Loading {
                    message: messages::LOADING,
                },
                LoadState::Failed(message) => ScreenView::Failed {
                    message: message.clone(),
                },
                LoadState::Ready(recipe) => ScreenView::Detail {
                    recipe: recipe.clone(),
                    confirming_delete: *confirming_delete,
                    deleting: *deleting,
                },
            },
            Screen::Form(form) => match &form.load {
                LoadState::Loading => ScreenView::Loading {
                    message: messages::LOADING_EDIT,
                },
                LoadState::Failed(message) => ScreenView::Failed {
                    message: message.clone(),
                },
                LoadState::Ready(draft) => ScreenView::Form {
                    heading: match form.target {
                        FormTarget::Create => messages::CREATE_HEADING,
                        FormTarget::Edit(_) => messages::EDIT_HEADING,
                    },
                    draft: draft.clone(),
                    errors: form.errors.clone(),
                    submitting: form.submitting,
                },
            },
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Allocates the next request id and records it as the screen's only
    /// outstanding request.
    pub(crate) fn issue_request(&mut self) -> RequestId {
        self.last_request += 1;
        self.pending = Some(self.last_request);
        self.last_request
    }

    /// Clears the pending slot if `request` is the one being waited on.
    /// Returns false for stale or unknown answers.
    pub(crate) fn settle_request(&mut self, request: RequestId) -> bool {
        if self.pending == Some(request) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Forgets the outstanding request; returns whether there was one.
    pub(crate) fn abandon_request(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.mark_dirty();
    }

    pub(crate) fn dismiss_notice(&mut self) {
        if self.notice.take().is_some() {
            self.mark_dirty();
        }
    }

    pub(crate) fn edit_field(&mut self, field: RecipeField, value: String) -> bool {
        let Screen::Form(form) = &mut self.screen else {
            return false;
        };
        if form.submitting {
            return false;
        }
        let LoadState::Ready(draft) = &mut form.load else {
            return false;
        };
        match field {
            RecipeField::Title => draft.title = value,
            RecipeField::MealType => draft.meal_type = value,
            RecipeField::Servings => draft.servings = parse_servings(&value),
            RecipeField::Difficulty => draft.difficulty = value,
            RecipeField::Ingredients => draft.ingredients = value.into(),
            RecipeField::Steps => draft.steps = value.into(),
        }
        self.mark_dirty();
        true
    }
}

/// Unparseable input counts as zero so the validator rejects it.
fn parse_servings(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}
