use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use recipe_core::{Msg, RecipeField, RecipeId, Route, ScreenView};

use crate::session::Session;

/// Form values given on the command line; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, clap::Args)]
pub struct FormArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub meal_type: Option<String>,
    #[arg(long)]
    pub servings: Option<String>,
    #[arg(long)]
    pub difficulty: Option<String>,
    /// Comma-separated ingredients.
    #[arg(long)]
    pub ingredients: Option<String>,
    /// Period-separated steps.
    #[arg(long)]
    pub steps: Option<String>,
}

impl FormArgs {
    pub fn edits(&self) -> Vec<(RecipeField, String)> {
        [
            (RecipeField::Title, &self.title),
            (RecipeField::MealType, &self.meal_type),
            (RecipeField::Servings, &self.servings),
            (RecipeField::Difficulty, &self.difficulty),
            (RecipeField::Ingredients, &self.ingredients),
            (RecipeField::Steps, &self.steps),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.clone().map(|value| (field, value)))
        .collect()
    }
}

pub fn list(session: &mut Session, out: &mut impl Write) -> Result<()> {
    session.dispatch(Msg::Navigate(Route::List));
    session.settle()?;
    finish(session, out)
}

pub fn show(session: &mut Session, id: RecipeId, out: &mut impl Write) -> Result<()> {
    session.dispatch(Msg::Navigate(Route::Detail(id)));
    session.settle()?;
    finish(session, out)
}

pub fn create(session: &mut Session, form: &FormArgs, out: &mut impl Write) -> Result<()> {
    session.dispatch(Msg::Navigate(Route::Create));
    submit(session, form, out)
}

pub fn edit(
    session: &mut Session,
    id: RecipeId,
    form: &FormArgs,
    out: &mut impl Write,
) -> Result<()> {
    session.dispatch(Msg::Navigate(Route::Edit(id)));
    session.settle()?;
    if session.screen_failed() {
        return finish(session, out);
    }
    submit(session, form, out)
}

pub fn delete(
    session: &mut Session,
    id: RecipeId,
    assume_yes: bool,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    session.dispatch(Msg::Navigate(Route::Detail(id)));
    session.settle()?;
    if !matches!(session.state().view().screen, ScreenView::Detail { .. }) {
        return finish(session, out);
    }
    session.present(out)?;

    if assume_yes {
        session.dispatch(Msg::DeleteClicked);
        session.dispatch(Msg::DeleteConfirmed);
    } else if !session.confirm_delete(input, out)? {
        writeln!(out, "Exclusão cancelada.")?;
        return Ok(());
    }
    session.settle()?;
    finish(session, out)
}

fn submit(session: &mut Session, form: &FormArgs, out: &mut impl Write) -> Result<()> {
    session.edit_fields(form.edits());
    session.dispatch(Msg::SubmitClicked);

    let rejected = session.rejected_fields();
    if rejected > 0 {
        session.present(out)?;
        bail!("recipe not saved: {rejected} field(s) need attention");
    }
    session.settle()?;
    finish(session, out)
}

fn finish(session: &mut Session, out: &mut impl Write) -> Result<()> {
    let notice_failed = session.present(out)?;
    if notice_failed || session.screen_failed() {
        bail!("the recipe store operation failed");
    }
    Ok(())
}
