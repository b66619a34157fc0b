//! Plain-text rendering of the view model.

use std::io::{self, Write};

use recipe_core::{
    AppViewModel, FieldValue, Notice, NoticeKind, RecipeDraft, RecipeField, ScreenView,
};

pub fn render(view: &AppViewModel, out: &mut impl Write) -> io::Result<()> {
    match &view.screen {
        ScreenView::Loading { message } => writeln!(out, "{message}"),
        ScreenView::Failed { message } => {
            writeln!(out, "{message}")?;
            writeln!(out, "Por favor, tente novamente mais tarde.")
        }
        ScreenView::List { rows } => {
            writeln!(out, "Aplicativo de Receitas")?;
            writeln!(out, "Lista de Receitas")?;
            if rows.is_empty() {
                writeln!(out, "  (nenhuma receita)")?;
            }
            for row in rows {
                writeln!(out, "  [{}] {} | Tipo: {}", row.id, row.title, row.meal_type)?;
            }
            Ok(())
        }
        ScreenView::Detail {
            recipe, deleting, ..
        } => {
            writeln!(out, "{}", recipe.title)?;
            writeln!(out, "Tipo: {}", recipe.meal_type)?;
            writeln!(out, "Serve: {} pessoas", recipe.servings)?;
            writeln!(out, "Dificuldade: {}", recipe.difficulty)?;
            writeln!(out)?;
            writeln!(out, "Ingredientes")?;
            for ingredient in &recipe.ingredients {
                writeln!(out, "  - {ingredient}")?;
            }
            writeln!(out)?;
            writeln!(out, "Etapas")?;
            for (index, step) in recipe.steps.iter().enumerate() {
                writeln!(out, "  {}. {step}", index + 1)?;
            }
            if *deleting {
                writeln!(out, "Excluindo...")?;
            }
            Ok(())
        }
        ScreenView::Form {
            heading,
            draft,
            errors,
            submitting,
        } => {
            writeln!(out, "{heading}")?;
            for field in RecipeField::ALL {
                writeln!(out, "  {}: {}", field.label(), field_text(draft, field))?;
                if let Some(message) = errors.get(field) {
                    writeln!(out, "    ! {message}")?;
                }
            }
            if *submitting {
                writeln!(out, "Salvando...")?;
            }
            Ok(())
        }
    }
}

pub fn render_notice(notice: &Notice, out: &mut impl Write) -> io::Result<()> {
    match notice.kind {
        NoticeKind::Info => writeln!(out, "{}", notice.message),
        NoticeKind::Error => writeln!(out, "Erro: {}", notice.message),
    }
}

fn field_text(draft: &RecipeDraft, field: RecipeField) -> String {
    match field {
        RecipeField::Title => draft.title.clone(),
        RecipeField::MealType => draft.meal_type.clone(),
        RecipeField::Servings => draft.servings.to_string(),
        RecipeField::Difficulty => draft.difficulty.clone(),
        RecipeField::Ingredients => list_text(&draft.ingredients),
        RecipeField::Steps => list_text(&draft.steps),
    }
}

fn list_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(text) => text.clone(),
        FieldValue::List(items) => items.join(" | "),
    }
}
