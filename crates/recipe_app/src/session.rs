use std::io::{BufRead, Write};
use std::mem;
use std::time::Duration;

use anyhow::{bail, Result};
use recipe_core::{messages, update, AppState, Msg, NoticeKind, RecipeField, ScreenView};
use recipe_logging::recipe_warn;

use crate::render::{render, render_notice};
use crate::runner::EffectRunner;

/// Drives the state machine for one command: dispatches messages, runs their
/// effects and waits for the store to answer.
pub struct Session {
    state: AppState,
    runner: EffectRunner,
    answer_timeout: Duration,
}

impl Session {
    pub fn new(runner: EffectRunner, answer_timeout: Duration) -> Self {
        Self {
            state: AppState::new(),
            runner,
            answer_timeout,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let (next, effects) = update(mem::take(&mut self.state), msg);
        self.state = next;
        self.runner.run(effects);
    }

    /// Feeds store answers back in until nothing is outstanding.
    pub fn settle(&mut self) -> Result<()> {
        while self.state.has_pending_request() {
            match self.runner.next_msg(self.answer_timeout) {
                Some(msg) => self.dispatch(msg),
                None => {
                    recipe_warn!("No store answer within {:?}", self.answer_timeout);
                    bail!("no answer from the recipe store");
                }
            }
        }
        Ok(())
    }

    pub fn edit_fields(&mut self, edits: Vec<(RecipeField, String)>) {
        for (field, value) in edits {
            self.dispatch(Msg::FieldEdited { field, value });
        }
    }

    /// Validation errors on the current form, if the last submit was blocked.
    pub fn rejected_fields(&self) -> usize {
        match self.state.view().screen {
            ScreenView::Form { errors, .. } if !self.state.has_pending_request() => errors.len(),
            _ => 0,
        }
    }

    pub fn screen_failed(&self) -> bool {
        matches!(self.state.view().screen, ScreenView::Failed { .. })
    }

    /// Prints any notice, acknowledges it, then draws the current screen.
    /// Returns whether the notice reported a failure.
    pub fn present(&mut self, out: &mut impl Write) -> Result<bool> {
        let mut failed = false;
        if let Some(notice) = self.state.notice().cloned() {
            render_notice(&notice, out)?;
            failed = notice.kind == NoticeKind::Error;
            self.dispatch(Msg::NoticeDismissed);
        }
        render(&self.state.view(), out)?;
        self.state.clear_dirty();
        Ok(failed)
    }

    /// Asks the user to confirm a delete; accepts `s`, `sim`, `y` or `yes`.
    pub fn confirm_delete(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<bool> {
        self.dispatch(Msg::DeleteClicked);
        write!(out, "{} [s/N] ", messages::DELETE_CONFIRM)?;
        out.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;
        let confirmed = matches!(
            answer.trim().to_lowercase().as_str(),
            "s" | "sim" | "y" | "yes"
        );
        self.dispatch(if confirmed {
            Msg::DeleteConfirmed
        } else {
            Msg::DeleteCancelled
        });
        Ok(confirmed)
    }
}
