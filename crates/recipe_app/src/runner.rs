use std::time::Duration;

use recipe_client::{ClientEvent, ClientHandle, ClientOp, ClientOutcome};
use recipe_core::{Effect, Msg};
use recipe_logging::{recipe_debug, recipe_info};

/// Carries out state-machine effects on the client handle and turns store
/// answers back into messages.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(client: ClientHandle) -> Self {
        Self { client }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::CancelPending => {
                    recipe_debug!("Cancelling in-flight store requests");
                    self.client.cancel_pending();
                }
                Effect::FetchList { request } => {
                    self.client.execute(request, ClientOp::List);
                }
                Effect::FetchRecipe { request, id } => {
                    self.client.execute(request, ClientOp::Get { id });
                }
                Effect::CreateRecipe { request, recipe } => {
                    recipe_info!("Creating recipe title_len={}", recipe.title.len());
                    self.client.execute(request, ClientOp::Create { recipe });
                }
                Effect::UpdateRecipe {
                    request,
                    id,
                    recipe,
                } => {
                    recipe_info!("Updating recipe {}", id);
                    self.client.execute(request, ClientOp::Update { id, recipe });
                }
                Effect::DeleteRecipe { request, id } => {
                    recipe_info!("Deleting recipe {}", id);
                    self.client.execute(request, ClientOp::Delete { id });
                }
            }
        }
    }

    /// Waits up to `timeout` for the next store answer.
    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        self.client.recv_timeout(timeout).map(event_to_msg)
    }
}

fn event_to_msg(event: ClientEvent) -> Msg {
    let request = event.request;
    match event.outcome {
        ClientOutcome::Listed(result) => Msg::ListLoaded {
            request,
            result: result.map_err(|err| err.to_string()),
        },
        ClientOutcome::Fetched(result) => Msg::RecipeLoaded {
            request,
            result: result.map_err(|err| err.to_string()),
        },
        ClientOutcome::Created(result) | ClientOutcome::Updated(result) => Msg::RecipeSaved {
            request,
            result: result.map_err(|err| err.to_string()),
        },
        ClientOutcome::Deleted(result) => Msg::RecipeDeleted {
            request,
            result: result.map_err(|err| err.to_string()),
        },
    }
}
