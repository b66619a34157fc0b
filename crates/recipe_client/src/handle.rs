use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use recipe_logging::{recipe_debug, recipe_info, recipe_warn};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::store::{ClientSettings, RecipeStore, ReqwestRecipeStore};
use crate::{ClientError, ClientEvent, ClientOp, ClientOutcome, RequestId};

#[derive(Debug, Error)]
pub enum StartError {
    #[error("invalid client settings: {0}")]
    Settings(#[from] ClientError),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] io::Error),
}

enum HandleCommand {
    Execute { request: RequestId, op: ClientOp },
    CancelPending,
}

/// Runs store calls on a background thread and reports each answer as a
/// `ClientEvent`. Requests cancelled before they finish produce no event.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<HandleCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, StartError> {
        recipe_info!("Using recipe store at {}", settings.base_url);
        let store = ReqwestRecipeStore::new(settings)?;
        Self::with_store(Arc::new(store))
    }

    pub fn with_store(store: Arc<dyn RecipeStore>) -> Result<Self, StartError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        thread::spawn(move || {
            let mut token = CancellationToken::new();
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    HandleCommand::CancelPending => {
                        token.cancel();
                        token = CancellationToken::new();
                    }
                    HandleCommand::Execute { request, op } => {
                        let store = store.clone();
                        let event_tx = event_tx.clone();
                        let token = token.clone();
                        runtime.spawn(async move {
                            tokio::select! {
                                _ = token.cancelled() => {
                                    recipe_debug!("Request {} cancelled", request);
                                }
                                outcome = execute(store.as_ref(), op) => {
                                    let _ = event_tx.send(ClientEvent { request, outcome });
                                }
                            }
                        });
                    }
                }
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn execute(&self, request: RequestId, op: ClientOp) {
        recipe_debug!("Queueing {} as request {}", op.name(), request);
        let _ = self.cmd_tx.send(HandleCommand::Execute { request, op });
    }

    /// Cancels every request queued so far.
    pub fn cancel_pending(&self) {
        let _ = self.cmd_tx.send(HandleCommand::CancelPending);
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next answer arrives.
    pub fn recv(&self) -> Option<ClientEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<ClientEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn execute(store: &dyn RecipeStore, op: ClientOp) -> ClientOutcome {
    let name = op.name();
    let outcome = match op {
        ClientOp::List => ClientOutcome::Listed(store.list().await),
        ClientOp::Get { id } => ClientOutcome::Fetched(store.get(&id).await),
        ClientOp::Create { recipe } => ClientOutcome::Created(store.create(&recipe).await),
        ClientOp::Update { id, recipe } => {
            ClientOutcome::Updated(store.update(&id, &recipe).await)
        }
        ClientOp::Delete { id } => ClientOutcome::Deleted(store.delete(&id).await),
    };
    if let Some(err) = outcome.error() {
        recipe_warn!("Store {} failed ({}): {}", name, err.cause, err);
    }
    outcome
}
