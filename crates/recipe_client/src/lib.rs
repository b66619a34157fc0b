//! Recipe client: HTTP access to the remote recipe store and a background
//! handle that runs store calls off the caller's thread.
mod handle;
mod store;
mod types;

pub use handle::{ClientHandle, StartError};
pub use store::{ClientSettings, RecipeStore, ReqwestRecipeStore, DEFAULT_BASE_URL};
pub use types::{ClientError, ClientEvent, ClientOp, ClientOutcome, FailureCause, RequestId};
