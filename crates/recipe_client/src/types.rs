use std::fmt;

use recipe_core::{NewRecipe, Recipe, RecipeId};
use thiserror::Error;

pub type RequestId = u64;

/// The single failure outcome of every store operation.
///
/// Callers treat all failures alike; `cause` only feeds logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("operation failed: {message}")]
pub struct ClientError {
    pub cause: FailureCause,
    pub message: String,
}

impl ClientError {
    pub(crate) fn new(cause: FailureCause, message: impl Into<String>) -> Self {
        Self {
            cause,
            message: message.into(),
        }
    }

    pub(crate) fn missing_id() -> Self {
        Self::new(FailureCause::MissingId, "recipe id is missing")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureCause {
    MissingId,
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for FailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureCause::MissingId => write!(f, "missing id"),
            FailureCause::InvalidUrl => write!(f, "invalid url"),
            FailureCause::HttpStatus(code) => write!(f, "http status {code}"),
            FailureCause::Timeout => write!(f, "timeout"),
            FailureCause::Network => write!(f, "network error"),
            FailureCause::Decode => write!(f, "malformed response"),
        }
    }
}

/// One store call, as queued on a `ClientHandle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientOp {
    List,
    Get { id: RecipeId },
    Create { recipe: NewRecipe },
    Update { id: RecipeId, recipe: NewRecipe },
    Delete { id: RecipeId },
}

impl ClientOp {
    pub fn name(&self) -> &'static str {
        match self {
            ClientOp::List => "list",
            ClientOp::Get { .. } => "get",
            ClientOp::Create { .. } => "create",
            ClientOp::Update { .. } => "update",
            ClientOp::Delete { .. } => "delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientOutcome {
    Listed(Result<Vec<Recipe>, ClientError>),
    Fetched(Result<Recipe, ClientError>),
    Created(Result<Recipe, ClientError>),
    Updated(Result<Recipe, ClientError>),
    Deleted(Result<(), ClientError>),
}

impl ClientOutcome {
    pub fn error(&self) -> Option<&ClientError> {
        match self {
            ClientOutcome::Listed(result) => result.as_ref().err(),
            ClientOutcome::Fetched(result)
            | ClientOutcome::Created(result)
            | ClientOutcome::Updated(result) => result.as_ref().err(),
            ClientOutcome::Deleted(result) => result.as_ref().err(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientEvent {
    pub request: RequestId,
    pub outcome: ClientOutcome,
}
