//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, configuration validation, and
//! repositories so clients can bubble them up with consistent context.
//! Rule outcomes (walls, missing gems, finished games) are never errors.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{ConfigError, GameError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("invalid maze configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    /// Stable code for logs and client branching.
    pub fn code(&self) -> &'static str {
        match self {
            RuntimeError::CommandChannelClosed => "RUNTIME_COMMAND_CHANNEL_CLOSED",
            RuntimeError::ReplyChannelClosed(_) => "RUNTIME_REPLY_CHANNEL_CLOSED",
            RuntimeError::WorkerJoin(_) => "RUNTIME_WORKER_JOIN",
            RuntimeError::InvalidConfig(error) => error.error_code(),
            RuntimeError::Repository(_) => "RUNTIME_REPOSITORY",
        }
    }
}
