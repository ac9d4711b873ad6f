//! Unified error types surfaced by the runtime API.
//!
//! Wraps engine contract violations, worker coordination failures and
//! decision provider failures so clients can bubble them up with one type.

use battle_core::BattleError;
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error("decision provider not set")]
    ProviderNotSet,

    #[error("scripted provider ran out of decisions at ally #{actor}")]
    ProviderExhausted { actor: usize },

    #[error("no legal action offered to ally #{actor}")]
    NoLegalAction { actor: usize },

    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}
