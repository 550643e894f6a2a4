//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and content loading so clients
//! can bubble them up with consistent context. Gameplay outcomes such as a
//! blocked move are never errors.
use thiserror::Error;
use tokio::sync::oneshot;

use super::player::PlayerId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{player} does not name a player slot")]
    UnknownPlayer { player: PlayerId },

    #[error("{player} already has {limit} queued moves")]
    QueueFull { player: PlayerId, limit: usize },

    #[error("zone worker command channel closed")]
    CommandChannelClosed,

    #[error("zone worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("zone worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("failed to load zone content: {0:#}")]
    Content(anyhow::Error),
}
