//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! driving the session or streaming events from specific topics.
use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{Action, ActionOutcome, MazeConfig, StateSnapshot};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::pacing::Speed;
use crate::workers::Command;

/// Result of one applied action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReply {
    pub outcome: ActionOutcome,
    /// State right after the action. A teleport armed by this action has not
    /// landed yet.
    pub snapshot: StateSnapshot,
    /// Pause observed before the reply is handed to the caller.
    pub pacing: Duration,
}

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Replace the session from `config`.
    ///
    /// The configuration is validated first; on failure the live session is
    /// untouched. A valid configuration is also persisted.
    pub async fn reset(&self, config: MazeConfig) -> Result<StateSnapshot> {
        self.request(|reply| Command::Reset {
            config: Some(config),
            reply,
        })
        .await?
    }

    /// Restart from the last applied configuration.
    pub async fn restart(&self) -> Result<StateSnapshot> {
        self.request(|reply| Command::Reset {
            config: None,
            reply,
        })
        .await?
    }

    /// Apply one action and wait out its pacing delay.
    ///
    /// If a teleport is pending, the action is held by the session until the
    /// player has arrived. Other handles are never blocked by the pacing
    /// delay.
    pub async fn apply_action(&self, action: Action) -> Result<ActionReply> {
        let reply = self
            .request(|reply| Command::ApplyAction { action, reply })
            .await?;
        if !reply.pacing.is_zero() {
            tokio::time::sleep(reply.pacing).await;
        }
        Ok(reply)
    }

    /// Query the current state (read-only snapshot)
    pub async fn query_state(&self) -> Result<StateSnapshot> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// The configuration the current session was built from.
    pub async fn current_config(&self) -> Result<MazeConfig> {
        self.request(|reply| Command::QueryConfig { reply }).await
    }

    /// Change the speed used for subsequent pacing and teleport delays.
    pub async fn set_speed(&self, speed: Speed) -> Result<()> {
        self.request(|reply| Command::SetSpeed { speed, reply })
            .await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::GameState` - Snapshots after resets, actions, and teleports
    /// - `Topic::Notification` - Toasts and audio cues
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
