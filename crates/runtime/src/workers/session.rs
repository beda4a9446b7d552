//! Session worker that owns the authoritative [`game_core::GameState`].
//!
//! Receives commands from [`crate::RuntimeHandle`], applies actions through
//! [`game_core::GameEngine`], and publishes snapshots and notifications on the
//! [`EventBus`]. A teleport armed by an action completes on a deadline inside
//! the same loop, so no mutation ever races another. Actions that arrive while
//! a teleport is pending are held and applied, in arrival order, once it
//! lands.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, warn};

use game_core::{Action, GameEngine, GameState, MazeConfig, SnapshotTag, StateSnapshot};

use crate::api::{ActionReply, Result, RuntimeError};
use crate::events::{AudioCue, EventBus, GameStateEvent, NotificationEvent, ToastLevel};
use crate::pacing::{PacingConfig, Speed};
use crate::repository::ConfigRepository;

/// Commands that can be sent to the session worker
pub enum Command {
    /// Replace the session from `config`, or from the last applied
    /// configuration when `None`.
    Reset {
        config: Option<MazeConfig>,
        reply: oneshot::Sender<Result<StateSnapshot>>,
    },
    /// Apply one player action. Held while a teleport is pending.
    ApplyAction {
        action: Action,
        reply: oneshot::Sender<ActionReply>,
    },
    /// Query the current state (read-only).
    QueryState {
        reply: oneshot::Sender<StateSnapshot>,
    },
    /// The configuration the current session was built from.
    QueryConfig {
        reply: oneshot::Sender<MazeConfig>,
    },
    SetSpeed {
        speed: Speed,
        reply: oneshot::Sender<()>,
    },
}

type HeldAction = (Action, oneshot::Sender<ActionReply>);

/// Background task that processes session commands.
pub struct SessionWorker {
    state: GameState,
    last_config: MazeConfig,
    pacing: PacingConfig,
    speed: Speed,
    teleport_deadline: Option<Instant>,
    held: VecDeque<HeldAction>,
    /// Tag of the most recent mutation, reused for queried snapshots.
    last_tag: SnapshotTag,
    repository: Arc<dyn ConfigRepository>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl SessionWorker {
    /// Creates a new session worker.
    pub fn new(
        state: GameState,
        last_config: MazeConfig,
        pacing: PacingConfig,
        speed: Speed,
        repository: Arc<dyn ConfigRepository>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            state,
            last_config,
            pacing,
            speed,
            teleport_deadline: None,
            held: VecDeque::new(),
            last_tag: SnapshotTag::Reset,
            repository,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                biased;
                _ = teleport_due(self.teleport_deadline) => {
                    self.complete_teleport();
                }
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
            }
        }
        debug!(target: "runtime::session", "command channel closed, session worker stopping");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Reset { config, reply } => {
                let result = self.reset(config);
                let _ = reply.send(result);
                self.release_held();
            }
            Command::ApplyAction { action, reply } => {
                if self.state.is_teleport_pending() {
                    debug!(target: "runtime::session", ?action, "holding action until teleport completes");
                    self.held.push_back((action, reply));
                } else {
                    self.respond(action, reply);
                }
            }
            Command::QueryState { reply } => {
                let _ = reply.send(self.state.snapshot(self.last_tag));
            }
            Command::QueryConfig { reply } => {
                let _ = reply.send(self.last_config.clone());
            }
            Command::SetSpeed { speed, reply } => {
                info!(target: "runtime::session", %speed, "speed changed");
                self.speed = speed;
                let _ = reply.send(());
            }
        }
    }

    /// Applies `action`, replies, and lands a teleport armed with no delay.
    fn respond(&mut self, action: Action, reply: oneshot::Sender<ActionReply>) {
        let result = self.apply_action(action);
        let _ = reply.send(result);

        if self
            .teleport_deadline
            .is_some_and(|deadline| deadline <= Instant::now())
        {
            self.complete_teleport();
        }
    }

    fn apply_action(&mut self, action: Action) -> ActionReply {
        let was_over = self.state.status.is_over();
        let outcome = GameEngine::new(&mut self.state).execute(action);
        let snapshot = self.state.snapshot(SnapshotTag::Action(action));
        let pacing = self.pacing.response_delay(action, self.speed);

        debug!(
            target: "runtime::session",
            ?action,
            success = outcome.success,
            message = outcome.message.as_deref().unwrap_or(""),
            "applied action"
        );

        if was_over {
            return ActionReply {
                outcome,
                snapshot,
                pacing,
            };
        }

        self.last_tag = SnapshotTag::Action(action);
        if outcome.teleport_armed {
            let delay = self.pacing.teleport_delay(self.speed);
            debug!(target: "runtime::session", ?delay, "teleport armed");
            self.teleport_deadline = Some(Instant::now() + delay);
        }
        if self.state.status.is_over() {
            info!(
                target: "runtime::session",
                success = self.state.status.is_success(),
                nonce = self.state.nonce,
                "game over"
            );
        }

        self.event_bus.publish(GameStateEvent::ActionApplied {
            action,
            outcome: outcome.clone(),
            snapshot: Box::new(snapshot.clone()),
        });
        for notification in NotificationEvent::for_outcome(action, &outcome) {
            self.event_bus.publish(notification);
        }

        ActionReply {
            outcome,
            snapshot,
            pacing,
        }
    }

    fn complete_teleport(&mut self) {
        self.teleport_deadline = None;
        let Some(destination) = GameEngine::new(&mut self.state).complete_teleport() else {
            return;
        };
        info!(target: "runtime::session", %destination, "teleport completed");

        self.last_tag = SnapshotTag::Teleport;
        let snapshot = self.state.snapshot(self.last_tag);
        self.event_bus.publish(NotificationEvent::Audio(AudioCue::Teleport));
        self.event_bus.publish(GameStateEvent::TeleportCompleted {
            destination,
            snapshot: Box::new(snapshot),
        });

        self.release_held();
    }

    /// Applies held actions in order until one arms a new teleport.
    fn release_held(&mut self) {
        while !self.state.is_teleport_pending() {
            let Some((action, reply)) = self.held.pop_front() else {
                break;
            };
            self.respond(action, reply);
        }
    }

    fn reset(&mut self, config: Option<MazeConfig>) -> Result<StateSnapshot> {
        let supplied = config.is_some();
        let config = config.unwrap_or_else(|| self.last_config.clone());

        let state = GameState::from_config(&config).map_err(|error| {
            warn!(target: "runtime::session", %error, "rejected maze configuration");
            RuntimeError::InvalidConfig(error)
        })?;

        if let Some(target) = GameEngine::new(&mut self.state).cancel_teleport() {
            debug!(target: "runtime::session", %target, "reset cancelled pending teleport");
        }
        self.state = state;
        self.teleport_deadline = None;

        if supplied {
            self.persist(&config);
        }
        self.last_config = config;

        info!(
            target: "runtime::session",
            title = self.last_config.title.as_deref().unwrap_or("untitled"),
            levels = self.state.maze.levels().len(),
            "session reset"
        );

        self.last_tag = SnapshotTag::Reset;
        let snapshot = self.state.snapshot(self.last_tag);
        self.event_bus.publish(GameStateEvent::Reset {
            snapshot: Box::new(snapshot.clone()),
        });
        self.event_bus
            .publish(NotificationEvent::Audio(AudioCue::BackgroundMusic));
        Ok(snapshot)
    }

    /// Saves an explicitly supplied configuration. Failures never touch the
    /// session; they are logged and surfaced as an error toast.
    fn persist(&self, config: &MazeConfig) {
        if let Err(error) = self.repository.save(config) {
            warn!(target: "runtime::session", %error, "failed to save maze configuration");
            self.event_bus.publish(NotificationEvent::Toast {
                message: format!("Could not save the maze: {error}"),
                level: ToastLevel::Error,
            });
        }
    }
}

/// Resolves at `deadline`, or never when nothing is scheduled.
async fn teleport_due(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
