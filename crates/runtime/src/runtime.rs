//! High-level runtime orchestrator.
//!
//! The runtime owns the session worker, wires up command/event channels, and
//! exposes a builder-based API for clients to drive a maze session.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use game_core::{GameState, MazeConfig};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::pacing::{PacingConfig, Speed};
use crate::repository::{ConfigRepository, InMemoryConfigRepository};
use crate::workers::{Command, SessionWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    pub pacing: PacingConfig,
    pub initial_speed: Speed,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 100,
            command_buffer_size: 32,
            pacing: PacingConfig::default(),
            initial_speed: Speed::default(),
        }
    }
}

/// Main runtime that hosts one maze session.
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    session_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once every outstanding handle clone is dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.session_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    initial_config: Option<MazeConfig>,
    repository: Option<Arc<dyn ConfigRepository>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            initial_config: None,
            repository: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from this maze instead of the persisted or sample one.
    pub fn initial_config(mut self, config: MazeConfig) -> Self {
        self.initial_config = Some(config);
        self
    }

    /// Storage for explicitly applied configurations.
    ///
    /// Defaults to an in-memory repository.
    pub fn repository(mut self, repository: impl ConfigRepository + 'static) -> Self {
        self.repository = Some(Arc::new(repository));
        self
    }

    /// Build the runtime
    ///
    /// The starting maze is the explicit initial configuration if one was
    /// given, else the persisted one, else the built-in sample. An unreadable
    /// or invalid persisted configuration falls back to the sample.
    pub async fn build(self) -> Result<Runtime> {
        let repository = self
            .repository
            .unwrap_or_else(|| Arc::new(InMemoryConfigRepository::new()));

        let (config, state) = match self.initial_config {
            Some(config) => {
                let state = GameState::from_config(&config)?;
                (config, state)
            }
            None => restore_or_sample(repository.as_ref())?,
        };

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let session_worker = SessionWorker::new(
            state,
            config,
            self.config.pacing,
            self.config.initial_speed,
            repository,
            command_rx,
            event_bus,
        );

        let session_worker_handle = tokio::spawn(async move {
            session_worker.run().await;
        });

        Ok(Runtime {
            handle,
            session_worker_handle,
        })
    }
}

fn restore_or_sample(repository: &dyn ConfigRepository) -> Result<(MazeConfig, GameState)> {
    match repository.load() {
        Ok(Some(config)) => match GameState::from_config(&config) {
            Ok(state) => {
                info!(target: "runtime", "restored persisted maze configuration");
                return Ok((config, state));
            }
            Err(error) => {
                warn!(target: "runtime", %error, "persisted maze configuration is invalid, using sample");
            }
        },
        Ok(None) => {}
        Err(error) => {
            warn!(target: "runtime", %error, "failed to load persisted maze configuration, using sample");
        }
    }

    let config = MazeConfig::sample();
    let state = GameState::from_config(&config)?;
    Ok((config, state))
}
