//! Session runtime for the maze game.
//!
//! This crate wires the pure rules from `game-core` into an async session: a
//! single worker task owns the live [`game_core::GameState`], clients talk to
//! it through a cloneable [`RuntimeHandle`], and observers subscribe to state
//! snapshots and notifications on an [`EventBus`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`pacing`] holds speed scaling for response and teleport delays
//! - [`repository`] persists the last applied configuration
//! - `workers` keeps the session task internal to the crate
pub mod api;
pub mod events;
pub mod pacing;
pub mod repository;
pub mod runtime;

mod workers;

pub use api::{ActionReply, Result, RuntimeError, RuntimeHandle};
pub use events::{
    AudioCue, Event, EventBus, GameStateEvent, NotificationEvent, ToastLevel, Topic,
};
pub use pacing::{PacingConfig, Speed};
pub use repository::{
    ConfigRepository, FileConfigRepository, InMemoryConfigRepository, RepositoryError,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
