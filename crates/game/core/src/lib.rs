//! Deterministic maze rules and data types shared across crates.
//!
//! `game-core` defines the canonical rules (actions, engine, game state) and
//! exposes pure APIs that can be reused by the runtime, content tooling, and
//! tests. All state mutation flows through [`engine::GameEngine`], and
//! supporting crates depend on the types re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    Action, ActionOutcome, ActionTransition, CollectAction, Direction, ForwardAction, Rotation,
    TurnAction,
};
pub use config::{BuiltConfig, ConfigError, EntityKind, LevelSpec, MazeConfig};
pub use engine::GameEngine;
pub use env::{Cell, MapDimensions, Maze, MazeLevel, MazeOracle};
pub use error::GameError;
pub use state::{
    EntitiesState, ExitState, GameState, GameStatus, GemColor, GemCounts, GridPoint, PlayerState,
    Position, SnapshotTag, StateSnapshot, TeleportGate,
};
