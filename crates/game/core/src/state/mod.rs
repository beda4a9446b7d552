//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the maze, placed
//! entities, and the player. Runtime layers clone or query this state but
//! mutate it exclusively through the engine.
mod snapshot;
pub mod types;

pub use snapshot::{SnapshotTag, StateSnapshot};
pub use types::{
    EntitiesState, ExitState, GameStatus, GemColor, GemCounts, GridPoint, PlayerState, Position,
    TeleportGate,
};

use crate::config::{BuiltConfig, ConfigError, MazeConfig};
use crate::env::Maze;

/// The single mutable aggregate of one game session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub maze: Maze,
    pub entities: EntitiesState,
    pub player: PlayerState,
    pub exit: ExitState,
    pub required: GemCounts,
    pub auto_collect: bool,
    pub status: GameStatus,
    /// Destination of an armed teleport that has not completed yet.
    pub pending_teleport: Option<Position>,
    /// Number of actions applied since the last reset.
    pub nonce: u64,
}

impl GameState {
    /// Builds a fresh state from a validated configuration.
    pub fn from_config(config: &MazeConfig) -> Result<Self, ConfigError> {
        config.build().map(Self::from_built)
    }

    pub fn from_built(built: BuiltConfig) -> Self {
        let mut player = PlayerState::spawn(built.start);
        player.standing_on = built.entities.find_gem_at(built.start);

        let mut exit = ExitState::new(built.exit);
        exit.refresh(&player.collected, &built.required);

        Self {
            maze: built.maze,
            entities: built.entities,
            player,
            exit,
            required: built.required,
            auto_collect: built.auto_collect,
            status: GameStatus::Active,
            pending_teleport: None,
            nonce: 0,
        }
    }

    pub fn current_level(&self) -> u32 {
        self.player.position.level
    }

    pub fn is_teleport_pending(&self) -> bool {
        self.pending_teleport.is_some()
    }

    /// Copies the observable state into an immutable snapshot.
    pub fn snapshot(&self, tag: SnapshotTag) -> StateSnapshot {
        StateSnapshot::capture(self, tag)
    }
}
