use crate::action::{Action, Direction};
use crate::env::Cell;

use super::{GameState, GemColor, GemCounts, Position, TeleportGate};

/// What produced a snapshot. Presentation only; never feeds back into rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SnapshotTag {
    Reset,
    Action(Action),
    Teleport,
}

/// Immutable copy of everything an observer may render.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StateSnapshot {
    pub action: SnapshotTag,
    pub level: u32,
    pub level_count: u32,
    /// Cells of the player's current level only.
    pub maze: Vec<Vec<Cell>>,
    pub player: Position,
    pub direction: Direction,
    pub blue_gems: Vec<Position>,
    pub red_gems: Vec<Position>,
    pub monsters: Vec<Position>,
    pub teleport_gates: Vec<TeleportGate>,
    pub collected: GemCounts,
    pub required: GemCounts,
    pub exit: Position,
    pub exit_open: bool,
    pub game_over: bool,
    pub success: bool,
    pub auto_collect: bool,
    pub on_gem_type: Option<GemColor>,
    pub teleport_pending: bool,
    pub nonce: u64,
}

impl StateSnapshot {
    pub(super) fn capture(state: &GameState, tag: SnapshotTag) -> Self {
        let level = state.current_level();
        let maze = state
            .maze
            .level(level)
            .map(|grid| grid.rows().to_vec())
            .unwrap_or_default();

        Self {
            action: tag,
            level,
            level_count: state.maze.levels().len() as u32,
            maze,
            player: state.player.position,
            direction: state.player.direction,
            blue_gems: state.entities.blue_gems.clone(),
            red_gems: state.entities.red_gems.clone(),
            monsters: state.entities.monsters.clone(),
            teleport_gates: state.entities.teleport_gates.clone(),
            collected: state.player.collected,
            required: state.required,
            exit: state.exit.position,
            exit_open: state.exit.open,
            game_over: state.status.is_over(),
            success: state.status.is_success(),
            auto_collect: state.auto_collect,
            on_gem_type: state.player.standing_on,
            teleport_pending: state.is_teleport_pending(),
            nonce: state.nonce,
        }
    }
}
