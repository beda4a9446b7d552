//! Configuration validation errors.

use crate::error::GameError;
use crate::state::Position;

/// Kind of placed entity, used to pinpoint invalid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    BlueGem,
    RedGem,
    Monster,
    TeleportGate,
}

/// Reasons a maze configuration is rejected at reset time.
///
/// A rejected configuration never touches the live session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("configuration has no levels")]
    NoLevels,

    #[error("level {level} has no cells")]
    EmptyLevel { level: u32 },

    #[error("level {level} row {row} has {found} cells, expected {expected}")]
    JaggedRow {
        level: u32,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("level {level} cell ({x}, {y}) has value {value}, expected 0 or 1")]
    InvalidCell {
        level: u32,
        x: usize,
        y: usize,
        value: u8,
    },

    #[error("start {position} is outside the maze")]
    StartOutOfRange { position: Position },

    #[error("exit {position} is outside the maze")]
    ExitOutOfRange { position: Position },

    #[error("{kind} at {position} is outside the maze")]
    EntityOutOfRange { kind: EntityKind, position: Position },
}

impl GameError for ConfigError {
    fn error_code(&self) -> &'static str {
        use ConfigError::*;
        match self {
            NoLevels => "CONFIG_NO_LEVELS",
            EmptyLevel { .. } => "CONFIG_EMPTY_LEVEL",
            JaggedRow { .. } => "CONFIG_JAGGED_ROW",
            InvalidCell { .. } => "CONFIG_INVALID_CELL",
            StartOutOfRange { .. } => "CONFIG_START_OUT_OF_RANGE",
            ExitOutOfRange { .. } => "CONFIG_EXIT_OUT_OF_RANGE",
            EntityOutOfRange { .. } => "CONFIG_ENTITY_OUT_OF_RANGE",
        }
    }
}
