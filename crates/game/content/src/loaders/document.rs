//! On-disk level document.
//!
//! Level files store each row of a maze as integers (`1` walkable, `0` wall).
//! Booleans are accepted as well. Older single-level files put `maze` at the
//! top level and omit `levels`; such a document loads as one level.

use game_core::{Cell, GridPoint, LevelSpec, MazeConfig, Position, TeleportGate};
use serde::{Deserialize, Serialize};

/// A cell value that is neither `0`, `1`, nor a boolean.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("level {level} row {row} column {column}: cell value {value} is not 0 or 1")]
pub struct CellEncodingError {
    pub level: usize,
    pub row: usize,
    pub column: usize,
    pub value: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum RawCell {
    Flag(bool),
    Bit(i64),
}

impl From<Cell> for RawCell {
    fn from(cell: Cell) -> Self {
        RawCell::Bit(i64::from(cell.to_bit()))
    }
}

/// Level entry of a [`LevelDocument`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelRecord {
    maze: Vec<Vec<RawCell>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    blue_gems: Vec<GridPoint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    red_gems: Vec<GridPoint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    monsters: Vec<GridPoint>,
}

/// Serialized form of a maze configuration in level files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub start: Position,
    pub exit: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_blue_gems: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_red_gems: Option<u32>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub auto_collect: bool,
    /// Single-level layout used when `levels` is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    maze: Option<Vec<Vec<RawCell>>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    blue_gems: Vec<Position>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    red_gems: Vec<Position>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    monsters: Vec<Position>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    teleport_gates: Vec<TeleportGate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    levels: Vec<LevelRecord>,
}

impl LevelDocument {
    /// Encodes a configuration with 0/1 cell rows.
    pub fn from_config(config: &MazeConfig) -> Self {
        let levels = config
            .levels
            .iter()
            .map(|level| LevelRecord {
                maze: encode_rows(&level.maze),
                blue_gems: level.blue_gems.clone(),
                red_gems: level.red_gems.clone(),
                monsters: level.monsters.clone(),
            })
            .collect();

        Self {
            title: config.title.clone(),
            start: config.start,
            exit: config.exit,
            required_blue_gems: config.required_blue_gems,
            required_red_gems: config.required_red_gems,
            auto_collect: config.auto_collect,
            maze: None,
            blue_gems: config.blue_gems.clone(),
            red_gems: config.red_gems.clone(),
            monsters: config.monsters.clone(),
            teleport_gates: config.teleport_gates.clone(),
            levels,
        }
    }

    /// Decodes cell rows into a configuration. Structural checks are left to
    /// [`MazeConfig::build`].
    pub fn into_config(self) -> Result<MazeConfig, CellEncodingError> {
        let mut levels = Vec::with_capacity(self.levels.len().max(1));
        if self.levels.is_empty() {
            if let Some(rows) = &self.maze {
                levels.push(LevelSpec::new(decode_rows(0, rows)?));
            }
        } else {
            if self.maze.is_some() {
                tracing::warn!("level document has both `maze` and `levels`; using `levels`");
            }
            for (index, record) in self.levels.iter().enumerate() {
                levels.push(LevelSpec {
                    maze: decode_rows(index, &record.maze)?,
                    blue_gems: record.blue_gems.clone(),
                    red_gems: record.red_gems.clone(),
                    monsters: record.monsters.clone(),
                });
            }
        }

        Ok(MazeConfig {
            title: self.title,
            levels,
            start: self.start,
            exit: self.exit,
            teleport_gates: self.teleport_gates,
            blue_gems: self.blue_gems,
            red_gems: self.red_gems,
            monsters: self.monsters,
            required_blue_gems: self.required_blue_gems,
            required_red_gems: self.required_red_gems,
            auto_collect: self.auto_collect,
        })
    }
}

fn encode_rows(rows: &[Vec<Cell>]) -> Vec<Vec<RawCell>> {
    rows.iter()
        .map(|row| row.iter().copied().map(RawCell::from).collect())
        .collect()
}

fn decode_rows(level: usize, rows: &[Vec<RawCell>]) -> Result<Vec<Vec<Cell>>, CellEncodingError> {
    rows.iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(column, raw)| match *raw {
                    RawCell::Flag(walkable) => Ok(Cell::new(walkable)),
                    RawCell::Bit(0) => Ok(Cell::WALL),
                    RawCell::Bit(1) => Ok(Cell::OPEN),
                    RawCell::Bit(value) => Err(CellEncodingError {
                        level,
                        row,
                        column,
                        value,
                    }),
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_LEVELS: &str = r#"
title = "Two floors"
requiredBlueGems = 1
start = { x = 0, y = 0, level = 0 }
exit = { x = 1, y = 1, level = 1 }
teleportGates = [[{ x = 1, y = 0, level = 0 }, { x = 0, y = 0, level = 1 }]]

[[levels]]
maze = [[1, 1], [0, 1]]
blueGems = [{ x = 1, y = 1 }]

[[levels]]
maze = [[1, 0], [1, 1]]
monsters = [{ x = 0, y = 1 }]
"#;

    #[test]
    fn decodes_nested_levels() {
        let document: LevelDocument = toml::from_str(TWO_LEVELS).unwrap();
        let config = document.into_config().unwrap();

        assert_eq!(config.title.as_deref(), Some("Two floors"));
        assert_eq!(config.levels.len(), 2);
        assert_eq!(config.levels[0].maze[1][0], Cell::WALL);
        assert_eq!(config.levels[1].monsters, vec![GridPoint::new(0, 1)]);

        let built = config.build().unwrap();
        assert_eq!(built.entities.blue_gems, vec![Position::new(1, 1, 0)]);
        assert_eq!(built.entities.monsters, vec![Position::new(0, 1, 1)]);
    }

    #[test]
    fn legacy_single_level_uses_boolean_rows() {
        let source = r#"
title = "Legacy"
maze = [[true, true], [false, true]]
start = { x = 0, y = 0 }
exit = { x = 1, y = 1 }
blueGems = [{ x = 1, y = 0 }]
requiredBlueGems = 1
requiredRedGems = 0
"#;
        let config = toml::from_str::<LevelDocument>(source)
            .unwrap()
            .into_config()
            .unwrap();

        assert_eq!(config.levels.len(), 1);
        assert_eq!(config.blue_gems, vec![Position::new(1, 0, 0)]);
        assert!(config.build().is_ok());
    }

    #[test]
    fn rejects_cells_other_than_zero_or_one() {
        let source = r#"
start = { x = 0, y = 0 }
exit = { x = 0, y = 0 }

[[levels]]
maze = [[1, 1], [1, 2]]
"#;
        let error = toml::from_str::<LevelDocument>(source)
            .unwrap()
            .into_config()
            .unwrap_err();
        assert_eq!(
            error,
            CellEncodingError {
                level: 0,
                row: 1,
                column: 1,
                value: 2,
            }
        );
    }

    #[test]
    fn encodes_cells_as_bits() {
        let document = LevelDocument::from_config(&MazeConfig::sample());
        let text = toml::to_string(&document).unwrap();
        assert!(text.contains("[[levels]]"));
        assert!(!text.contains("true"));

        let restored = toml::from_str::<LevelDocument>(&text)
            .unwrap()
            .into_config()
            .unwrap();
        assert_eq!(restored, MazeConfig::sample());
    }
}
