//! Maze configuration: the full description a session is reset from.
//!
//! Configurations arrive either nested (entity lists inside each level, with
//! implicit level indices) or flattened (top-level lists with explicit
//! `level` fields). Both forms may be mixed; [`MazeConfig::build`] merges them
//! and validates everything before any session state is replaced.
mod defaults;
mod error;

pub use error::{ConfigError, EntityKind};

use crate::env::{Cell, Maze, MazeLevel, MazeOracle};
use crate::state::{EntitiesState, GemCounts, GridPoint, Position, TeleportGate};

/// One level as exchanged in configuration documents.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LevelSpec {
    pub maze: Vec<Vec<Cell>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub blue_gems: Vec<GridPoint>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub red_gems: Vec<GridPoint>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub monsters: Vec<GridPoint>,
}

impl LevelSpec {
    pub fn new(maze: Vec<Vec<Cell>>) -> Self {
        Self {
            maze,
            ..Self::default()
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MazeConfig {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub title: Option<String>,
    pub levels: Vec<LevelSpec>,
    pub start: Position,
    pub exit: Position,
    #[cfg_attr(feature = "serde", serde(default))]
    pub teleport_gates: Vec<TeleportGate>,
    /// Flattened gem/monster placements carrying explicit levels.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub blue_gems: Vec<Position>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub red_gems: Vec<Position>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub monsters: Vec<Position>,
    /// Unset and zero both mean "no requirement".
    #[cfg_attr(feature = "serde", serde(default))]
    pub required_blue_gems: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub required_red_gems: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub auto_collect: bool,
}

/// Validated pieces of a configuration, ready to seed a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuiltConfig {
    pub maze: Maze,
    pub entities: EntitiesState,
    pub start: Position,
    pub exit: Position,
    pub required: GemCounts,
    pub auto_collect: bool,
}

impl MazeConfig {
    /// The built-in two-level sample maze.
    pub fn sample() -> Self {
        defaults::sample_maze()
    }

    /// Required gem quotas with unset values treated as zero.
    pub fn required(&self) -> GemCounts {
        GemCounts::new(
            self.required_blue_gems.unwrap_or(0),
            self.required_red_gems.unwrap_or(0),
        )
    }

    /// Validates the configuration without building anything else.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build().map(|_| ())
    }

    /// Validates geometry and placements and produces the session pieces.
    pub fn build(&self) -> Result<BuiltConfig, ConfigError> {
        let levels = self
            .levels
            .iter()
            .enumerate()
            .map(|(index, spec)| MazeLevel::from_rows(index as u32, spec.maze.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        let maze = Maze::new(levels)?;

        if !maze.contains(self.start) {
            return Err(ConfigError::StartOutOfRange {
                position: self.start,
            });
        }
        if !maze.contains(self.exit) {
            return Err(ConfigError::ExitOutOfRange {
                position: self.exit,
            });
        }

        let mut entities = EntitiesState::empty();
        for (index, spec) in self.levels.iter().enumerate() {
            let level = index as u32;
            let lift = |points: &[GridPoint]| -> Vec<Position> {
                points.iter().map(|point| point.on_level(level)).collect()
            };
            entities.blue_gems.extend(lift(&spec.blue_gems));
            entities.red_gems.extend(lift(&spec.red_gems));
            entities.monsters.extend(lift(&spec.monsters));
        }
        entities.blue_gems.extend(&self.blue_gems);
        entities.red_gems.extend(&self.red_gems);
        entities.monsters.extend(&self.monsters);
        entities.teleport_gates = self.teleport_gates.clone();

        check_in_range(&maze, EntityKind::BlueGem, &entities.blue_gems)?;
        check_in_range(&maze, EntityKind::RedGem, &entities.red_gems)?;
        check_in_range(&maze, EntityKind::Monster, &entities.monsters)?;
        let gate_ends: Vec<Position> = entities
            .teleport_gates
            .iter()
            .flat_map(TeleportGate::endpoints)
            .collect();
        check_in_range(&maze, EntityKind::TeleportGate, &gate_ends)?;

        Ok(BuiltConfig {
            maze,
            entities,
            start: self.start,
            exit: self.exit,
            required: self.required(),
            auto_collect: self.auto_collect,
        })
    }
}

fn check_in_range(
    maze: &Maze,
    kind: EntityKind,
    positions: &[Position],
) -> Result<(), ConfigError> {
    match positions.iter().find(|position| !maze.contains(**position)) {
        Some(&position) => Err(ConfigError::EntityOutOfRange { kind, position }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_level(width: usize, height: usize) -> LevelSpec {
        LevelSpec::new(vec![vec![Cell::OPEN; width]; height])
    }

    fn single_level() -> MazeConfig {
        MazeConfig {
            levels: vec![open_level(3, 3)],
            start: Position::new(0, 0, 0),
            exit: Position::new(2, 2, 0),
            ..MazeConfig::default()
        }
    }

    #[test]
    fn sample_maze_is_valid() {
        let built = MazeConfig::sample().build().unwrap();
        assert_eq!(built.maze.level_count(), 2);
        assert_eq!(built.entities.blue_gems.len(), 4);
        assert_eq!(built.entities.teleport_gates.len(), 1);
        assert_eq!(built.required, GemCounts::new(4, 4));
    }

    #[test]
    fn nested_and_flattened_entities_merge() {
        let mut config = MazeConfig {
            levels: vec![open_level(3, 3), open_level(2, 2)],
            ..single_level()
        };
        config.levels[1].blue_gems.push(GridPoint::new(1, 1));
        config.blue_gems.push(Position::new(2, 0, 0));
        config.monsters.push(Position::new(0, 1, 1));

        let built = config.build().unwrap();
        assert_eq!(
            built.entities.blue_gems,
            vec![Position::new(1, 1, 1), Position::new(2, 0, 0)]
        );
        assert_eq!(built.entities.monsters, vec![Position::new(0, 1, 1)]);
    }

    #[test]
    fn missing_levels_are_rejected() {
        let config = MazeConfig {
            levels: Vec::new(),
            ..single_level()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoLevels));
    }

    #[test]
    fn jagged_rows_are_rejected() {
        let mut config = single_level();
        config.levels[0].maze[1].pop();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::JaggedRow { level: 0, row: 1, .. })
        ));
    }

    #[test]
    fn start_and_exit_must_be_inside_the_maze() {
        let config = MazeConfig {
            start: Position::new(0, 0, 1),
            ..single_level()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StartOutOfRange { .. })
        ));

        let config = MazeConfig {
            exit: Position::new(3, 0, 0),
            ..single_level()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ExitOutOfRange { .. })
        ));
    }

    #[test]
    fn gate_endpoints_must_be_inside_the_maze() {
        let mut config = single_level();
        config.teleport_gates.push(TeleportGate::new(
            Position::new(0, 2, 0),
            Position::new(0, 0, 4),
        ));
        assert_eq!(
            config.validate(),
            Err(ConfigError::EntityOutOfRange {
                kind: EntityKind::TeleportGate,
                position: Position::new(0, 0, 4),
            })
        );
    }

    #[test]
    fn unset_requirements_mean_zero() {
        let mut config = single_level();
        assert_eq!(config.required(), GemCounts::ZERO);
        config.required_red_gems = Some(2);
        assert_eq!(config.required(), GemCounts::new(0, 2));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parses_exchange_document() {
        let json = r#"{
            "title": "demo",
            "levels": [{
                "maze": [[1, 1], [0, 1]],
                "blueGems": [{"x": 1, "y": 0}],
                "monsters": [{"x": 1, "y": 1}]
            }],
            "start": {"x": 0, "y": 0, "level": 0},
            "exit": {"x": 1, "y": 1, "level": 0},
            "teleportGates": [[{"x": 0, "y": 0, "level": 0}, {"x": 1, "y": 0, "level": 0}]],
            "requiredBlueGems": 1,
            "autoCollect": true
        }"#;

        let config: MazeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.title.as_deref(), Some("demo"));
        assert!(config.auto_collect);
        assert_eq!(config.required(), GemCounts::new(1, 0));

        let built = config.build().unwrap();
        assert_eq!(built.entities.blue_gems, vec![Position::new(1, 0, 0)]);
        assert_eq!(
            built.entities.find_teleport_target(Position::new(1, 0, 0)),
            Some(Position::new(0, 0, 0))
        );
    }
}
