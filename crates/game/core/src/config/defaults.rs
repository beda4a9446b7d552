//! Built-in sample maze used when no configuration has been supplied.

use super::{LevelSpec, MazeConfig};
use crate::env::Cell;
use crate::state::{GridPoint, Position, TeleportGate};

fn rows(bits: [[u8; 5]; 5]) -> Vec<Vec<Cell>> {
    bits.iter()
        .map(|row| row.iter().map(|&bit| Cell::new(bit == 1)).collect())
        .collect()
}

fn points(coords: &[(i32, i32)]) -> Vec<GridPoint> {
    coords.iter().map(|&(x, y)| GridPoint::new(x, y)).collect()
}

pub(super) fn sample_maze() -> MazeConfig {
    let ground = LevelSpec {
        maze: rows([
            [1, 1, 1, 1, 1],
            [1, 0, 1, 0, 1],
            [1, 1, 1, 1, 1],
            [1, 0, 1, 0, 1],
            [1, 1, 1, 1, 1],
        ]),
        blue_gems: points(&[(2, 2), (0, 4)]),
        red_gems: points(&[(2, 0), (4, 4)]),
        monsters: points(&[(2, 1), (2, 3)]),
    };
    let upper = LevelSpec {
        maze: rows([
            [1, 1, 1, 1, 1],
            [0, 1, 1, 1, 1],
            [1, 1, 1, 1, 1],
            [1, 1, 1, 1, 1],
            [1, 1, 1, 1, 1],
        ]),
        blue_gems: points(&[(1, 1), (3, 3)]),
        red_gems: points(&[(1, 3), (3, 1)]),
        monsters: points(&[(2, 2)]),
    };

    MazeConfig {
        title: Some("Sample maze".to_string()),
        levels: vec![ground, upper],
        start: Position::new(0, 0, 0),
        exit: Position::new(4, 2, 1),
        teleport_gates: vec![TeleportGate::new(
            Position::new(4, 0, 0),
            Position::new(0, 2, 1),
        )],
        required_blue_gems: Some(4),
        required_red_gems: Some(4),
        auto_collect: false,
        ..MazeConfig::default()
    }
}
