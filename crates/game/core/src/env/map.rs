use crate::config::ConfigError;
use crate::state::Position;

/// Static maze oracle exposing immutable layout information.
pub trait MazeOracle: Send + Sync {
    fn level_count(&self) -> usize;

    fn dimensions(&self, level: u32) -> Option<MapDimensions>;

    /// False for unknown levels, out-of-bounds cells, and blocked cells.
    fn is_walkable(&self, position: Position) -> bool;

    fn contains(&self, position: Position) -> bool {
        self.dimensions(position.level)
            .is_some_and(|dimensions| dimensions.contains(position))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }
}

/// A single maze cell. Its only attribute is walkability.
///
/// Deserializes from `{ "walkable": bool }`, a bare boolean, or the integers
/// `0`/`1`; any other integer is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CellRepr"))]
pub struct Cell {
    pub walkable: bool,
}

impl Cell {
    pub const OPEN: Self = Self { walkable: true };
    pub const WALL: Self = Self { walkable: false };

    pub const fn new(walkable: bool) -> Self {
        Self { walkable }
    }

    /// Integer encoding used by textual level files.
    pub const fn to_bit(self) -> u8 {
        self.walkable as u8
    }

    pub const fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(Self::WALL),
            1 => Some(Self::OPEN),
            _ => None,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum CellRepr {
    Object { walkable: bool },
    Flag(bool),
    Bit(u64),
}

#[cfg(feature = "serde")]
impl TryFrom<CellRepr> for Cell {
    type Error = String;

    fn try_from(repr: CellRepr) -> Result<Self, Self::Error> {
        match repr {
            CellRepr::Object { walkable } | CellRepr::Flag(walkable) => Ok(Cell::new(walkable)),
            CellRepr::Bit(bit) => u8::try_from(bit)
                .ok()
                .and_then(Cell::from_bit)
                .ok_or_else(|| format!("cell value {bit} is not 0 or 1")),
        }
    }
}

/// One rectangular layer of the maze, stored row-major (`rows[y][x]`).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MazeLevel {
    rows: Vec<Vec<Cell>>,
}

impl MazeLevel {
    /// Builds a level, rejecting empty grids and jagged rows.
    pub fn from_rows(level: u32, rows: Vec<Vec<Cell>>) -> Result<Self, ConfigError> {
        let Some(first) = rows.first() else {
            return Err(ConfigError::EmptyLevel { level });
        };
        let width = first.len();
        if width == 0 {
            return Err(ConfigError::EmptyLevel { level });
        }
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(ConfigError::JaggedRow {
                level,
                row,
                expected: width,
                found: cells.len(),
            });
        }
        Ok(Self { rows })
    }

    /// Builds a level from `0`/`1` rows.
    pub fn from_bits(level: u32, bits: &[Vec<u8>]) -> Result<Self, ConfigError> {
        let mut rows = Vec::with_capacity(bits.len());
        for (y, row) in bits.iter().enumerate() {
            let cells = row
                .iter()
                .enumerate()
                .map(|(x, &bit)| {
                    Cell::from_bit(bit).ok_or(ConfigError::InvalidCell {
                        level,
                        x,
                        y,
                        value: bit,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(cells);
        }
        Self::from_rows(level, rows)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_bit()).collect())
            .collect()
    }

    pub fn dimensions(&self) -> MapDimensions {
        let height = self.rows.len() as u32;
        let width = self.rows.first().map_or(0, Vec::len) as u32;
        MapDimensions::new(width, height)
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.rows.get(y)?.get(x).copied()
    }
}

/// Ordered stack of maze levels addressed by index.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Maze {
    levels: Vec<MazeLevel>,
}

impl Maze {
    pub fn new(levels: Vec<MazeLevel>) -> Result<Self, ConfigError> {
        if levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        Ok(Self { levels })
    }

    pub fn levels(&self) -> &[MazeLevel] {
        &self.levels
    }

    pub fn level(&self, level: u32) -> Option<&MazeLevel> {
        self.levels.get(level as usize)
    }
}

impl MazeOracle for Maze {
    fn level_count(&self) -> usize {
        self.levels.len()
    }

    fn dimensions(&self, level: u32) -> Option<MapDimensions> {
        self.level(level).map(MazeLevel::dimensions)
    }

    fn is_walkable(&self, position: Position) -> bool {
        self.level(position.level)
            .and_then(|level| level.cell(position.x, position.y))
            .is_some_and(|cell| cell.walkable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(rows: &[&[u8]]) -> Vec<Vec<u8>> {
        rows.iter().map(|row| row.to_vec()).collect()
    }

    fn two_level_maze() -> Maze {
        let ground = MazeLevel::from_bits(0, &bits(&[&[1, 1, 0], &[1, 0, 1]])).unwrap();
        let upper = MazeLevel::from_bits(1, &bits(&[&[0, 1], &[1, 1], &[1, 1]])).unwrap();
        Maze::new(vec![ground, upper]).unwrap()
    }

    #[test]
    fn walkability_checks_every_bound() {
        let maze = two_level_maze();

        assert!(maze.is_walkable(Position::new(0, 0, 0)));
        assert!(!maze.is_walkable(Position::new(2, 0, 0)));
        assert!(!maze.is_walkable(Position::new(-1, 0, 0)));
        assert!(!maze.is_walkable(Position::new(0, -1, 0)));
        assert!(!maze.is_walkable(Position::new(3, 0, 0)));
        assert!(!maze.is_walkable(Position::new(0, 2, 0)));
        assert!(maze.is_walkable(Position::new(1, 2, 1)));
        assert!(!maze.is_walkable(Position::new(0, 0, 2)));
    }

    #[test]
    fn levels_have_independent_dimensions() {
        let maze = two_level_maze();
        assert_eq!(maze.dimensions(0), Some(MapDimensions::new(3, 2)));
        assert_eq!(maze.dimensions(1), Some(MapDimensions::new(2, 3)));
        assert_eq!(maze.dimensions(2), None);
        assert!(maze.contains(Position::new(1, 2, 1)));
        assert!(!maze.contains(Position::new(1, 2, 0)));
    }

    #[test]
    fn rejects_jagged_and_empty_levels() {
        let jagged = MazeLevel::from_bits(0, &bits(&[&[1, 1], &[1]]));
        assert_eq!(
            jagged,
            Err(ConfigError::JaggedRow {
                level: 0,
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            MazeLevel::from_rows(3, Vec::new()),
            Err(ConfigError::EmptyLevel { level: 3 })
        );
        assert_eq!(Maze::new(Vec::new()), Err(ConfigError::NoLevels));
    }

    #[test]
    fn bit_encoding_is_exact() {
        let source = bits(&[&[1, 0, 1], &[0, 1, 0]]);
        let level = MazeLevel::from_bits(0, &source).unwrap();
        assert_eq!(level.cell(0, 0), Some(Cell::OPEN));
        assert_eq!(level.cell(1, 0), Some(Cell::WALL));
        assert_eq!(level.to_bits(), source);

        let invalid = MazeLevel::from_bits(0, &bits(&[&[1, 2]]));
        assert_eq!(
            invalid,
            Err(ConfigError::InvalidCell {
                level: 0,
                x: 1,
                y: 0,
                value: 2
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn cells_accept_every_exchange_encoding() {
        let rows: Vec<Vec<Cell>> =
            serde_json::from_str(r#"[[{"walkable": true}, false, 1, 0]]"#).unwrap();
        assert_eq!(rows[0], vec![Cell::OPEN, Cell::WALL, Cell::OPEN, Cell::WALL]);

        assert!(serde_json::from_str::<Vec<Cell>>("[2]").is_err());

        let json = serde_json::to_string(&Cell::OPEN).unwrap();
        assert_eq!(json, r#"{"walkable":true}"#);
    }
}
