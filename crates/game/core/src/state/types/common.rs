use std::fmt;

use strum::IntoEnumIterator;

/// Discrete maze coordinate: column, row, and stacked level index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub level: u32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0, level: 0 };

    pub const fn new(x: i32, y: i32, level: u32) -> Self {
        Self { x, y, level }
    }

    /// Returns the neighbouring coordinate offset by `(dx, dy)` on the same level.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            level: self.level,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})@L{}", self.x, self.y, self.level)
    }
}

/// Level-local coordinate used by per-level entity lists in level files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Lifts the point onto the given level.
    pub const fn on_level(self, level: u32) -> Position {
        Position::new(self.x, self.y, level)
    }
}

impl From<Position> for GridPoint {
    fn from(position: Position) -> Self {
        Self::new(position.x, position.y)
    }
}

/// Gem colors tracked by counters and quotas.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GemColor {
    Blue,
    Red,
}

/// Per-color gem tally, used both for collected counters and required quotas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GemCounts {
    pub blue: u32,
    pub red: u32,
}

impl GemCounts {
    pub const ZERO: Self = Self { blue: 0, red: 0 };

    pub const fn new(blue: u32, red: u32) -> Self {
        Self { blue, red }
    }

    pub fn get(&self, color: GemColor) -> u32 {
        match color {
            GemColor::Blue => self.blue,
            GemColor::Red => self.red,
        }
    }

    pub fn increment(&mut self, color: GemColor) {
        match color {
            GemColor::Blue => self.blue += 1,
            GemColor::Red => self.red += 1,
        }
    }

    /// True when every color meets the corresponding quota.
    pub fn satisfies(&self, required: &GemCounts) -> bool {
        GemColor::iter().all(|color| self.get(color) >= required.get(color))
    }
}
