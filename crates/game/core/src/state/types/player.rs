use crate::action::Direction;

use super::{GemColor, GemCounts, Position};

/// Player avatar: location, facing, and gem tallies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub position: Position,
    pub direction: Direction,
    pub collected: GemCounts,
    /// Color of an uncollected gem under the player, if any.
    pub standing_on: Option<GemColor>,
}

impl PlayerState {
    /// A fresh player at `position`, facing up with empty counters.
    pub fn spawn(position: Position) -> Self {
        Self {
            position,
            direction: Direction::Up,
            collected: GemCounts::ZERO,
            standing_on: None,
        }
    }

    /// The cell one step ahead in the facing direction, same level.
    pub fn ahead(&self) -> Position {
        let (dx, dy) = self.direction.delta();
        self.position.offset(dx, dy)
    }
}

/// Lifecycle of a game: active until a monster or the exit ends it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    #[default]
    Active,
    GameOver {
        success: bool,
    },
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::GameOver { .. })
    }

    pub fn is_success(self) -> bool {
        matches!(self, GameStatus::GameOver { success: true })
    }
}

/// Exit cell plus its monotonic unlock flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExitState {
    pub position: Position,
    pub open: bool,
}

impl ExitState {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            open: false,
        }
    }

    /// Opens the exit once `collected` meets `required`. Never closes it.
    ///
    /// Returns true only on the transition from closed to open.
    pub fn refresh(&mut self, collected: &GemCounts, required: &GemCounts) -> bool {
        if !self.open && collected.satisfies(required) {
            self.open = true;
            return true;
        }
        false
    }
}
