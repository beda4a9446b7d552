use crate::env::MazeOracle;
use crate::engine::collision::{self, Trigger};
use crate::state::GameState;

use super::{ActionOutcome, ActionTransition};

/// Facing direction, encoded as the ordinal 0–3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "u8", try_from = "u8"))]
#[repr(u8)]
pub enum Direction {
    #[default]
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Direction for `ordinal mod 4`.
    pub const fn from_ordinal(ordinal: u8) -> Self {
        Self::ALL[(ordinal % 4) as usize]
    }

    pub const fn turn_right(self) -> Self {
        Self::from_ordinal(self.ordinal() + 1)
    }

    pub const fn turn_left(self) -> Self {
        Self::from_ordinal(self.ordinal() + 3)
    }

    /// Grid offset of one forward step. Rows grow downward.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction.ordinal()
    }
}

impl TryFrom<u8> for Direction {
    type Error = String;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        if ordinal < 4 {
            Ok(Self::from_ordinal(ordinal))
        } else {
            Err(format!("direction ordinal {ordinal} is not in 0..=3"))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    Left,
    Right,
}

/// Rotates the player in place. Always succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnAction {
    pub rotation: Rotation,
}

impl TurnAction {
    pub fn new(rotation: Rotation) -> Self {
        Self { rotation }
    }
}

impl ActionTransition for TurnAction {
    fn apply(&self, state: &mut GameState) -> ActionOutcome {
        let player = &mut state.player;
        player.direction = match self.rotation {
            Rotation::Left => player.direction.turn_left(),
            Rotation::Right => player.direction.turn_right(),
        };
        ActionOutcome::succeeded()
    }
}

/// Steps one cell in the facing direction, then resolves collisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ForwardAction;

impl ActionTransition for ForwardAction {
    fn apply(&self, state: &mut GameState) -> ActionOutcome {
        let destination = state.player.ahead();
        if !state.maze.is_walkable(destination) {
            return ActionOutcome::wall();
        }

        state.player.position = destination;

        let mut outcome = ActionOutcome::succeeded();
        collision::resolve(state, &mut outcome, Trigger::Step);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn right_turns_cycle_through_all_directions() {
        let mut direction = Direction::Up;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(direction);
            direction = direction.turn_right();
        }
        assert_eq!(seen, Direction::ALL);
        assert_eq!(direction, Direction::Up);
    }

    #[test]
    fn left_is_three_rights() {
        for direction in Direction::ALL {
            let three_rights = direction.turn_right().turn_right().turn_right();
            assert_eq!(direction.turn_left(), three_rights);
        }
    }

    #[test]
    fn deltas_follow_screen_axes() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (1, 0));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_ordinal() {
        assert_eq!(serde_json::to_string(&Direction::Down).unwrap(), "2");
        assert_eq!(
            serde_json::from_str::<Direction>("3").unwrap(),
            Direction::Left
        );
        assert!(serde_json::from_str::<Direction>("4").is_err());
    }

    proptest! {
        #[test]
        fn rotation_is_invertible(ordinal in 0u8..4, turns in 0usize..16) {
            let start = Direction::from_ordinal(ordinal);
            prop_assert_eq!(start.turn_right().turn_left(), start);
            prop_assert_eq!(start.turn_left().turn_right(), start);

            let mut direction = start;
            for _ in 0..turns {
                direction = direction.turn_right();
            }
            for _ in 0..turns {
                direction = direction.turn_left();
            }
            prop_assert_eq!(direction, start);
        }
    }
}
