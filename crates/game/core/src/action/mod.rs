//! Player actions and their state transitions.
//!
//! Every request a player can make is one [`Action`]. Each action maps to a
//! concrete transition type implementing [`ActionTransition`]; the engine
//! routes requests through those transitions and never mutates state by any
//! other path.
//!
//! # Module Structure
//!
//! - `movement`: facing [`Direction`], turning and stepping forward
//! - `collect`: explicit gem collection
//! - `outcome`: the structured [`ActionOutcome`] reported to callers

mod collect;
mod movement;
mod outcome;

pub use collect::CollectAction;
pub use movement::{Direction, ForwardAction, Rotation, TurnAction};
pub use outcome::ActionOutcome;

use crate::state::{GameState, GemColor};

/// Defines how a concrete action variant mutates game state.
///
/// Rule violations such as walking into a wall are not errors: they are
/// reported through the returned [`ActionOutcome`] with state left untouched.
pub trait ActionTransition {
    fn apply(&self, state: &mut GameState) -> ActionOutcome;
}

/// A single player request.
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
pub enum Action {
    #[cfg_attr(feature = "serde", serde(rename = "forward"))]
    #[strum(serialize = "forward")]
    Forward,
    #[cfg_attr(feature = "serde", serde(rename = "turnLeft"))]
    #[strum(serialize = "turnLeft")]
    TurnLeft,
    #[cfg_attr(feature = "serde", serde(rename = "turnRight"))]
    #[strum(serialize = "turnRight")]
    TurnRight,
    #[cfg_attr(feature = "serde", serde(rename = "collect_blue"))]
    #[strum(serialize = "collect_blue")]
    CollectBlue,
    #[cfg_attr(feature = "serde", serde(rename = "collect_red"))]
    #[strum(serialize = "collect_red")]
    CollectRed,
}

impl Action {
    /// Gem color targeted by a collect action.
    pub fn collect_color(self) -> Option<GemColor> {
        match self {
            Action::CollectBlue => Some(GemColor::Blue),
            Action::CollectRed => Some(GemColor::Red),
            _ => None,
        }
    }

    pub fn is_forward(self) -> bool {
        matches!(self, Action::Forward)
    }

    /// Runs the transition backing this action.
    pub(crate) fn transition(self, state: &mut GameState) -> ActionOutcome {
        match self {
            Action::Forward => ForwardAction.apply(state),
            Action::TurnLeft => TurnAction::new(Rotation::Left).apply(state),
            Action::TurnRight => TurnAction::new(Rotation::Right).apply(state),
            Action::CollectBlue => CollectAction::new(GemColor::Blue).apply(state),
            Action::CollectRed => CollectAction::new(GemColor::Red).apply(state),
        }
    }
}
