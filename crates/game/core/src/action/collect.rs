use crate::engine::collision::{self, Trigger};
use crate::state::{GameState, GemColor};

use super::{ActionOutcome, ActionTransition};

/// Picks up a gem of one color from the player's current cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectAction {
    pub color: GemColor,
}

impl CollectAction {
    pub fn new(color: GemColor) -> Self {
        Self { color }
    }
}

impl ActionTransition for CollectAction {
    fn apply(&self, state: &mut GameState) -> ActionOutcome {
        let here = state.player.position;
        if !state.entities.remove_gem(here, self.color) {
            return ActionOutcome::nothing_to_collect(self.color);
        }

        state.player.collected.increment(self.color);
        state.player.standing_on = state.entities.find_gem_at(here);

        let mut outcome = ActionOutcome::collected(self.color);
        collision::resolve(state, &mut outcome, Trigger::Collect);
        outcome
    }
}
