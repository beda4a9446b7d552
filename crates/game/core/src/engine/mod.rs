//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It gates
//! requests on the game status, routes them through the action transitions,
//! and finalizes the outcome. Deferred teleports armed by a step are completed
//! through [`GameEngine::complete_teleport`] once the caller's delay elapses.

pub(crate) mod collision;

use crate::action::{Action, ActionOutcome};
use crate::state::{GameState, Position};

/// Game engine borrowing the one live state for the duration of a request.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Applies one action.
    ///
    /// A finished game rejects every action with an unchanged state and an
    /// explanatory outcome. The engine does not hold actions behind a pending
    /// teleport; sequencing that wait is the session's job.
    pub fn execute(&mut self, action: Action) -> ActionOutcome {
        if self.state.status.is_over() {
            return ActionOutcome::game_already_over();
        }

        let outcome = action.transition(self.state);
        self.state.nonce += 1;
        outcome.with_message()
    }

    /// Moves the player to the armed teleport destination.
    ///
    /// Returns the arrival position, or `None` when nothing was pending. No
    /// collision resolution runs at the destination.
    pub fn complete_teleport(&mut self) -> Option<Position> {
        let target = self.state.pending_teleport.take()?;
        let player = &mut self.state.player;
        player.position = target;
        player.standing_on = self.state.entities.find_gem_at(target);
        Some(target)
    }

    /// Drops an armed teleport without moving the player.
    pub fn cancel_teleport(&mut self) -> Option<Position> {
        self.state.pending_teleport.take()
    }
}

#[cfg(test)]
mod tests;
