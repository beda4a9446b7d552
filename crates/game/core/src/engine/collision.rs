//! Collision resolution after the player enters or works a cell.
//!
//! Checks always run in the order gem, monster, teleport-arm, exit-unlock,
//! exit-reached. A monster's game-over is never overwritten by a later check.

use crate::action::ActionOutcome;
use crate::state::{GameState, GameStatus};

/// What brought the player to resolve the current cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Trigger {
    /// A forward step onto a new cell.
    Step,
    /// An explicit collect; the gem was already removed by the action.
    Collect,
}

pub(crate) fn resolve(state: &mut GameState, outcome: &mut ActionOutcome, trigger: Trigger) {
    if trigger == Trigger::Step {
        check_gem(state, outcome);
    }
    check_monster(state, outcome);
    if trigger == Trigger::Step {
        arm_teleport(state, outcome);
    }
    state
        .exit
        .refresh(&state.player.collected, &state.required);
    check_exit(state, outcome);
}

fn check_gem(state: &mut GameState, outcome: &mut ActionOutcome) {
    let here = state.player.position;
    if let Some(color) = state.entities.find_gem_at(here) {
        outcome.gem_type = Some(color);
        if state.auto_collect && state.entities.remove_gem(here, color) {
            state.player.collected.increment(color);
            outcome.gem_collected = true;
        }
    }
    state.player.standing_on = state.entities.find_gem_at(here);
}

fn check_monster(state: &mut GameState, outcome: &mut ActionOutcome) {
    if state.entities.has_monster_at(state.player.position) {
        state.status = GameStatus::GameOver { success: false };
        outcome.monster_hit = true;
    }
}

fn arm_teleport(state: &mut GameState, outcome: &mut ActionOutcome) {
    if state.status.is_over() {
        return;
    }
    if let Some(target) = state.entities.find_teleport_target(state.player.position) {
        state.pending_teleport = Some(target);
        outcome.teleport_armed = true;
    }
}

fn check_exit(state: &mut GameState, outcome: &mut ActionOutcome) {
    if state.status.is_over() || !state.exit.open {
        return;
    }
    if state.player.position == state.exit.position {
        state.status = GameStatus::GameOver { success: true };
        state.pending_teleport = None;
        outcome.teleport_armed = false;
        outcome.reached_exit = true;
    }
}
