use proptest::prelude::*;

use super::*;
use crate::action::Direction;
use crate::config::{LevelSpec, MazeConfig};
use crate::env::Cell;
use crate::state::{GameStatus, GemColor, GemCounts, GridPoint, TeleportGate};

fn open_rows(width: usize, height: usize) -> Vec<Vec<Cell>> {
    vec![vec![Cell::OPEN; width]; height]
}

/// 5x5 level with pillars at (1,1), (1,3), (3,1), (3,3) and a blue gem at (2,2).
fn pillar_config() -> MazeConfig {
    let mut rows = open_rows(5, 5);
    for (x, y) in [(1, 1), (1, 3), (3, 1), (3, 3)] {
        rows[y][x] = Cell::WALL;
    }
    let mut level = LevelSpec::new(rows);
    level.blue_gems.push(GridPoint::new(2, 2));

    MazeConfig {
        levels: vec![level],
        start: Position::new(0, 0, 0),
        exit: Position::new(4, 4, 0),
        required_blue_gems: Some(1),
        auto_collect: true,
        ..MazeConfig::default()
    }
}

fn corridor(entities: impl FnOnce(&mut MazeConfig)) -> GameState {
    let mut config = MazeConfig {
        levels: vec![LevelSpec::new(open_rows(5, 1))],
        start: Position::new(0, 0, 0),
        exit: Position::new(4, 0, 0),
        ..MazeConfig::default()
    };
    entities(&mut config);
    let mut state = GameState::from_config(&config).unwrap();
    state.player.direction = Direction::Right;
    state
}

fn run(state: &mut GameState, actions: &[Action]) -> Vec<ActionOutcome> {
    let mut engine = GameEngine::new(state);
    actions.iter().map(|action| engine.execute(*action)).collect()
}

#[test]
fn walking_to_the_gem_collects_it_and_opens_the_exit() {
    let mut state = GameState::from_config(&pillar_config()).unwrap();
    use Action::*;
    let outcomes = run(
        &mut state,
        &[TurnRight, Forward, Forward, TurnRight, Forward, Forward],
    );

    assert!(outcomes.iter().all(|outcome| outcome.success));
    let last = outcomes.last().unwrap();
    assert!(last.gem_collected);
    assert_eq!(last.gem_type, Some(GemColor::Blue));
    assert_eq!(last.message.as_deref(), Some("Collected a blue gem!"));

    assert_eq!(state.player.position, Position::new(2, 2, 0));
    assert_eq!(state.player.direction, Direction::Down);
    assert_eq!(state.player.collected, GemCounts::new(1, 0));
    assert!(state.entities.blue_gems.is_empty());
    assert!(state.exit.open);
    assert_eq!(state.nonce, 6);
}

#[test]
fn forward_into_a_wall_changes_nothing() {
    let mut state = GameState::from_config(&pillar_config()).unwrap();
    state.player.position = Position::new(1, 0, 0);
    state.player.direction = Direction::Down;
    let before = state.player;

    let outcome = GameEngine::new(&mut state).execute(Action::Forward);
    assert!(outcome.hit_wall);
    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Hit a wall!"));
    assert_eq!(state.player, before);
}

#[test]
fn forward_off_the_grid_is_a_wall() {
    let mut state = GameState::from_config(&pillar_config()).unwrap();
    let outcome = GameEngine::new(&mut state).execute(Action::Forward);
    assert!(outcome.hit_wall);
    assert_eq!(state.player.position, Position::new(0, 0, 0));
}

#[test]
fn manual_collect_requires_a_matching_gem() {
    let mut state = corridor(|config| {
        config.levels[0].red_gems.push(GridPoint::new(1, 0));
    });
    use Action::*;
    let outcomes = run(&mut state, &[Forward, CollectBlue, CollectRed, CollectRed]);

    assert_eq!(outcomes[0].gem_type, Some(GemColor::Red));
    assert!(!outcomes[0].gem_collected);
    assert_eq!(state.player.collected, GemCounts::new(0, 1));
    assert!(!outcomes[1].gem_collected);
    assert_eq!(outcomes[1].message.as_deref(), Some("No blue gem here!"));
    assert!(outcomes[2].gem_collected);
    assert!(!outcomes[3].success);
    assert_eq!(state.player.standing_on, None);
}

#[test]
fn standing_on_tracks_uncollected_gems() {
    let mut state = corridor(|config| {
        config.levels[0].blue_gems.push(GridPoint::new(1, 0));
    });
    let outcome = GameEngine::new(&mut state).execute(Action::Forward);
    assert_eq!(state.player.standing_on, Some(GemColor::Blue));
    assert_eq!(outcome.message.as_deref(), Some("Standing on a blue gem."));
}

#[test]
fn revisiting_a_vacated_cell_is_a_no_op() {
    let mut state = corridor(|config| {
        config.levels[0].blue_gems.push(GridPoint::new(1, 0));
        config.auto_collect = true;
    });
    use Action::*;
    let outcomes = run(
        &mut state,
        &[Forward, TurnLeft, TurnLeft, Forward, TurnLeft, TurnLeft, Forward],
    );
    assert!(outcomes[0].gem_collected);
    assert!(!outcomes[6].gem_collected);
    assert_eq!(outcomes[6].gem_type, None);
    assert_eq!(state.player.collected, GemCounts::new(1, 0));
}

#[test]
fn monster_ends_the_game_and_rejects_further_actions() {
    let mut state = corridor(|config| {
        config.levels[0].monsters.push(GridPoint::new(2, 0));
    });
    use Action::*;
    let outcomes = run(&mut state, &[Forward, Forward]);
    assert!(outcomes[1].monster_hit);
    assert_eq!(state.status, GameStatus::GameOver { success: false });

    let before = state.clone();
    let rejected = run(&mut state, &[Forward, TurnLeft]);
    for outcome in rejected {
        assert!(!outcome.success);
        assert_eq!(outcome.message.as_deref(), Some("The game is already over!"));
    }
    assert_eq!(state, before);
}

#[test]
fn monster_on_the_exit_is_never_a_win() {
    let mut state = corridor(|config| {
        config.exit = Position::new(1, 0, 0);
        config.levels[0].monsters.push(GridPoint::new(1, 0));
    });
    assert!(state.exit.open);

    let outcome = GameEngine::new(&mut state).execute(Action::Forward);
    assert!(outcome.monster_hit);
    assert!(!outcome.reached_exit);
    assert_eq!(state.status, GameStatus::GameOver { success: false });
}

#[test]
fn monster_step_still_collects_the_gem() {
    let mut state = corridor(|config| {
        config.auto_collect = true;
        config.levels[0].blue_gems.push(GridPoint::new(1, 0));
        config.levels[0].monsters.push(GridPoint::new(1, 0));
    });
    let outcome = GameEngine::new(&mut state).execute(Action::Forward);
    assert!(outcome.gem_collected);
    assert!(outcome.monster_hit);
    assert_eq!(state.player.collected.blue, 1);
}

#[test]
fn closed_exit_is_just_a_cell() {
    let mut state = corridor(|config| {
        config.exit = Position::new(1, 0, 0);
        config.required_red_gems = Some(1);
    });
    let outcome = GameEngine::new(&mut state).execute(Action::Forward);
    assert!(outcome.success);
    assert!(!outcome.reached_exit);
    assert_eq!(state.status, GameStatus::Active);
}

#[test]
fn open_exit_completes_the_maze() {
    let mut state = corridor(|config| {
        config.exit = Position::new(1, 0, 0);
    });
    let outcome = GameEngine::new(&mut state).execute(Action::Forward);
    assert!(outcome.reached_exit);
    assert_eq!(outcome.message.as_deref(), Some("Maze complete!"));
    assert_eq!(state.status, GameStatus::GameOver { success: true });
}

#[test]
fn collecting_on_the_exit_can_finish_the_game() {
    let mut state = corridor(|config| {
        config.exit = Position::new(1, 0, 0);
        config.required_blue_gems = Some(1);
        config.levels[0].blue_gems.push(GridPoint::new(1, 0));
    });
    use Action::*;
    let outcomes = run(&mut state, &[Forward, CollectBlue]);
    assert!(!outcomes[0].reached_exit);
    assert!(outcomes[1].gem_collected);
    assert!(outcomes[1].reached_exit);
    assert!(state.status.is_success());
}

#[test]
fn gate_arms_a_teleport_that_completes_later() {
    let mut state = GameState::from_config(&MazeConfig::sample()).unwrap();
    state.player.position = Position::new(3, 0, 0);
    state.player.direction = Direction::Right;

    let mut engine = GameEngine::new(&mut state);
    let outcome = engine.execute(Action::Forward);
    assert!(outcome.teleport_armed);
    assert_eq!(engine.complete_teleport(), Some(Position::new(0, 2, 1)));
    assert_eq!(engine.complete_teleport(), None);

    assert_eq!(state.player.position, Position::new(0, 2, 1));
    assert_eq!(state.current_level(), 1);
    assert!(!state.is_teleport_pending());
}

#[test]
fn gates_work_in_both_directions() {
    let mut state = corridor(|config| {
        config.teleport_gates.push(TeleportGate::new(
            Position::new(1, 0, 0),
            Position::new(3, 0, 0),
        ));
    });
    let mut engine = GameEngine::new(&mut state);
    engine.execute(Action::Forward);
    assert_eq!(engine.complete_teleport(), Some(Position::new(3, 0, 0)));

    for action in [Action::TurnLeft, Action::TurnLeft, Action::Forward] {
        engine.execute(action);
    }
    for action in [Action::TurnLeft, Action::TurnLeft] {
        engine.execute(action);
    }
    let outcome = engine.execute(Action::Forward);
    assert!(outcome.teleport_armed);
    assert_eq!(engine.complete_teleport(), Some(Position::new(1, 0, 0)));
}

#[test]
fn no_teleport_is_armed_after_a_monster_hit() {
    let mut state = corridor(|config| {
        config.levels[0].monsters.push(GridPoint::new(1, 0));
        config.teleport_gates.push(TeleportGate::new(
            Position::new(1, 0, 0),
            Position::new(3, 0, 0),
        ));
    });
    let outcome = GameEngine::new(&mut state).execute(Action::Forward);
    assert!(outcome.monster_hit);
    assert!(!outcome.teleport_armed);
    assert_eq!(state.pending_teleport, None);
}

#[test]
fn arrival_runs_no_collision_checks() {
    let mut state = corridor(|config| {
        config.levels[0].monsters.push(GridPoint::new(3, 0));
        config.teleport_gates.push(TeleportGate::new(
            Position::new(1, 0, 0),
            Position::new(3, 0, 0),
        ));
    });
    let mut engine = GameEngine::new(&mut state);
    engine.execute(Action::Forward);
    engine.complete_teleport();
    assert_eq!(state.status, GameStatus::Active);
}

proptest! {
    #[test]
    fn exit_never_closes_once_open(actions in prop::collection::vec(0usize..5, 0..40)) {
        let mut config = MazeConfig::sample();
        config.auto_collect = true;
        config.required_blue_gems = Some(1);
        config.required_red_gems = Some(0);
        let mut state = GameState::from_config(&config).unwrap();

        let all = [
            Action::Forward,
            Action::TurnLeft,
            Action::TurnRight,
            Action::CollectBlue,
            Action::CollectRed,
        ];
        let mut was_open = state.exit.open;
        let mut engine = GameEngine::new(&mut state);
        for index in actions {
            let outcome = engine.execute(all[index]);
            engine.complete_teleport();
            let open = engine.state.exit.open;
            prop_assert!(!was_open || open);
            prop_assert!(!outcome.reached_exit || open);
            was_open = open;
        }
    }
}
