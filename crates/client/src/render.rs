//! Plain-text rendering of state snapshots.
use std::fmt::Write;

use game_core::{Direction, Position, StateSnapshot};

fn player_glyph(direction: Direction) -> char {
    match direction {
        Direction::Up => '^',
        Direction::Right => '>',
        Direction::Down => 'v',
        Direction::Left => '<',
    }
}

fn glyph_at(snapshot: &StateSnapshot, position: Position, walkable: bool) -> char {
    if position == snapshot.player {
        return player_glyph(snapshot.direction);
    }
    if !walkable {
        return '#';
    }
    if snapshot.monsters.contains(&position) {
        'M'
    } else if snapshot.blue_gems.contains(&position) {
        'b'
    } else if snapshot.red_gems.contains(&position) {
        'r'
    } else if position == snapshot.exit {
        if snapshot.exit_open { 'E' } else { 'e' }
    } else if snapshot
        .teleport_gates
        .iter()
        .any(|gate| gate.endpoints().contains(&position))
    {
        'T'
    } else {
        '.'
    }
}

/// The player's current level as a character grid plus a status line.
pub fn render(snapshot: &StateSnapshot) -> String {
    let mut out = String::new();
    for (y, row) in snapshot.maze.iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let position = Position::new(x as i32, y as i32, snapshot.level);
            out.push(glyph_at(snapshot, position, cell.walkable));
        }
        out.push('\n');
    }

    let _ = write!(
        out,
        "level {}/{}  blue {}/{}  red {}/{}  exit {}",
        snapshot.level + 1,
        snapshot.level_count,
        snapshot.collected.blue,
        snapshot.required.blue,
        snapshot.collected.red,
        snapshot.required.red,
        if snapshot.exit_open { "open" } else { "closed" },
    );
    if snapshot.game_over {
        out.push_str(if snapshot.success { "  [complete]" } else { "  [game over]" });
    } else if snapshot.teleport_pending {
        out.push_str("  [teleporting]");
    }
    out
}
