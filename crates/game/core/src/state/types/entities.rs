use super::{GemColor, Position};

/// Two linked coordinates; entering either endpoint teleports to the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[Position; 2]", into = "[Position; 2]"))]
pub struct TeleportGate {
    pub a: Position,
    pub b: Position,
}

impl TeleportGate {
    pub const fn new(a: Position, b: Position) -> Self {
        Self { a, b }
    }

    /// Returns the opposite endpoint when `position` is one side of this gate.
    pub fn other_end(&self, position: Position) -> Option<Position> {
        if self.a == position {
            Some(self.b)
        } else if self.b == position {
            Some(self.a)
        } else {
            None
        }
    }

    pub fn endpoints(&self) -> [Position; 2] {
        [self.a, self.b]
    }
}

impl From<[Position; 2]> for TeleportGate {
    fn from([a, b]: [Position; 2]) -> Self {
        Self::new(a, b)
    }
}

impl From<TeleportGate> for [Position; 2] {
    fn from(gate: TeleportGate) -> Self {
        [gate.a, gate.b]
    }
}

/// Mutable registry of every placed entity, each tagged with its level.
///
/// Lookups are linear scans; the first structural match wins when a
/// configuration places duplicates on one cell.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    pub blue_gems: Vec<Position>,
    pub red_gems: Vec<Position>,
    pub monsters: Vec<Position>,
    pub teleport_gates: Vec<TeleportGate>,
}

impl EntitiesState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn gems(&self, color: GemColor) -> &[Position] {
        match color {
            GemColor::Blue => &self.blue_gems,
            GemColor::Red => &self.red_gems,
        }
    }

    fn gems_mut(&mut self, color: GemColor) -> &mut Vec<Position> {
        match color {
            GemColor::Blue => &mut self.blue_gems,
            GemColor::Red => &mut self.red_gems,
        }
    }

    /// Color of a gem lying at `position`, blue checked before red.
    pub fn find_gem_at(&self, position: Position) -> Option<GemColor> {
        [GemColor::Blue, GemColor::Red]
            .into_iter()
            .find(|&color| self.has_gem_at(position, color))
    }

    pub fn has_gem_at(&self, position: Position, color: GemColor) -> bool {
        self.gems(color).contains(&position)
    }

    /// Removes one gem of `color` at `position`. Returns whether a gem was removed.
    pub fn remove_gem(&mut self, position: Position, color: GemColor) -> bool {
        let gems = self.gems_mut(color);
        match gems.iter().position(|gem| *gem == position) {
            Some(index) => {
                gems.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn has_monster_at(&self, position: Position) -> bool {
        self.monsters.contains(&position)
    }

    /// Paired endpoint of the first gate touching `position`.
    pub fn find_teleport_target(&self, position: Position) -> Option<Position> {
        self.teleport_gates
            .iter()
            .find_map(|gate| gate.other_end(position))
    }
}
