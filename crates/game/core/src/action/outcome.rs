use crate::state::GemColor;

/// Structured result of one action.
///
/// Callers branch on these flags; nothing in the rules engine reports
/// failure any other way.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ActionOutcome {
    pub success: bool,
    pub hit_wall: bool,
    pub gem_collected: bool,
    /// Gem color collected, or stood on when auto-collect is off.
    pub gem_type: Option<GemColor>,
    pub monster_hit: bool,
    pub reached_exit: bool,
    pub teleport_armed: bool,
    pub message: Option<String>,
}

impl ActionOutcome {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    pub fn wall() -> Self {
        Self {
            hit_wall: true,
            ..Self::default()
        }
    }

    pub fn collected(color: GemColor) -> Self {
        Self {
            success: true,
            gem_collected: true,
            gem_type: Some(color),
            ..Self::default()
        }
    }

    pub fn nothing_to_collect(color: GemColor) -> Self {
        Self {
            message: Some(format!("No {color} gem here!")),
            ..Self::default()
        }
    }

    /// No-op outcome for requests made after the game ended.
    pub fn game_already_over() -> Self {
        Self {
            message: Some("The game is already over!".to_owned()),
            ..Self::default()
        }
    }

    /// Fills in the player-facing message from the flags, if none was set.
    ///
    /// Precedence: wall, monster, exit, collected gem, teleport, standing gem.
    pub fn with_message(mut self) -> Self {
        if self.message.is_none() {
            self.message = self.describe();
        }
        self
    }

    fn describe(&self) -> Option<String> {
        if self.hit_wall {
            return Some("Hit a wall!".to_owned());
        }
        if self.monster_hit {
            return Some("Caught by a monster! Game over!".to_owned());
        }
        if self.reached_exit {
            return Some("Maze complete!".to_owned());
        }
        match (self.gem_collected, self.gem_type) {
            (true, Some(color)) => return Some(format!("Collected a {color} gem!")),
            _ if self.teleport_armed => return Some("Teleporting...".to_owned()),
            (false, Some(color)) => return Some(format!("Standing on a {color} gem.")),
            _ => {}
        }
        None
    }
}
