//! Event types for different topics.

use game_core::{Action, ActionOutcome, Position, StateSnapshot};
use serde::{Deserialize, Serialize};

/// Events carrying a fresh state snapshot after every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameStateEvent {
    /// The session was replaced from a configuration.
    Reset { snapshot: Box<StateSnapshot> },

    /// An action was applied to an active game.
    ActionApplied {
        action: Action,
        outcome: ActionOutcome,
        snapshot: Box<StateSnapshot>,
    },

    /// A pending teleport moved the player to the paired gate.
    TeleportCompleted {
        destination: Position,
        snapshot: Box<StateSnapshot>,
    },
}

impl GameStateEvent {
    pub fn snapshot(&self) -> &StateSnapshot {
        match self {
            GameStateEvent::Reset { snapshot }
            | GameStateEvent::ActionApplied { snapshot, .. }
            | GameStateEvent::TeleportCompleted { snapshot, .. } => snapshot,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ToastLevel {
    Success,
    Error,
}

/// Sound cues for an external audio layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AudioCue {
    BackgroundMusic,
    StopMusic,
    Error,
    Gem,
    Monster,
    Complete,
    Teleport,
}

/// Presentation hints. Delivery is up to subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationEvent {
    Toast { message: String, level: ToastLevel },
    Audio(AudioCue),
}

impl NotificationEvent {
    /// Notifications announcing one action outcome, in delivery order.
    pub fn for_outcome(action: Action, outcome: &ActionOutcome) -> Vec<Self> {
        let mut cues = Vec::new();
        if outcome.hit_wall {
            cues.push(AudioCue::Error);
        } else if outcome.monster_hit {
            cues.extend([AudioCue::StopMusic, AudioCue::Monster]);
        } else if outcome.reached_exit {
            cues.extend([AudioCue::StopMusic, AudioCue::Complete]);
        } else if outcome.gem_collected {
            cues.push(AudioCue::Gem);
        } else if action.collect_color().is_some() {
            cues.push(AudioCue::Error);
        }

        let mut notifications: Vec<Self> = cues.into_iter().map(NotificationEvent::Audio).collect();
        if let Some(message) = &outcome.message {
            let level = if outcome.success && !outcome.monster_hit {
                ToastLevel::Success
            } else {
                ToastLevel::Error
            };
            notifications.push(NotificationEvent::Toast {
                message: message.clone(),
                level,
            });
        }
        notifications
    }
}
