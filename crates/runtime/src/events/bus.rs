//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{GameStateEvent, NotificationEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// State snapshots after resets, actions, and teleports
    GameState,
    /// Toasts and audio cues
    Notification,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    GameState(GameStateEvent),
    Notification(NotificationEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::GameState(_) => Topic::GameState,
            Event::Notification(_) => Topic::Notification,
        }
    }
}

impl From<GameStateEvent> for Event {
    fn from(event: GameStateEvent) -> Self {
        Event::GameState(event)
    }
}

impl From<NotificationEvent> for Event {
    fn from(event: NotificationEvent) -> Self {
        Event::Notification(event)
    }
}

#[derive(Debug)]
struct Channels {
    game_state: broadcast::Sender<Event>,
    notification: broadcast::Sender<Event>,
}

impl Channels {
    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::GameState => &self.game_state,
            Topic::Notification => &self.notification,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing never blocks; events sent while a
/// topic has no subscribers are dropped.
#[derive(Debug, Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                game_state: broadcast::channel(capacity).0,
                notification: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: impl Into<Event>) {
        let event = event.into();
        let topic = event.topic();
        if self.channels.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
