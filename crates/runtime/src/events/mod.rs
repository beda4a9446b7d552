//! Topic-based event bus for runtime events.
//!
//! This module provides a flexible event system where events are published to
//! specific topics, and consumers can subscribe only to the topics they need.
//! Renderers follow [`Topic::GameState`]; toast and audio layers follow
//! [`Topic::Notification`].

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{AudioCue, GameStateEvent, NotificationEvent, ToastLevel};
