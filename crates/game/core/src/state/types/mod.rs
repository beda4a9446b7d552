//! Plain data types that make up [`crate::state::GameState`].

mod common;
mod entities;
mod player;

pub use common::{GemColor, GemCounts, GridPoint, Position};
pub use entities::{EntitiesState, TeleportGate};
pub use player::{ExitState, GameStatus, PlayerState};
