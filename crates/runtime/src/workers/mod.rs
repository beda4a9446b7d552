//! Worker tasks that back the runtime orchestration.
//!
//! The session worker is the single writer of game state; every reset,
//! action, and teleport completion is serialized through it.

mod session;

pub use session::{Command, SessionWorker};
