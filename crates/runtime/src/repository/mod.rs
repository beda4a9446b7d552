//! Repository layer for dynamic runtime data
//!
//! The only data that outlives a session is the last maze configuration a
//! client explicitly supplied to reset. It is saved on every such reset and
//! loaded once when the runtime is built.
//!
//! Level content (catalogs, generated mazes) lives in `game-content`, not here.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileConfigRepository;
pub use memory::InMemoryConfigRepository;
pub use traits::ConfigRepository;
