//! Repository contracts for saving and loading the session configuration.

use game_core::MazeConfig;

use super::Result;

/// Storage for the last explicitly applied maze configuration.
///
/// Implementations must never leave a half-written configuration behind: a
/// failed save keeps whatever was stored before.
pub trait ConfigRepository: Send + Sync {
    /// Replace the stored configuration.
    fn save(&self, config: &MazeConfig) -> Result<()>;

    /// Load the stored configuration, if any.
    fn load(&self) -> Result<Option<MazeConfig>>;

    /// Remove the stored configuration.
    fn clear(&self) -> Result<()>;
}
