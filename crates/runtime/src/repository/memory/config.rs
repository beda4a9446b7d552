//! In-memory ConfigRepository implementation for tests and local runs.

use std::sync::RwLock;

use game_core::MazeConfig;

use crate::repository::{ConfigRepository, RepositoryError, Result};

/// In-memory implementation of ConfigRepository.
#[derive(Debug, Default)]
pub struct InMemoryConfigRepository {
    config: RwLock<Option<MazeConfig>>,
}

impl InMemoryConfigRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a stored configuration.
    pub fn with_config(config: MazeConfig) -> Self {
        Self {
            config: RwLock::new(Some(config)),
        }
    }
}

impl ConfigRepository for InMemoryConfigRepository {
    fn save(&self, config: &MazeConfig) -> Result<()> {
        let mut stored = self
            .config
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *stored = Some(config.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<MazeConfig>> {
        let stored = self
            .config
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(stored.clone())
    }

    fn clear(&self) -> Result<()> {
        let mut stored = self
            .config
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *stored = None;
        Ok(())
    }
}
