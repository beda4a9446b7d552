//! File-based ConfigRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use game_core::MazeConfig;

use crate::repository::{ConfigRepository, RepositoryError, Result};

const FILE_NAME: &str = "current_map.json";

/// File-based implementation of ConfigRepository.
///
/// # File Format
///
/// The configuration is stored as pretty-printed JSON in
/// `{base_dir}/current_map.json`, using the same exchange format clients send
/// to reset. Writes go to a temp file first and are renamed into place.
#[derive(Debug, Clone)]
pub struct FileConfigRepository {
    base_dir: PathBuf,
}

impl FileConfigRepository {
    /// Create a new file-based repository, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    /// Repository in the platform data directory for this application.
    pub fn in_default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "maze").ok_or(RepositoryError::NoDataDir)?;
        Self::new(dirs.data_dir())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn path(&self) -> PathBuf {
        self.base_dir.join(FILE_NAME)
    }
}

impl ConfigRepository for FileConfigRepository {
    fn save(&self, config: &MazeConfig) -> Result<()> {
        let path = self.path();
        let temp_path = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(config)?;

        // Write to temp file
        fs::write(&temp_path, json).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved maze configuration to {}", path.display());

        Ok(())
    }

    fn load(&self) -> Result<Option<MazeConfig>> {
        let path = self.path();

        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path).map_err(RepositoryError::Io)?;
        let config: MazeConfig = serde_json::from_str(&json)?;

        tracing::debug!("Loaded maze configuration from {}", path.display());

        Ok(Some(config))
    }

    fn clear(&self) -> Result<()> {
        let path = self.path();

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted {}", path.display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileConfigRepository::new(dir.path()).unwrap();
        assert!(repo.load().unwrap().is_none());

        let config = MazeConfig::sample();
        repo.save(&config).unwrap();
        assert_eq!(repo.load().unwrap(), Some(config));
        assert!(repo.path().ends_with("current_map.json"));
        assert!(!repo.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn corrupted_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileConfigRepository::new(dir.path()).unwrap();
        fs::write(repo.path(), "{ not json").unwrap();
        assert!(matches!(repo.load(), Err(RepositoryError::Json(_))));
    }

    #[test]
    fn clear_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileConfigRepository::new(dir.path().join("nested")).unwrap();
        repo.save(&MazeConfig::sample()).unwrap();
        repo.clear().unwrap();
        assert!(repo.load().unwrap().is_none());
        repo.clear().unwrap();
        assert_eq!(repo.base_dir(), dir.path().join("nested"));
    }
}
