//! Ordered directory of level files.

use std::path::{Path, PathBuf};

use game_core::MazeConfig;

use crate::loaders::{LevelFormat, LevelLoader, LoadResult};

/// Level files in a directory, sorted by file name.
///
/// Indices wrap around, so a campaign can keep advancing past the last level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelCatalog {
    dir: PathBuf,
    entries: Vec<PathBuf>,
}

impl LevelCatalog {
    /// Scans `dir` for `.toml` and `.json` level files.
    pub fn open(dir: impl Into<PathBuf>) -> LoadResult<Self> {
        let dir = dir.into();
        let read_dir = std::fs::read_dir(&dir).map_err(|e| {
            anyhow::anyhow!("Failed to read level directory {}: {}", dir.display(), e)
        })?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let path = entry?.path();
            if path.is_file() && LevelFormat::from_path(&path).is_some() {
                entries.push(path);
            }
        }
        entries.sort();

        tracing::debug!(dir = %dir.display(), levels = entries.len(), "opened level catalog");
        Ok(Self { dir, entries })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Path for `index`, taken modulo the catalog size.
    pub fn path(&self, index: usize) -> Option<&Path> {
        if self.entries.is_empty() {
            return None;
        }
        Some(&self.entries[index % self.entries.len()])
    }

    pub fn load(&self, index: usize) -> LoadResult<MazeConfig> {
        let path = self
            .path(index)
            .ok_or_else(|| anyhow::anyhow!("No level files in {}", self.dir.display()))?;
        LevelLoader::load(path)
    }
}
