//! Level-by-level progression over a [`LevelCatalog`].
//!
//! The index of the level being played is kept in a small text file next to
//! the saved maze, so a restarted client resumes where it stopped.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use game_content::LevelCatalog;
use game_core::MazeConfig;

pub const PROGRESS_FILE: &str = "level.txt";

#[derive(Debug)]
pub struct Campaign {
    catalog: LevelCatalog,
    progress_path: PathBuf,
    index: usize,
}

impl Campaign {
    /// Opens the catalog in `levels_dir` and restores progress from
    /// `save_dir`. A missing or unreadable progress file starts at level 0.
    pub fn open(levels_dir: &Path, save_dir: &Path) -> Result<Self> {
        let catalog = LevelCatalog::open(levels_dir)?;
        anyhow::ensure!(
            !catalog.is_empty(),
            "no level files in {}",
            levels_dir.display()
        );

        let progress_path = save_dir.join(PROGRESS_FILE);
        let index = fs::read_to_string(&progress_path)
            .ok()
            .and_then(|text| text.trim().parse::<usize>().ok())
            .unwrap_or(0)
            % catalog.len();

        Ok(Self {
            catalog,
            progress_path,
            index,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn current(&self) -> Result<MazeConfig> {
        self.catalog.load(self.index)
    }

    /// Moves to the next level, wrapping after the last, and records it.
    pub fn advance(&mut self) -> Result<MazeConfig> {
        self.index = (self.index + 1) % self.catalog.len();
        if let Some(parent) = self.progress_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.progress_path, self.index.to_string()).with_context(|| {
            format!("failed to record progress in {}", self.progress_path.display())
        })?;
        tracing::info!(level = self.index, "campaign advanced");
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use game_content::LevelLoader;

    use super::*;

    fn levels(count: usize) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for index in 0..count {
            let mut config = MazeConfig::sample();
            config.title = Some(format!("level {index}"));
            LevelLoader::save(&dir.path().join(format!("{index:02}.toml")), &config).unwrap();
        }
        dir
    }

    #[test]
    fn advancing_wraps_and_is_remembered() {
        let levels = levels(2);
        let saves = tempfile::tempdir().unwrap();

        let mut campaign = Campaign::open(levels.path(), saves.path()).unwrap();
        assert_eq!(campaign.index(), 0);
        assert_eq!(campaign.current().unwrap().title.as_deref(), Some("level 0"));

        let next = campaign.advance().unwrap();
        assert_eq!(next.title.as_deref(), Some("level 1"));
        assert_eq!(campaign.advance().unwrap().title.as_deref(), Some("level 0"));

        campaign.advance().unwrap();
        let resumed = Campaign::open(levels.path(), saves.path()).unwrap();
        assert_eq!(resumed.index(), 1);
    }

    #[test]
    fn stale_progress_is_taken_modulo_the_catalog() {
        let levels = levels(3);
        let saves = tempfile::tempdir().unwrap();
        fs::write(saves.path().join(PROGRESS_FILE), "7\n").unwrap();

        let campaign = Campaign::open(levels.path(), saves.path()).unwrap();
        assert_eq!(campaign.index(), 1);
        assert_eq!(campaign.len(), 3);
    }

    #[test]
    fn empty_directory_is_rejected() {
        let levels = tempfile::tempdir().unwrap();
        let saves = tempfile::tempdir().unwrap();
        assert!(Campaign::open(levels.path(), saves.path()).is_err());
    }
}
