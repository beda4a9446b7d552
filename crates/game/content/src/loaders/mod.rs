//! Content loaders for reading and writing level files.
//!
//! This module converts TOML/JSON files into [`game_core::MazeConfig`]
//! values. TOML files use the [`LevelDocument`] layout; JSON files carry the
//! configuration exchange format directly.

pub mod catalog;
pub mod document;
pub mod level;

pub use catalog::LevelCatalog;
pub use document::{CellEncodingError, LevelDocument};
pub use level::{LevelFormat, LevelLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Writes `contents` next to `path` first, then renames over it.
pub(crate) fn write_file(path: &Path, contents: &str) -> LoadResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!("Failed to create directory {}: {}", parent.display(), e)
        })?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", temp_path.display(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| anyhow::anyhow!("Failed to replace file {}: {}", path.display(), e))
}
