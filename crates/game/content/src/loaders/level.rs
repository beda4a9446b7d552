//! Level file loader.

use std::path::Path;

use game_core::MazeConfig;

use crate::loaders::{LevelDocument, LoadResult, read_file, write_file};

/// Supported level file encodings, chosen by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LevelFormat {
    /// [`LevelDocument`] with 0/1 cell rows.
    Toml,
    /// The JSON configuration exchange format.
    Json,
}

impl LevelFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("toml") {
            Some(LevelFormat::Toml)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(LevelFormat::Json)
        } else {
            None
        }
    }
}

/// Loader for maze configurations stored in level files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load a configuration from a `.toml` or `.json` file.
    ///
    /// The returned configuration is decoded but not yet validated; call
    /// [`MazeConfig::validate`] or let a session reset reject it.
    pub fn load(path: &Path) -> LoadResult<MazeConfig> {
        let format = LevelFormat::from_path(path).ok_or_else(|| {
            anyhow::anyhow!("Unsupported level file extension: {}", path.display())
        })?;
        let content = read_file(path)?;
        let config = Self::parse(&content, format)?;
        tracing::debug!(
            path = %path.display(),
            levels = config.levels.len(),
            "loaded level file"
        );
        Ok(config)
    }

    pub fn parse(content: &str, format: LevelFormat) -> LoadResult<MazeConfig> {
        match format {
            LevelFormat::Toml => {
                let document: LevelDocument = toml::from_str(content)
                    .map_err(|e| anyhow::anyhow!("Failed to parse level TOML: {}", e))?;
                Ok(document.into_config()?)
            }
            LevelFormat::Json => serde_json::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse level JSON: {}", e)),
        }
    }

    /// Save a configuration, picking the encoding from the extension.
    pub fn save(path: &Path, config: &MazeConfig) -> LoadResult<()> {
        let format = LevelFormat::from_path(path).ok_or_else(|| {
            anyhow::anyhow!("Unsupported level file extension: {}", path.display())
        })?;
        let content = match format {
            LevelFormat::Toml => toml::to_string_pretty(&LevelDocument::from_config(config))
                .map_err(|e| anyhow::anyhow!("Failed to encode level TOML: {}", e))?,
            LevelFormat::Json => serde_json::to_string_pretty(config)
                .map_err(|e| anyhow::anyhow!("Failed to encode level JSON: {}", e))?,
        };
        write_file(path, &content)?;
        tracing::debug!(path = %path.display(), "saved level file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::CellEncodingError;

    #[test]
    fn saves_and_loads_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let config = MazeConfig::sample();

        for name in ["sample.toml", "sample.json"] {
            let path = dir.path().join(name);
            LevelLoader::save(&path, &config).unwrap();
            assert_eq!(LevelLoader::load(&path).unwrap(), config);
        }
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.yaml");
        assert!(LevelLoader::save(&path, &MazeConfig::sample()).is_err());
        assert!(LevelLoader::load(&path).is_err());
    }

    #[test]
    fn bad_cell_surfaces_as_encoding_error() {
        let source = "start = { x = 0, y = 0 }\nexit = { x = 0, y = 0 }\nmaze = [[3]]\n";
        let error = LevelLoader::parse(source, LevelFormat::Toml).unwrap_err();
        assert!(error.downcast_ref::<CellEncodingError>().is_some());
    }

    #[test]
    fn json_rejects_bad_cells_too() {
        let source = r#"{"levels": [{"maze": [[0, 5]]}], "start": {"x": 0, "y": 0}, "exit": {"x": 0, "y": 0}}"#;
        assert!(LevelLoader::parse(source, LevelFormat::Json).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let error = LevelLoader::load(Path::new("/nonexistent/level.toml")).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/level.toml"));
    }
}
