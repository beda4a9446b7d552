//! Client configuration structures and loaders.
use std::env;
use std::path::{Path, PathBuf};

use runtime::{RuntimeConfig, Speed};

/// Configuration required to bootstrap the runtime and the command loop.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Directory of level files played as a campaign.
    pub levels_dir: Option<PathBuf>,
    /// Single level file to play. When set, the campaign is not opened.
    pub level_file: Option<PathBuf>,
    /// Where the last applied maze and campaign progress are stored.
    pub save_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub speed: Option<Speed>,
    pub command_buffer: Option<usize>,
    pub event_buffer: Option<usize>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MAZE_LEVELS_DIR` - Directory of `.toml`/`.json` levels played in order
    /// - `MAZE_LEVEL_FILE` - Single level file to load at startup
    /// - `MAZE_SAVE_DIR` - Save directory (default: platform data directory)
    /// - `MAZE_SPEED` - Initial speed percent, 0-100 (default: 100)
    /// - `MAZE_LOG_DIR` - Also write logs to `maze.log` in this directory
    /// - `MAZE_COMMAND_BUFFER` - Command queue size (default: 32)
    /// - `MAZE_EVENT_BUFFER` - Per-topic event capacity (default: 100)
    pub fn from_env() -> Self {
        Self {
            levels_dir: env::var_os("MAZE_LEVELS_DIR").map(PathBuf::from),
            level_file: env::var_os("MAZE_LEVEL_FILE").map(PathBuf::from),
            save_dir: env::var_os("MAZE_SAVE_DIR").map(PathBuf::from),
            log_dir: env::var_os("MAZE_LOG_DIR").map(PathBuf::from),
            speed: read_env::<u32>("MAZE_SPEED").map(Speed::new),
            command_buffer: read_env("MAZE_COMMAND_BUFFER"),
            event_buffer: read_env("MAZE_EVENT_BUFFER"),
        }
    }

    /// Levels directory to play as a campaign.
    ///
    /// A single level file replaces the campaign entirely, so winning it
    /// never advances saved campaign progress.
    pub fn campaign_dir(&self) -> Option<&Path> {
        let levels_dir = self.levels_dir.as_deref()?;
        if let Some(level_file) = &self.level_file {
            tracing::warn!(
                "MAZE_LEVEL_FILE={} overrides MAZE_LEVELS_DIR={}; campaign disabled",
                level_file.display(),
                levels_dir.display()
            );
            return None;
        }
        Some(levels_dir)
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        let mut config = RuntimeConfig::default();
        if let Some(capacity) = self.command_buffer {
            config.command_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = self.event_buffer {
            config.event_buffer_size = capacity.max(1);
        }
        if let Some(speed) = self.speed {
            config.initial_speed = speed;
        }
        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_never_drop_to_zero() {
        let config = ClientConfig {
            command_buffer: Some(0),
            event_buffer: Some(0),
            speed: Some(Speed::new(250)),
            ..ClientConfig::default()
        };
        let runtime = config.runtime_config();
        assert_eq!(runtime.command_buffer_size, 1);
        assert_eq!(runtime.event_buffer_size, 1);
        assert_eq!(runtime.initial_speed, Speed::MAX);
    }

    #[test]
    fn level_file_disables_the_campaign() {
        let mut config = ClientConfig {
            levels_dir: Some(PathBuf::from("levels")),
            ..ClientConfig::default()
        };
        assert_eq!(config.campaign_dir(), Some(Path::new("levels")));

        config.level_file = Some(PathBuf::from("levels/03.toml"));
        assert_eq!(config.campaign_dir(), None);
    }
}
