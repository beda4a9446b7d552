//! Maze game client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Configuration from the environment (and an optional `.env` file)
//! 2. Logging via `tracing-subscriber`
//! 3. Runtime (game session) via `RuntimeBuilder`, persisting to the save dir
//! 4. A line-oriented command loop that drives the runtime handle
//!
//! # Examples
//!
//! ```bash
//! # Play the built-in sample (or the last maze you loaded)
//! cargo run -p maze-client
//!
//! # Play a directory of levels in order, slowed down to half speed
//! MAZE_LEVELS_DIR=./levels MAZE_SPEED=50 cargo run -p maze-client
//! ```
mod campaign;
mod config;
mod logging;
mod render;
mod repl;

use anyhow::{Context, Result};
use game_content::LevelLoader;
use runtime::{
    Event, FileConfigRepository, InMemoryConfigRepository, NotificationEvent, Runtime,
    RuntimeHandle, ToastLevel, Topic,
};

use campaign::Campaign;
use config::ClientConfig;
use repl::Repl;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting maze client");

    let repository = match &config.save_dir {
        Some(dir) => FileConfigRepository::new(dir),
        None => FileConfigRepository::in_default_location(),
    };
    let repository = match repository {
        Ok(repository) => {
            tracing::debug!("Saving mazes to {}", repository.path().display());
            Some(repository)
        }
        Err(error) => {
            tracing::warn!("Save directory unusable ({error}); mazes will not be persisted");
            None
        }
    };

    let campaign = match config.campaign_dir() {
        Some(levels_dir) => {
            let progress_dir = match &repository {
                Some(repository) => repository.base_dir().to_path_buf(),
                None => {
                    let scratch = std::env::temp_dir().join("maze");
                    tracing::warn!("Campaign progress goes to {}", scratch.display());
                    scratch
                }
            };
            Some(Campaign::open(levels_dir, &progress_dir)?)
        }
        None => None,
    };

    let initial = match (&config.level_file, &campaign) {
        (Some(path), _) => Some(
            LevelLoader::load(path)
                .with_context(|| format!("failed to load {}", path.display()))?,
        ),
        (None, Some(campaign)) => {
            tracing::info!(level = campaign.index(), of = campaign.len(), "resuming campaign");
            Some(campaign.current()?)
        }
        (None, None) => None,
    };

    let mut builder = Runtime::builder().config(config.runtime_config());
    if let Some(initial) = initial {
        builder = builder.initial_config(initial);
    }
    builder = match repository {
        Some(repository) => builder.repository(repository),
        None => builder.repository(InMemoryConfigRepository::new()),
    };
    let runtime = builder.build().await?;

    tracing::info!("Runtime built successfully");

    let notifications = tokio::spawn(print_notifications(runtime.handle()));

    Repl::new(runtime.handle(), campaign).run().await?;

    notifications.abort();
    runtime.shutdown().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}

/// Prints toasts as they arrive; audio cues only reach the log.
async fn print_notifications(handle: RuntimeHandle) {
    let mut events = handle.subscribe(Topic::Notification);
    drop(handle);

    loop {
        match events.recv().await {
            Ok(Event::Notification(NotificationEvent::Toast { message, level })) => match level {
                ToastLevel::Success => println!("* {message}"),
                ToastLevel::Error => println!("! {message}"),
            },
            Ok(Event::Notification(NotificationEvent::Audio(cue))) => {
                tracing::debug!(%cue, "audio cue");
            }
            Ok(_) => {}
            Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "notification printer lagged");
            }
            Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
        }
    }
}
