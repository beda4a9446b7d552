//! Level content: file formats, loaders, and the random level generator.
//!
//! This crate provides loaders for TOML/JSON level files:
//! - Level documents (TOML with 0/1 cell rows, or the JSON exchange format)
//! - Level catalogs (an ordered directory of level files)
//! - Seeded generation of multi-level mazes
//!
//! Everything here produces [`game_core::MazeConfig`] values; validation of
//! the resulting configuration stays in `game-core`.

pub mod generator;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use generator::{GeneratorSettings, LevelGenerator};

#[cfg(feature = "loaders")]
pub use loaders::{CellEncodingError, LevelCatalog, LevelDocument, LevelFormat, LevelLoader};
