//! Read-only maze geometry.
//!
//! The [`MazeOracle`] trait is the only way the engine inspects layout data;
//! [`Maze`] is the concrete stacked grid that a configuration produces.
mod map;

pub use map::{Cell, MapDimensions, Maze, MazeLevel, MazeOracle};
