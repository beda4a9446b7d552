//! Seeded random maze generation.
//!
//! Generated mazes stack several small levels linked by one gate pair per
//! consecutive level pair. The start sits at the top-left corner of level 0
//! and the exit on a free cell of the last level. Every placed gem is
//! required, so a run only completes after sweeping all levels.
//!
//! Reachability is not checked: walls are scattered independently, and an
//! unlucky seed can wall off gems or the exit.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use game_core::{Cell, GridPoint, LevelSpec, MazeConfig, Position, TeleportGate};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Ranges drawn from for every generated maze.
///
/// Any values are accepted: [`LevelGenerator::with_settings`] raises empty
/// or zero ranges to at least one level of one cell and sorts the density
/// bounds into `0.0..=1.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorSettings {
    pub levels: RangeInclusive<u32>,
    pub width: RangeInclusive<usize>,
    pub height: RangeInclusive<usize>,
    /// Probability range for a cell to become a wall.
    pub wall_density: (f64, f64),
    pub gems_per_color: RangeInclusive<usize>,
    pub monsters: RangeInclusive<usize>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            levels: 2..=3,
            width: 6..=8,
            height: 6..=8,
            wall_density: (0.15, 0.25),
            gems_per_color: 2..=3,
            monsters: 1..=2,
        }
    }
}

impl GeneratorSettings {
    fn normalized(self) -> Self {
        let (low, high) = self.wall_density;
        let (low, high) = (low.clamp(0.0, 1.0), high.clamp(0.0, 1.0));
        Self {
            levels: at_least(self.levels, 1),
            width: at_least(self.width, 1),
            height: at_least(self.height, 1),
            wall_density: (low.min(high), low.max(high)),
            gems_per_color: at_least(self.gems_per_color, 0),
            monsters: at_least(self.monsters, 0),
        }
    }
}

fn at_least<T: Copy + Ord>(range: RangeInclusive<T>, floor: T) -> RangeInclusive<T> {
    let start = (*range.start()).max(floor);
    start..=(*range.end()).max(start)
}

/// Deterministic maze generator; equal seeds yield equal mazes.
pub struct LevelGenerator {
    rng: ChaCha8Rng,
    settings: GeneratorSettings,
}

impl LevelGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self::with_settings(seed, GeneratorSettings::default())
    }

    pub fn with_settings(seed: u64, settings: GeneratorSettings) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            settings: settings.normalized(),
        }
    }

    /// Generates one complete configuration.
    pub fn generate(&mut self, title: impl Into<String>) -> MazeConfig {
        let level_count = self.rng.gen_range(self.settings.levels.clone());
        let mut levels = Vec::with_capacity(level_count as usize);
        for index in 0..level_count {
            levels.push(self.generate_level(index == 0));
        }

        let mut teleport_gates = Vec::new();
        for index in 1..level_count {
            let lower = index - 1;
            let from = self.free_cell(&levels[lower as usize], &[]);
            let to = self.free_cell(&levels[index as usize], &[]);
            teleport_gates.push(TeleportGate::new(
                from.on_level(lower),
                to.on_level(index),
            ));
        }

        let last = level_count - 1;
        let gate_cells: Vec<GridPoint> = teleport_gates
            .iter()
            .flat_map(|gate| gate.endpoints())
            .filter(|end| end.level == last)
            .map(GridPoint::from)
            .collect();
        let exit = self
            .free_cell(&levels[last as usize], &gate_cells)
            .on_level(last);

        let total = |pick: fn(&LevelSpec) -> usize| levels.iter().map(pick).sum::<usize>() as u32;
        let required_blue = total(|level| level.blue_gems.len());
        let required_red = total(|level| level.red_gems.len());

        MazeConfig {
            title: Some(title.into()),
            levels,
            start: Position::ORIGIN,
            exit,
            teleport_gates,
            required_blue_gems: Some(required_blue),
            required_red_gems: Some(required_red),
            ..MazeConfig::default()
        }
    }

    fn generate_level(&mut self, has_start: bool) -> LevelSpec {
        let width = self.rng.gen_range(self.settings.width.clone());
        let height = self.rng.gen_range(self.settings.height.clone());
        let (low, high) = self.settings.wall_density;
        let density = if low < high {
            self.rng.gen_range(low..high)
        } else {
            low
        };

        let maze: Vec<Vec<Cell>> = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| {
                        // Corner and its two neighbours stay open.
                        if x + y <= 1 {
                            Cell::OPEN
                        } else {
                            Cell::new(self.rng.r#gen::<f64>() >= density)
                        }
                    })
                    .collect()
            })
            .collect();

        let mut used = HashSet::new();
        if has_start {
            used.insert(GridPoint::new(0, 0));
        }

        let mut level = LevelSpec::new(maze);
        let blue = self.rng.gen_range(self.settings.gems_per_color.clone());
        level.blue_gems = self.sample_free(&level.maze, blue, &mut used);
        let red = self.rng.gen_range(self.settings.gems_per_color.clone());
        level.red_gems = self.sample_free(&level.maze, red, &mut used);
        let monsters = self.rng.gen_range(self.settings.monsters.clone());
        level.monsters = self.sample_free(&level.maze, monsters, &mut used);
        level
    }

    /// Picks up to `count` distinct walkable cells not yet in `used`.
    fn sample_free(
        &mut self,
        maze: &[Vec<Cell>],
        count: usize,
        used: &mut HashSet<GridPoint>,
    ) -> Vec<GridPoint> {
        let candidates: Vec<GridPoint> = walkable_cells(maze)
            .filter(|point| !used.contains(point))
            .collect();
        let picked: Vec<GridPoint> = candidates
            .choose_multiple(&mut self.rng, count)
            .copied()
            .collect();
        used.extend(picked.iter().copied());
        picked
    }

    /// A walkable cell free of gems, monsters, and `exclude`.
    fn free_cell(&mut self, level: &LevelSpec, exclude: &[GridPoint]) -> GridPoint {
        let occupied: HashSet<GridPoint> = level
            .blue_gems
            .iter()
            .chain(&level.red_gems)
            .chain(&level.monsters)
            .chain(exclude)
            .copied()
            .collect();
        let mut candidates: Vec<GridPoint> = walkable_cells(&level.maze)
            .filter(|point| !occupied.contains(point) && *point != GridPoint::new(0, 0))
            .collect();
        if candidates.is_empty() {
            candidates = walkable_cells(&level.maze).collect();
        }
        candidates
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(GridPoint::new(0, 0))
    }
}

fn walkable_cells(maze: &[Vec<Cell>]) -> impl Iterator<Item = GridPoint> + '_ {
    maze.iter().enumerate().flat_map(|(y, row)| {
        row.iter()
            .enumerate()
            .filter(|(_, cell)| cell.walkable)
            .map(move |(x, _)| GridPoint::new(x as i32, y as i32))
    })
}
