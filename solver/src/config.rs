//! Command-line options and maze loading.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use maze_grid::{Maze, MazeGen, presets};
use maze_search::{SpeedConfig, is_reachable};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Which built-in maze to load.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MazeChoice {
    /// The 8x8 demo maze.
    #[default]
    Small,
    /// The 12x12 demo maze.
    Medium,
    /// A freshly generated maze (see --rows, --cols, --seed).
    Random,
}

/// Watch a depth-first search find its way through a maze.
#[derive(Parser, Debug)]
#[command(name = "mazestep", version, about)]
pub struct Cli {
    /// Built-in maze to solve.
    #[arg(long, value_enum, default_value_t = MazeChoice::Small)]
    pub maze: MazeChoice,

    /// Load the maze from a text file ('#' wall, '.' open, 'S' start, 'G' goal).
    #[arg(long, conflicts_with = "maze")]
    pub file: Option<PathBuf>,

    /// Rows of a generated maze.
    #[arg(long, default_value_t = 15)]
    pub rows: usize,

    /// Columns of a generated maze.
    #[arg(long, default_value_t = 15)]
    pub cols: usize,

    /// Seed for the maze generator; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial delay between search steps, in milliseconds.
    #[arg(long, default_value_t = 100)]
    pub interval: u64,

    /// Shortest allowed step delay, in milliseconds.
    #[arg(long, default_value_t = 50)]
    pub min_interval: u64,

    /// Longest allowed step delay, in milliseconds.
    #[arg(long, default_value_t = 500)]
    pub max_interval: u64,

    /// Amount one speed key changes the delay by, in milliseconds.
    #[arg(long, default_value_t = 25)]
    pub speed_step: u64,

    /// Solve without animation and print the result.
    #[arg(long)]
    pub headless: bool,

    /// Write log records to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace.
    #[arg(long, default_value = "info")]
    pub log_level: log::LevelFilter,
}

impl Cli {
    pub fn speed(&self) -> SpeedConfig {
        SpeedConfig {
            initial: Duration::from_millis(self.interval),
            min: Duration::from_millis(self.min_interval),
            max: Duration::from_millis(self.max_interval),
            step: Duration::from_millis(self.speed_step),
        }
    }
}

/// Build the maze the options ask for.
pub fn load_maze(cli: &Cli) -> Result<Maze, Box<dyn Error>> {
    let maze = match (&cli.file, cli.maze) {
        (Some(path), _) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            let maze: Maze = text.parse()?;
            log::info!("loaded {}x{} maze from {}", maze.rows(), maze.cols(), path.display());
            maze
        }
        (None, MazeChoice::Small) => presets::small(),
        (None, MazeChoice::Medium) => presets::medium(),
        (None, MazeChoice::Random) => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            log::info!("generating {}x{} maze with seed {seed}", cli.rows, cli.cols);
            MazeGen::new(StdRng::seed_from_u64(seed)).generate(cli.rows, cli.cols)?
        }
    };

    if let (Ok(start), Ok(goal)) = (maze.find_start(), maze.find_goal()) {
        if !is_reachable(&maze, start, goal) {
            log::warn!("goal {goal} is not reachable from start {start}");
        }
    }
    Ok(maze)
}
