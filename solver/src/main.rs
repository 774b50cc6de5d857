//! mazestep: watch a depth-first search solve a maze.
//!
//! Press SPACE to start, R to reset, UP/DOWN to change the step speed and
//! ESC to quit. `--headless` solves at once and prints the result instead.

mod colors;
mod config;
mod headless;
mod logging;
mod model;

use std::error::Error;

use clap::Parser;
use maze_search::RunController;
use maze_term::{App, AppConfig, CrosstermDriver, DEFAULT_FRAME_TIME};

use crate::config::Cli;
use crate::model::{SolverModel, screen_size};

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    logging::init(cli.log_level, cli.log_file.as_deref(), cli.headless)?;

    let maze = config::load_maze(&cli)?;
    let ctrl = RunController::new(maze).with_speed(cli.speed())?;
    if cli.headless {
        return headless::run(ctrl);
    }

    let maze = ctrl.maze();
    let (width, height) = screen_size(maze).ok_or_else(|| {
        format!(
            "a {}x{} maze does not fit on a terminal screen, use --headless",
            maze.rows(),
            maze.cols()
        )
    })?;
    let mut app = App::new(AppConfig {
        model: SolverModel::new(ctrl),
        driver: CrosstermDriver::new(),
        width,
        height,
        frame_time: DEFAULT_FRAME_TIME,
    });
    app.run()
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
