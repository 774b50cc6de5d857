//! Non-interactive solving: run to completion and print the result.

use std::error::Error;

use maze_search::{RunController, RunState};

use crate::model::CellLook;

/// The maze as text, one line per row, using [`CellLook::glyph`].
pub fn render_text(ctrl: &RunController) -> String {
    let maze = ctrl.maze();
    let mut out = String::with_capacity((maze.cols() + 1) * maze.rows());
    for (p, _) in maze.iter() {
        out.push(CellLook::of(ctrl, p).glyph());
        if p.col as usize + 1 == maze.cols() {
            out.push('\n');
        }
    }
    out
}

/// One-line outcome of a finished run.
pub fn summary(ctrl: &RunController) -> String {
    match ctrl.state() {
        RunState::Solved => format!(
            "Maze solved: path of {} cells, {} cells visited",
            ctrl.solution().len(),
            ctrl.visited_count()
        ),
        RunState::Exhausted => {
            format!("No solution: {} cells visited", ctrl.visited_count())
        }
        RunState::Idle | RunState::Running => "Not solved".to_owned(),
    }
}

/// Solve without animation and print the outcome followed by the maze.
pub fn run(mut ctrl: RunController) -> Result<(), Box<dyn Error>> {
    ctrl.start_solving()?;
    ctrl.finish();
    println!("{}", summary(&ctrl));
    print!("{}", render_text(&ctrl));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_grid::{Maze, presets};

    fn solved(maze: Maze) -> RunController {
        let mut ctrl = RunController::new(maze);
        ctrl.start_solving().unwrap();
        ctrl.finish();
        ctrl
    }

    #[test]
    fn idle_maze_renders_its_layout() {
        let ctrl = RunController::new(presets::small());
        let text = render_text(&ctrl);
        assert_eq!(text.lines().count(), 8);
        assert_eq!(text.lines().nth(1), Some("#S..#..#"));
        assert_eq!(summary(&ctrl), "Not solved");
    }

    #[test]
    fn corridor_solution_is_starred() {
        let maze: Maze = "#####\n#S..G\n#####".parse().unwrap();
        let ctrl = solved(maze);
        assert_eq!(render_text(&ctrl), "#####\n#S**G\n#####\n");
        assert_eq!(
            summary(&ctrl),
            "Maze solved: path of 4 cells, 4 cells visited"
        );
    }

    #[test]
    fn dead_ends_show_as_visited() {
        let maze: Maze = "#####\n#.S.G\n#####".parse().unwrap();
        let ctrl = solved(maze);
        // Right is explored first, so the left dead end is never entered.
        assert_eq!(render_text(&ctrl), "#####\n#.S*G\n#####\n");

        let maze: Maze = "#####\n#.S#G\n#####".parse().unwrap();
        let ctrl = solved(maze);
        assert_eq!(ctrl.state(), RunState::Exhausted);
        // The dead end was the last cell examined.
        assert_eq!(render_text(&ctrl), "#####\n#@S#G\n#####\n");
        assert_eq!(summary(&ctrl), "No solution: 2 cells visited");
    }

    #[test]
    fn missing_start_is_reported() {
        let maze: Maze = "#..G#".parse().unwrap();
        assert!(run(RunController::new(maze)).is_err());
    }
}
